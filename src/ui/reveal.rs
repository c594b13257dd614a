//! DOM binding for the reveal state machine.
//!
//! On the hydrate side this walks every element carrying the `data-reveal`
//! marker attribute, registers it with a [`RevealController`], and drives the
//! controller from a single `IntersectionObserver`. Phase changes come back
//! out as class changes (`is-visible`) plus an inline `transition-delay` for
//! staggered grid items. A delegated `transitionend` listener finalizes
//! Revealing → Settled.
//!
//! When IntersectionObserver is missing the binding settles every unit up
//! front: content is shown unanimated, never left hidden.
//!
//! Markup contract (see the landing page):
//! - `data-reveal` + class `reveal` on each animated unit
//! - `data-reveal-index="N"` on grid items for the sibling stagger
//! - `data-reveal-id` is written back here so observer entries map to units

/// Fraction of a unit that must be on screen before it reveals.
pub const INTERSECTION_THRESHOLD: f64 = 0.1;

/// Bottom inset so units start revealing slightly before fully scrolled in.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Scan the document and start observing reveal units. Server-side this is
/// a no-op; the page renders with every unit in its pre-reveal state.
pub fn activate() {
    #[cfg(not(feature = "ssr"))]
    dom::activate();
}

#[cfg(not(feature = "ssr"))]
mod dom {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::web_sys;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use super::{INTERSECTION_THRESHOLD, ROOT_MARGIN};
    use crate::core::reveal::{RevealController, RevealPolicy, Transition, UnitId};

    pub(super) fn activate() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all("[data-reveal]") else {
            return;
        };

        let mut controller = RevealController::new();
        let mut elements: Vec<web_sys::Element> = Vec::new();
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            let Ok(element) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            let stagger_index = element
                .get_attribute("data-reveal-index")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(0);
            if let Err(err) = controller.register(i, stagger_index, RevealPolicy::OnceThenLock) {
                leptos::logging::warn!("reveal: {err}");
                continue;
            }
            let _ = element.set_attribute("data-reveal-id", &i.to_string());
            elements.push(element);
        }

        if elements.is_empty() {
            return;
        }

        if !observer_supported() {
            settle_everything(&mut controller, &elements);
            return;
        }

        let controller = Rc::new(RefCell::new(controller));
        attach_transition_end(&document, Rc::clone(&controller));

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(INTERSECTION_THRESHOLD));
        init.set_root_margin(ROOT_MARGIN);

        let callback = {
            let controller = Rc::clone(&controller);
            Closure::<dyn Fn(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>()
                        else {
                            continue;
                        };
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        let Some(id) = unit_id_of(&target) else {
                            continue;
                        };
                        match controller.borrow_mut().observe(id, true) {
                            Ok(Transition::Began { delay }) => {
                                if !delay.is_zero()
                                    && let Some(html) = target.dyn_ref::<web_sys::HtmlElement>()
                                {
                                    let _ = html.style().set_property(
                                        "transition-delay",
                                        &format!("{}ms", delay.as_millis()),
                                    );
                                }
                                let _ = target.class_list().add_1("is-visible");
                                // OnceThenLock: stop watching once the reveal starts
                                observer.unobserve(&target);
                            }
                            Ok(Transition::Unchanged) => {}
                            Err(err) => leptos::logging::warn!("reveal: {err}"),
                        }
                    }
                },
            )
        };

        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => {
                // Units already inside the viewport get their first callback
                // right away, so above-the-fold content reveals without any
                // scroll event.
                for element in &elements {
                    observer.observe(element);
                }
                callback.forget();
            }
            Err(_) => {
                let mut controller = controller.borrow_mut();
                settle_everything(&mut controller, &elements);
            }
        }
    }

    fn observer_supported() -> bool {
        web_sys::window().is_some_and(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
    }

    /// Degraded mode: everything visible, no animation.
    fn settle_everything(controller: &mut RevealController, elements: &[web_sys::Element]) {
        controller.settle_all();
        for element in elements {
            let _ = element.class_list().add_2("is-visible", "reveal-instant");
        }
    }

    fn attach_transition_end(document: &web_sys::Document, controller: Rc<RefCell<RevealController>>) {
        let on_transition_end = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };
            if let Some(id) = unit_id_of(&target) {
                let _ = controller.borrow_mut().transition_complete(id);
            }
        });
        let _ = document.add_event_listener_with_callback(
            "transitionend",
            on_transition_end.as_ref().unchecked_ref(),
        );
        // Page-lifetime listener
        on_transition_end.forget();
    }

    fn unit_id_of(element: &web_sys::Element) -> Option<UnitId> {
        element
            .get_attribute("data-reveal-id")
            .and_then(|v| v.parse().ok())
    }
}
