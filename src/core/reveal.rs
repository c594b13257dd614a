//! Reveal state machine for scroll-triggered section animations.
//!
//! Each independently animated element on the page (a full section or a
//! single card inside a grid) is a *visual unit*. A unit starts `Hidden`,
//! begins `Revealing` the first time its bounding box intersects the
//! viewport, and is `Settled` once its transition finishes. Under the
//! `OnceThenLock` policy a Settled unit never goes back to Hidden, no matter
//! how the user scrolls.
//!
//! The machine is plain Rust with no DOM knowledge. On the hydrate side
//! `crate::ui::reveal` feeds it IntersectionObserver events and applies the
//! resulting class changes; when intersection observation is unavailable the
//! caller uses [`RevealController::settle_all`] so content is shown without
//! animation rather than left hidden.

use std::collections::HashMap;
use std::time::Duration;

use derive_more::Display;
use thiserror::Error;

/// Length of a unit's opacity/offset transition.
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Extra delay added per sibling index inside a feature grid, so cards
/// animate in declared order instead of all at once.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Identifier for a visual unit, assigned by the caller at registration.
pub type UnitId = u32;

/// Animation phase of a single visual unit.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq)]
pub enum RevealPhase {
    /// Laid out but rendered at reduced opacity and vertical offset.
    #[default]
    #[display("hidden")]
    Hidden,
    /// Transition towards the settled values is running.
    #[display("revealing")]
    Revealing,
    /// Final visible state.
    #[display("settled")]
    Settled,
}

/// Retrigger rule for a unit.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq)]
pub enum RevealPolicy {
    /// First intersection wins; Settled is terminal. Used by every unit on
    /// the page.
    #[default]
    #[display("once-then-lock")]
    OnceThenLock,
    /// Unit re-arms after it leaves the viewport.
    #[display("repeatable")]
    Repeatable,
}

/// Outcome of feeding an intersection event to a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The unit just started revealing; apply its stagger delay.
    Began { delay: Duration },
    /// Nothing to apply (already revealing/settled, or not intersecting).
    Unchanged,
}

/// Errors for controller misuse. None of these are fatal on the page; the
/// DOM binding logs and skips the unit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RevealError {
    #[error("visual unit {0} is already registered")]
    DuplicateUnit(UnitId),
    #[error("visual unit {0} is not registered")]
    UnknownUnit(UnitId),
}

#[derive(Clone, Copy, Debug)]
struct Unit {
    phase: RevealPhase,
    policy: RevealPolicy,
    stagger_index: usize,
}

impl Unit {
    fn stagger_delay(&self) -> Duration {
        STAGGER_STEP * self.stagger_index as u32
    }
}

/// Owns one [`RevealPhase`] per visual unit, keyed by unit id. The
/// controller holds no content and no DOM handles; it only tracks phases and
/// sibling positions.
#[derive(Debug, Default)]
pub struct RevealController {
    units: HashMap<UnitId, Unit>,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit in the `Hidden` phase. `stagger_index` is the unit's
    /// position among its grid siblings; top-level sections pass 0 and get
    /// no extra delay.
    pub fn register(
        &mut self,
        id: UnitId,
        stagger_index: usize,
        policy: RevealPolicy,
    ) -> Result<(), RevealError> {
        if self.units.contains_key(&id) {
            return Err(RevealError::DuplicateUnit(id));
        }
        self.units.insert(
            id,
            Unit {
                phase: RevealPhase::Hidden,
                policy,
                stagger_index,
            },
        );
        Ok(())
    }

    /// Delay before the unit's transition starts, derived from its sibling
    /// index.
    pub fn stagger_delay(&self, id: UnitId) -> Result<Duration, RevealError> {
        self.unit(id).map(Unit::stagger_delay)
    }

    pub fn phase(&self, id: UnitId) -> Result<RevealPhase, RevealError> {
        self.unit(id).map(|u| u.phase)
    }

    /// Feed an intersection event for one unit. A unit already inside the
    /// viewport when observation starts receives `intersecting = true`
    /// immediately, so no scroll is required to reveal above-the-fold
    /// content.
    pub fn observe(&mut self, id: UnitId, intersecting: bool) -> Result<Transition, RevealError> {
        let unit = self.unit_mut(id)?;
        match (unit.phase, intersecting) {
            (RevealPhase::Hidden, true) => {
                unit.phase = RevealPhase::Revealing;
                Ok(Transition::Began {
                    delay: unit.stagger_delay(),
                })
            }
            // Re-arm only under the Repeatable policy, and only once the
            // previous reveal finished.
            (RevealPhase::Settled, false) if unit.policy == RevealPolicy::Repeatable => {
                unit.phase = RevealPhase::Hidden;
                Ok(Transition::Unchanged)
            }
            _ => Ok(Transition::Unchanged),
        }
    }

    /// Mark a unit's running transition as finished. Stray completion events
    /// (e.g. bubbled transitionend from a child) leave the phase untouched.
    pub fn transition_complete(&mut self, id: UnitId) -> Result<RevealPhase, RevealError> {
        let unit = self.unit_mut(id)?;
        if unit.phase == RevealPhase::Revealing {
            unit.phase = RevealPhase::Settled;
        }
        Ok(unit.phase)
    }

    /// Remove a unit. A transition pending on an unmounted unit is simply
    /// abandoned; there is nothing to roll back.
    pub fn unmount(&mut self, id: UnitId) -> Result<(), RevealError> {
        self.units
            .remove(&id)
            .map(|_| ())
            .ok_or(RevealError::UnknownUnit(id))
    }

    /// Degraded mode: move every unit straight to `Settled`. Used when
    /// IntersectionObserver is unavailable — content visibility wins over
    /// animation fidelity.
    pub fn settle_all(&mut self) {
        for unit in self.units.values_mut() {
            unit.phase = RevealPhase::Settled;
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn unit(&self, id: UnitId) -> Result<&Unit, RevealError> {
        self.units.get(&id).ok_or(RevealError::UnknownUnit(id))
    }

    fn unit_mut(&mut self, id: UnitId) -> Result<&mut Unit, RevealError> {
        self.units.get_mut(&id).ok_or(RevealError::UnknownUnit(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_with(id: UnitId, index: usize, policy: RevealPolicy) -> RevealController {
        let mut controller = RevealController::new();
        controller.register(id, index, policy).unwrap();
        controller
    }

    // ========================================================================
    // Registration
    // ========================================================================

    #[test]
    fn test_register_starts_hidden() {
        let controller = controller_with(1, 0, RevealPolicy::OnceThenLock);
        assert_eq!(controller.phase(1), Ok(RevealPhase::Hidden));
        assert_eq!(controller.len(), 1);
    }

    #[test]
    fn test_register_duplicate_is_an_error() {
        let mut controller = controller_with(1, 0, RevealPolicy::OnceThenLock);
        assert_eq!(
            controller.register(1, 2, RevealPolicy::OnceThenLock),
            Err(RevealError::DuplicateUnit(1))
        );
        // Original registration untouched
        assert_eq!(controller.stagger_delay(1), Ok(Duration::ZERO));
    }

    #[test]
    fn test_unknown_unit_is_an_error() {
        let mut controller = RevealController::new();
        assert_eq!(controller.phase(9), Err(RevealError::UnknownUnit(9)));
        assert_eq!(
            controller.observe(9, true),
            Err(RevealError::UnknownUnit(9))
        );
        assert_eq!(controller.unmount(9), Err(RevealError::UnknownUnit(9)));
    }

    // ========================================================================
    // Phase transitions
    // ========================================================================

    #[test]
    fn test_first_intersection_begins_reveal() {
        let mut controller = controller_with(1, 0, RevealPolicy::OnceThenLock);
        let transition = controller.observe(1, true).unwrap();
        assert_eq!(
            transition,
            Transition::Began {
                delay: Duration::ZERO
            }
        );
        assert_eq!(controller.phase(1), Ok(RevealPhase::Revealing));
    }

    #[test]
    fn test_unit_in_initial_viewport_reveals_without_scroll() {
        // The observer delivers intersecting=true right after observe() for
        // targets already on screen; registration alone must be enough state.
        let mut controller = controller_with(1, 0, RevealPolicy::OnceThenLock);
        assert!(matches!(
            controller.observe(1, true).unwrap(),
            Transition::Began { .. }
        ));
        assert_eq!(
            controller.transition_complete(1),
            Ok(RevealPhase::Settled)
        );
    }

    #[test]
    fn test_settled_is_terminal_under_once_then_lock() {
        let mut controller = controller_with(1, 0, RevealPolicy::OnceThenLock);
        controller.observe(1, true).unwrap();
        controller.transition_complete(1).unwrap();

        // Scroll away and back, repeatedly
        for _ in 0..3 {
            assert_eq!(controller.observe(1, false), Ok(Transition::Unchanged));
            assert_eq!(controller.observe(1, true), Ok(Transition::Unchanged));
            assert_eq!(controller.phase(1), Ok(RevealPhase::Settled));
        }
    }

    #[test]
    fn test_revealing_does_not_restart_on_repeat_intersection() {
        let mut controller = controller_with(1, 3, RevealPolicy::OnceThenLock);
        assert!(matches!(
            controller.observe(1, true).unwrap(),
            Transition::Began { .. }
        ));
        assert_eq!(controller.observe(1, true), Ok(Transition::Unchanged));
        assert_eq!(controller.phase(1), Ok(RevealPhase::Revealing));
    }

    #[test]
    fn test_repeatable_rearms_after_leaving_viewport() {
        let mut controller = controller_with(1, 0, RevealPolicy::Repeatable);
        controller.observe(1, true).unwrap();
        controller.transition_complete(1).unwrap();
        assert_eq!(controller.phase(1), Ok(RevealPhase::Settled));

        controller.observe(1, false).unwrap();
        assert_eq!(controller.phase(1), Ok(RevealPhase::Hidden));

        // Second pass through the viewport animates again
        assert!(matches!(
            controller.observe(1, true).unwrap(),
            Transition::Began { .. }
        ));
    }

    #[test]
    fn test_repeatable_does_not_rearm_mid_reveal() {
        let mut controller = controller_with(1, 0, RevealPolicy::Repeatable);
        controller.observe(1, true).unwrap();
        controller.observe(1, false).unwrap();
        assert_eq!(controller.phase(1), Ok(RevealPhase::Revealing));
    }

    #[test]
    fn test_stray_transition_complete_is_harmless() {
        let mut controller = controller_with(1, 0, RevealPolicy::OnceThenLock);
        assert_eq!(controller.transition_complete(1), Ok(RevealPhase::Hidden));
        controller.observe(1, true).unwrap();
        controller.transition_complete(1).unwrap();
        assert_eq!(
            controller.transition_complete(1),
            Ok(RevealPhase::Settled)
        );
    }

    // ========================================================================
    // Stagger
    // ========================================================================

    #[test]
    fn test_stagger_delay_scales_with_sibling_index() {
        let mut controller = RevealController::new();
        for index in 0..6 {
            controller
                .register(index as UnitId, index, RevealPolicy::OnceThenLock)
                .unwrap();
        }

        let mut previous = Duration::ZERO;
        for index in 0..6u32 {
            let delay = controller.stagger_delay(index).unwrap();
            assert_eq!(delay, STAGGER_STEP * index);
            assert!(delay >= previous, "stagger must be monotonic");
            previous = delay;
        }
    }

    #[test]
    fn test_top_level_sections_have_no_extra_delay() {
        let mut controller = controller_with(1, 0, RevealPolicy::OnceThenLock);
        assert_eq!(controller.stagger_delay(1), Ok(Duration::ZERO));
        assert_eq!(
            controller.observe(1, true),
            Ok(Transition::Began {
                delay: Duration::ZERO
            })
        );
    }

    // ========================================================================
    // Lifecycle and degraded mode
    // ========================================================================

    #[test]
    fn test_unmount_mid_reveal_abandons_transition() {
        let mut controller = controller_with(1, 0, RevealPolicy::OnceThenLock);
        controller.observe(1, true).unwrap();
        controller.unmount(1).unwrap();
        assert!(controller.is_empty());
        assert_eq!(
            controller.transition_complete(1),
            Err(RevealError::UnknownUnit(1))
        );
    }

    #[test]
    fn test_settle_all_shows_everything() {
        let mut controller = RevealController::new();
        controller.register(0, 0, RevealPolicy::OnceThenLock).unwrap();
        controller.register(1, 1, RevealPolicy::Repeatable).unwrap();
        controller.register(2, 2, RevealPolicy::OnceThenLock).unwrap();
        controller.observe(1, true).unwrap();

        controller.settle_all();
        for id in 0..3 {
            assert_eq!(controller.phase(id), Ok(RevealPhase::Settled));
        }
    }
}
