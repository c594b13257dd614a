use leptos::prelude::*;

/// Inline SVG icon keyed by symbolic id. All icons are 24x24 stroke
/// outlines; unknown ids fall back to the lightning bolt.
#[component]
pub fn Icon(
    /// Symbolic icon id from the [`icons`] module
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon_path(name) />
        </svg>
    }
}

/// GitHub mark, filled rather than stroked, so it keeps its own component.
#[component]
pub fn GithubIcon(#[prop(default = "w-5 h-5")] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z" />
        </svg>
    }
}

pub(crate) fn icon_path(name: &'static str) -> &'static str {
    match name {
        icons::GAMEPAD => {
            "M6 11h4 M8 9v4 M15 12h.01 M18 10h.01 M17.32 5H6.68a4 4 0 0 0-3.98 3.59 \
             C2.6 9.42 2 14.46 2 16a3 3 0 0 0 3 3c1 0 1.5-.5 2-1l1.41-1.41A2 2 0 0 1 9.83 16 \
             h4.34a2 2 0 0 1 1.42.59L17 18c.5.5 1 1 2 1a3 3 0 0 0 3-3c0-1.54-.6-6.58-.68-7.26 \
             A4 4 0 0 0 17.32 5z"
        }
        icons::USERS => {
            "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2 M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0 \
             M23 21v-2a4 4 0 0 0-3-3.87 M16 3.13a4 4 0 0 1 0 7.75"
        }
        icons::REFRESH => {
            "M23 4v6h-6 M1 20v-6h6 M3.51 9a9 9 0 0 1 14.85-3.36L23 10 \
             M1 14l4.64 4.36A9 9 0 0 0 20.49 15"
        }
        icons::ROCKET => {
            "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91 \
             a2.18 2.18 0 0 0-2.91-.09z \
             M12 15l-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11 \
             a22.35 22.35 0 0 1-4 2z \
             M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0 \
             M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"
        }
        icons::SHIELD => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
        icons::ZAP => "M13 2L3 14h9l-1 8 10-12h-9l1-8z",
        icons::DOWNLOAD => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4 M7 10l5 5 5-5 M12 15V3",
        icons::STAR => {
            "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27 \
             l6.91-1.01L12 2z"
        }
        icons::CHECK_CIRCLE => "M22 11.08V12a10 10 0 1 1-5.93-9.14 M22 4L12 14.01l-3-3",
        icons::ARROW_RIGHT => "M5 12h14 M12 5l7 7-7 7",
        icons::COFFEE => {
            "M18 8h1a4 4 0 0 1 0 8h-1 M2 8h16v9a4 4 0 0 1-4 4H6a4 4 0 0 1-4-4V8z \
             M6 1v3 M10 1v3 M14 1v3"
        }
        icons::HEART => {
            "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78 \
             l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"
        }
        icons::MENU => "M3 12h18 M3 6h18 M3 18h18",
        icons::X => "M18 6L6 18 M6 6l12 12",
        _ => "M13 2L3 14h9l-1 8 10-12h-9l1-8z",
    }
}

/// Symbolic icon ids used by the content model and page components.
pub mod icons {
    pub const GAMEPAD: &str = "gamepad";
    pub const USERS: &str = "users";
    pub const REFRESH: &str = "refresh";
    pub const ROCKET: &str = "rocket";
    pub const SHIELD: &str = "shield";
    pub const ZAP: &str = "zap";
    pub const DOWNLOAD: &str = "download";
    pub const STAR: &str = "star";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const COFFEE: &str = "coffee";
    pub const HEART: &str = "heart";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_IDS: &[&str] = &[
        icons::GAMEPAD,
        icons::USERS,
        icons::REFRESH,
        icons::ROCKET,
        icons::SHIELD,
        icons::ZAP,
        icons::DOWNLOAD,
        icons::STAR,
        icons::CHECK_CIRCLE,
        icons::ARROW_RIGHT,
        icons::COFFEE,
        icons::HEART,
        icons::MENU,
        icons::X,
    ];

    #[test]
    fn test_every_id_resolves_to_path_data() {
        for id in ALL_IDS {
            let path = icon_path(id);
            assert!(path.starts_with('M'), "{id} resolves to invalid path data");
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_zap() {
        assert_eq!(icon_path("no-such-icon"), icon_path(icons::ZAP));
    }
}
