//! Static content tables driving the landing page.
//!
//! Presentation order is meaningful: sections and cards render in the order
//! declared here. Everything is `'static` data; updating copy means editing
//! these tables, there is no mutation API.

use crate::ui::icon::icons;

/// One card in the features grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Symbolic icon id, resolved by `ui::icon::Icon`.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// 3–4 short capability bullets, rendered with a check mark each.
    pub capabilities: &'static [&'static str],
}

/// One row of the download facts table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DownloadFact {
    pub label: &'static str,
    pub value: &'static str,
}

/// One card in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// In-page navigation anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const APP_NAME: &str = "Save Forge";
pub const APP_VERSION: &str = "1.0.0+1";

// Outbound destinations. These are literal, fixed URLs — never user input.
pub const RELEASES_URL: &str = "https://github.com/djsmk123/save-forge/releases/";
pub const REPOSITORY_URL: &str = "https://github.com/djsmk123/save-forge";
pub const DONATION_URL: &str = "https://www.buymeacoffee.com/smkwinner";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Features",
        href: "#features",
    },
    NavLink {
        label: "Download",
        href: "#download",
    },
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Support",
        href: "#support",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: icons::GAMEPAD,
        title: "Game Management",
        description: "Add games with custom names and icons. Configure save game directories \
                      and set optional game executable paths for direct launching.",
        capabilities: &[
            "Custom game names",
            "Game icons",
            "Save directories",
            "Executable paths",
        ],
    },
    Feature {
        icon: icons::USERS,
        title: "Profile Management",
        description: "Create multiple save profiles per game with automatic default profile \
                      creation and visual distinction between profiles.",
        capabilities: &[
            "Multiple profiles",
            "Default profiles",
            "Profile renaming",
            "Visual distinction",
        ],
    },
    Feature {
        icon: icons::REFRESH,
        title: "Profile Switching",
        description: "Switch between save profiles with one click. Automatic backup of current \
                      saves before switching with status indicators.",
        capabilities: &[
            "One-click switching",
            "Automatic backup",
            "Status indicators",
            "Sync capabilities",
        ],
    },
    Feature {
        icon: icons::ROCKET,
        title: "Game Launching",
        description: "Launch games directly from the app with automatic profile switching \
                      before game launch and error handling.",
        capabilities: &[
            "Direct launching",
            "Auto profile switching",
            "Error handling",
            "Seamless integration",
        ],
    },
    Feature {
        icon: icons::SHIELD,
        title: "Data Protection",
        description: "Your save data is protected with automatic backups and safe switching \
                      mechanisms to prevent data loss.",
        capabilities: &[
            "Automatic backups",
            "Safe switching",
            "Data protection",
            "Recovery options",
        ],
    },
    Feature {
        icon: icons::ZAP,
        title: "Fast Performance",
        description: "Lightning-fast profile switching and game launching with optimized \
                      performance for the best user experience.",
        capabilities: &[
            "Fast switching",
            "Quick launching",
            "Optimized performance",
            "Smooth experience",
        ],
    },
];

pub const DOWNLOAD_FACTS: &[DownloadFact] = &[
    DownloadFact {
        label: "Platform",
        value: "Windows 10/11",
    },
    DownloadFact {
        label: "Size",
        value: "~50 MB",
    },
    DownloadFact {
        label: "Requirements",
        value: "Flutter Runtime",
    },
];

pub const VALUE_CARDS: &[ValueCard] = &[
    ValueCard {
        icon: icons::ZAP,
        title: "Built with Flutter",
        description: "Modern cross-platform framework for smooth performance",
    },
    ValueCard {
        icon: icons::SHIELD,
        title: "Safe & Secure",
        description: "Your save data is protected with automatic backups",
    },
    ValueCard {
        icon: icons::USERS,
        title: "Family Friendly",
        description: "Perfect for households with multiple players",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_features_render_in_declared_order() {
        let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                "Game Management",
                "Profile Management",
                "Profile Switching",
                "Game Launching",
                "Data Protection",
                "Fast Performance",
            ]
        );
    }

    #[test]
    fn test_feature_titles_are_unique() {
        let unique: HashSet<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(unique.len(), FEATURES.len());
    }

    #[test]
    fn test_capability_lists_hold_three_to_four_entries() {
        for feature in FEATURES {
            let len = feature.capabilities.len();
            assert!(
                (3..=4).contains(&len),
                "{} has {} capabilities",
                feature.title,
                len
            );
        }
    }

    #[test]
    fn test_download_facts_table() {
        assert_eq!(DOWNLOAD_FACTS.len(), 3);
        assert_eq!(DOWNLOAD_FACTS[0].label, "Platform");
        assert_eq!(DOWNLOAD_FACTS[0].value, "Windows 10/11");
        assert_eq!(DOWNLOAD_FACTS[1].value, "~50 MB");
        assert_eq!(DOWNLOAD_FACTS[2].value, "Flutter Runtime");
    }

    #[test]
    fn test_nav_links_cover_all_sections() {
        let targets: Vec<&str> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(targets, vec!["#features", "#download", "#about", "#support"]);
    }

    #[test]
    fn test_outbound_urls_are_the_fixed_literals() {
        assert_eq!(
            RELEASES_URL,
            "https://github.com/djsmk123/save-forge/releases/"
        );
        assert_eq!(REPOSITORY_URL, "https://github.com/djsmk123/save-forge");
        assert_eq!(DONATION_URL, "https://www.buymeacoffee.com/smkwinner");
        for url in [RELEASES_URL, REPOSITORY_URL, DONATION_URL] {
            assert!(url.starts_with("https://"));
        }
    }

    #[test]
    fn test_about_section_has_three_value_cards() {
        assert_eq!(VALUE_CARDS.len(), 3);
    }
}
