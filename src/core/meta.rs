//! Site metadata descriptor.
//!
//! One immutable [`SiteMetadata`] value, constructed at compile time and
//! consumed by the `SeoMeta` component when the document head is generated.
//! Nothing here validates URLs; malformed values are a deployment concern,
//! not caught at this layer.

use serde_json::json;

use crate::core::content;

/// Open Graph preview image reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OgImage {
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub site_name: &'static str,
    pub images: &'static [OgImage],
    pub locale: &'static str,
    pub kind: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub images: &'static [&'static str],
}

/// Crawler directives, rendered to a single `robots` meta content string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RobotsDirectives {
    pub index: bool,
    pub follow: bool,
    pub max_video_preview: i32,
    pub max_image_preview: &'static str,
    pub max_snippet: i32,
}

impl RobotsDirectives {
    pub fn content(&self) -> String {
        format!(
            "{}, {}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" },
            self.max_video_preview,
            self.max_image_preview,
            self.max_snippet,
        )
    }
}

/// Per-deployment verification tokens. Supplied at build time; the meta tag
/// is omitted entirely when a token is unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verification {
    pub google: Option<&'static str>,
}

/// The single metadata descriptor for the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub creator: &'static str,
    pub publisher: &'static str,
    /// Origin all relative URLs resolve against.
    pub base_url: &'static str,
    /// Canonical path, relative to `base_url`.
    pub canonical: &'static str,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: RobotsDirectives,
    pub verification: Verification,
}

impl SiteMetadata {
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }

    /// Absolute canonical URL (`base_url` + canonical path).
    pub fn canonical_url(&self) -> String {
        let path = self.canonical.trim_start_matches('/');
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Absolute URL for a document-relative asset path.
    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// JSON-LD `SoftwareApplication` block for search engines. The feature
    /// list mirrors the content model so the two never drift apart.
    pub fn json_ld(&self) -> String {
        let feature_list: Vec<&str> = content::FEATURES.iter().map(|f| f.title).collect();
        json!({
            "@context": "https://schema.org",
            "@type": "SoftwareApplication",
            "name": content::APP_NAME,
            "applicationCategory": "UtilitiesApplication",
            "operatingSystem": "Windows 10/11",
            "description": self.description,
            "url": self.canonical_url(),
            "author": {
                "@type": "Organization",
                "name": self.author,
            },
            "offers": {
                "@type": "Offer",
                "price": "0",
                "priceCurrency": "USD",
            },
            "featureList": feature_list,
        })
        .to_string()
    }
}

pub const SITE_METADATA: SiteMetadata = SiteMetadata {
    title: "Save Forge - Game Save Profile Manager for Windows",
    description: "Save Forge is a powerful desktop application for managing multiple save \
                  profiles for games. Perfect for households with multiple players who want \
                  to easily switch between different save states.",
    keywords: &[
        "game save manager",
        "save profiles",
        "game backup",
        "save switching",
        "desktop application",
        "Windows",
        "Flutter",
    ],
    author: "Save Forge Team",
    creator: "Save Forge",
    publisher: "Save Forge",
    base_url: "https://save-forge.com",
    canonical: "/",
    open_graph: OpenGraph {
        title: "Save Forge - Game Save Profile Manager",
        description: "Manage multiple save profiles for games with ease. Perfect for \
                      households with multiple players.",
        url: "https://save-forge.com",
        site_name: "Save Forge",
        images: &[OgImage {
            url: "/og-image.png",
            width: 1200,
            height: 630,
            alt: "Save Forge - Game Save Profile Manager",
        }],
        locale: "en_US",
        kind: "website",
    },
    twitter: TwitterCard {
        card: "summary_large_image",
        title: "Save Forge - Game Save Profile Manager",
        description: "Manage multiple save profiles for games with ease.",
        images: &["/og-image.png"],
    },
    robots: RobotsDirectives {
        index: true,
        follow: true,
        max_video_preview: -1,
        max_image_preview: "large",
        max_snippet: -1,
    },
    verification: Verification {
        google: option_env!("SAVEFORGE_GOOGLE_VERIFICATION"),
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_round_trips_the_literal_configuration() {
        let meta = SITE_METADATA;
        assert_eq!(
            meta.title,
            "Save Forge - Game Save Profile Manager for Windows"
        );
        assert_eq!(meta.base_url, "https://save-forge.com");
        assert_eq!(meta.canonical, "/");
        assert_eq!(meta.author, "Save Forge Team");
        assert_eq!(meta.creator, "Save Forge");
        assert_eq!(meta.publisher, "Save Forge");
        assert_eq!(meta.open_graph.site_name, "Save Forge");
        assert_eq!(meta.open_graph.locale, "en_US");
        assert_eq!(meta.open_graph.kind, "website");
        assert_eq!(meta.twitter.card, "summary_large_image");
        assert_eq!(meta.keywords.len(), 7);
    }

    #[test]
    fn test_social_image_is_1200_by_630() {
        let image = &SITE_METADATA.open_graph.images[0];
        assert_eq!(image.url, "/og-image.png");
        assert_eq!((image.width, image.height), (1200, 630));
        assert_eq!(SITE_METADATA.twitter.images, &["/og-image.png"]);
    }

    #[test]
    fn test_canonical_url_joins_base_and_path() {
        assert_eq!(SITE_METADATA.canonical_url(), "https://save-forge.com/");
        assert_eq!(
            SITE_METADATA.absolute_url("/og-image.png"),
            "https://save-forge.com/og-image.png"
        );
    }

    #[test]
    fn test_keywords_join_with_commas() {
        let content = SITE_METADATA.keywords_content();
        assert!(content.starts_with("game save manager, save profiles"));
        assert!(content.ends_with("Windows, Flutter"));
    }

    #[test]
    fn test_robots_content_string() {
        assert_eq!(
            SITE_METADATA.robots.content(),
            "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
        );

        let blocked = RobotsDirectives {
            index: false,
            follow: false,
            ..SITE_METADATA.robots
        };
        assert!(blocked.content().starts_with("noindex, nofollow"));
    }

    #[test]
    fn test_json_ld_is_valid_and_mirrors_the_content_model() {
        let raw = SITE_METADATA.json_ld();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["@type"], "SoftwareApplication");
        assert_eq!(value["name"], "Save Forge");
        assert_eq!(value["offers"]["price"], "0");
        assert_eq!(
            value["featureList"].as_array().unwrap().len(),
            crate::core::content::FEATURES.len()
        );
    }
}
