//! Landing page component
//!
//! The single marketing page for Save Forge featuring:
//! - SEO meta tags driven by the site metadata descriptor
//! - Hero section with download and learn-more calls to action
//! - Features grid generated from the content model, with staggered reveal
//! - Download section with a facts table and installer/source buttons
//! - Support section linking to the donation page and repository
//! - About section with three value cards
//! - Footer with outbound links and copyright

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{
    self, DownloadFact, Feature, NavLink, ValueCard, DONATION_URL, DOWNLOAD_FACTS, FEATURES,
    NAV_LINKS, RELEASES_URL, REPOSITORY_URL, VALUE_CARDS,
};
use crate::core::meta::SITE_METADATA;
use crate::ui::icon::{icons, GithubIcon, Icon};
use crate::ui::reveal;

/// Landing page component with scroll-based reveal animations
#[component]
pub fn LandingPage() -> impl IntoView {
    // Attach the IntersectionObserver binding once the page is live in the
    // browser; effects never run during server rendering.
    Effect::new(move |_| {
        reveal::activate();
    });

    view! {
        // SEO Meta Tags
        <SeoMeta />

        <div class="min-h-screen">
            <Header />
            <Hero />
            <FeaturesSection />
            <DownloadSection />
            <SupportSection />
            <AboutSection />
            <Footer />

            // CSS for hero entrance and scroll reveal
            <LandingStyles />
        </div>
    }
}

/// Open a fixed external destination in a new browsing context. A blocked
/// pop-up is the browser's to report; there is nothing to recover here.
fn open_external(url: &'static str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = leptos::web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = url;
    }
}

/// Fixed navigation bar with anchor links and a mobile menu
#[component]
fn Header() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <nav class="fixed top-0 w-full bg-dark-100/80 backdrop-blur-md z-50 border-b border-dark-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-2">
                        <Icon name=icons::GAMEPAD class="h-8 w-8 text-primary-400" />
                        <span class="text-xl font-bold gradient-text">{content::APP_NAME}</span>
                    </div>

                    // Desktop navigation
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <HeaderLink link=*link /> })
                            .collect_view()}
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg text-dark-400 hover:text-primary-400 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <div class="py-4 space-y-2 border-t border-dark-200">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let link = *link;
                                view! {
                                    <a
                                        href=link.href
                                        class="block px-4 py-2 text-dark-400 hover:text-primary-400 transition-colors"
                                        on:click=move |_| set_mobile_menu_open.set(false)
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn HeaderLink(link: NavLink) -> impl IntoView {
    view! {
        <a href=link.href class="text-dark-400 hover:text-primary-400 transition-colors">
            {link.label}
        </a>
    }
}

/// Hero section. Animates at document load with fixed delays; no scroll
/// trigger involved.
#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero-gradient pt-24 pb-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-5xl md:text-7xl font-bold text-balance mb-6 fade-in-up">
                        "Manage Your"
                        <span class="gradient-text block">"Game Saves"</span>
                        "Like Never Before"
                    </h1>
                    <p class="text-xl text-dark-400 max-w-3xl mx-auto mb-8 text-balance fade-in-up fade-delay-200">
                        "Save Forge is a powerful desktop application for managing multiple save profiles for games. "
                        "Perfect for households with multiple players who want to easily switch between different save states."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center fade-in-up fade-delay-400">
                        <a href="#download" class="btn-primary inline-flex items-center">
                            <Icon name=icons::DOWNLOAD class="mr-2 h-5 w-5" />
                            "Download for Windows"
                        </a>
                        <a href="#features" class="btn-outline inline-flex items-center">
                            "Learn More"
                            <Icon name=icons::ARROW_RIGHT class="ml-2 h-5 w-5" />
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Features grid driven by the content model. The section heading is one
/// reveal unit; each card is its own unit with a sibling stagger index.
#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-20 bg-dark-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16 reveal" data-reveal="">
                    <h2 class="text-4xl font-bold mb-4 text-dark-600">"Powerful Features"</h2>
                    <p class="text-xl text-dark-400 max-w-2xl mx-auto">
                        "Everything you need to manage your game saves efficiently"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=*feature index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    view! {
        <div class="card p-6 reveal" data-reveal="" data-reveal-index=index.to_string()>
            <div class="w-12 h-12 bg-primary-900/20 rounded-lg flex items-center justify-center mb-4">
                <Icon name=feature.icon class="h-6 w-6 text-primary-400" />
            </div>
            <h3 class="text-xl font-semibold mb-3 text-dark-600">{feature.title}</h3>
            <p class="text-dark-400 mb-4">{feature.description}</p>
            <ul class="space-y-2">
                {feature
                    .capabilities
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="flex items-center text-sm text-dark-500">
                                <Icon
                                    name=icons::CHECK_CIRCLE
                                    class="h-4 w-4 text-primary-400 mr-2 flex-shrink-0"
                                />
                                {*item}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Download section with the static facts table and the two installer
/// buttons. Both buttons open a new browsing context.
#[component]
fn DownloadSection() -> impl IntoView {
    view! {
        <section id="download" class="py-20 feature-gradient">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center reveal" data-reveal="">
                    <h2 class="text-4xl font-bold mb-4 text-dark-600">"Ready to Get Started?"</h2>
                    <p class="text-xl text-dark-400 max-w-2xl mx-auto mb-8">
                        "Download Save Forge and start managing your game saves like a pro"
                    </p>

                    <div class="bg-dark-100 rounded-2xl shadow-2xl p-8 max-w-2xl mx-auto border border-dark-200">
                        <div class="flex items-center justify-center mb-6">
                            <Icon name=icons::GAMEPAD class="h-16 w-16 text-primary-400 mr-4" />
                            <div class="text-left">
                                <h3 class="text-2xl font-bold text-dark-600">{content::APP_NAME}</h3>
                                <p class="text-dark-400">{format!("Version {}", content::APP_VERSION)}</p>
                            </div>
                        </div>

                        <div class="space-y-4 mb-8">
                            {DOWNLOAD_FACTS
                                .iter()
                                .map(|fact| view! { <DownloadFactRow fact=*fact /> })
                                .collect_view()}
                        </div>

                        <div class="flex flex-col sm:flex-row gap-4">
                            <button
                                class="btn-primary flex-1 flex items-center justify-center gap-2"
                                on:click=move |_| open_external(RELEASES_URL)
                            >
                                <Icon name=icons::DOWNLOAD class="h-5 w-5" />
                                <span>"Download Installer"</span>
                            </button>
                            <button
                                class="btn-outline flex-1 flex items-center justify-center gap-2"
                                on:click=move |_| open_external(REPOSITORY_URL)
                            >
                                <Icon name=icons::STAR class="h-5 w-5" />
                                <span>"View Source Code"</span>
                            </button>
                        </div>

                        <p class="text-sm text-dark-500 mt-4">
                            "Free to download and use. Open source project."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DownloadFactRow(fact: DownloadFact) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 bg-dark-200 rounded-lg">
            <span class="font-medium text-dark-400">{fact.label}</span>
            <span class="text-primary-400 font-semibold">{fact.value}</span>
        </div>
    }
}

/// Support section pointing at the donation page and the repository
#[component]
fn SupportSection() -> impl IntoView {
    view! {
        <section id="support" class="py-20 bg-dark-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center reveal" data-reveal="">
                    <h2 class="text-4xl font-bold mb-4 text-dark-600">"Support the Project"</h2>
                    <p class="text-xl text-dark-400 max-w-2xl mx-auto mb-8">
                        "If you find Save Forge useful, consider supporting its development"
                    </p>

                    <div class="bg-dark-100 rounded-2xl shadow-2xl p-8 max-w-2xl mx-auto border border-dark-300">
                        <div class="flex items-center justify-center mb-6">
                            <Icon name=icons::COFFEE class="h-16 w-16 text-accent-400 mr-4" />
                            <div class="text-left">
                                <h3 class="text-2xl font-bold text-dark-600">"Buy Me a Coffee"</h3>
                                <p class="text-dark-400">"Support the development"</p>
                            </div>
                        </div>

                        <p class="text-dark-400 mb-6 text-center">
                            "Save Forge is completely free and open source. If you enjoy using it and want to "
                            "support its continued development, consider buying me a coffee!"
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a
                                href=DONATION_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="btn-secondary inline-flex items-center"
                            >
                                <Icon name=icons::COFFEE class="mr-2 h-5 w-5" />
                                "Buy Me a Coffee"
                            </a>
                            <a
                                href=REPOSITORY_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="btn-outline inline-flex items-center"
                            >
                                <Icon name=icons::HEART class="mr-2 h-5 w-5" />
                                "Star on GitHub"
                            </a>
                        </div>

                        <p class="text-sm text-dark-500 mt-4 text-center">
                            "Every contribution helps keep the project alive and improving!"
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// About section with the three value cards
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-dark-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center reveal" data-reveal="">
                    <h2 class="text-4xl font-bold mb-4 text-dark-600">"About Save Forge"</h2>
                    <p class="text-xl text-dark-400 max-w-3xl mx-auto mb-8">
                        "Save Forge is built with modern technologies to provide the best experience for managing game saves."
                    </p>

                    <div class="grid md:grid-cols-3 gap-8 mt-12">
                        {VALUE_CARDS
                            .iter()
                            .map(|card| view! { <ValueCardView card=*card /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ValueCardView(card: ValueCard) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="w-16 h-16 bg-primary-900/20 rounded-full flex items-center justify-center mx-auto mb-4">
                <Icon name=card.icon class="h-8 w-8 text-primary-400" />
            </div>
            <h3 class="text-xl font-semibold mb-2 text-dark-600">{card.title}</h3>
            <p class="text-dark-400">{card.description}</p>
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-dark-50 text-white py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <div class="flex items-center justify-center space-x-2 mb-4">
                        <Icon name=icons::GAMEPAD class="h-8 w-8 text-primary-400" />
                        <span class="text-xl font-bold text-dark-600">{content::APP_NAME}</span>
                    </div>
                    <p class="text-dark-400 mb-4">"Manage your game saves with ease"</p>
                    <div class="flex justify-center space-x-6 text-sm text-dark-500">
                        <a
                            href=REPOSITORY_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-1 hover:text-primary-400 transition-colors"
                        >
                            <GithubIcon class="w-4 h-4" />
                            "GitHub"
                        </a>
                        <a
                            href=DONATION_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-primary-400 transition-colors"
                        >
                            "Support"
                        </a>
                    </div>
                    <p class="text-xs text-dark-600 mt-6">
                        "© 2024 Save Forge. All rights reserved."
                    </p>
                </div>
            </div>
        </footer>
    }
}

/// SEO meta tags rendered from the metadata descriptor
#[component]
fn SeoMeta() -> impl IntoView {
    let meta = &SITE_METADATA;
    let og = &meta.open_graph;
    let image = &og.images[0];

    view! {
        // Page title
        <Title text=meta.title />

        // Basic meta tags
        <Meta name="description" content=meta.description />
        <Meta name="keywords" content=meta.keywords_content() />
        <Meta name="author" content=meta.author />
        <Meta name="creator" content=meta.creator />
        <Meta name="publisher" content=meta.publisher />
        <Meta name="robots" content=meta.robots.content() />

        // Open Graph / Facebook
        <Meta property="og:type" content=og.kind />
        <Meta property="og:url" content=og.url />
        <Meta property="og:title" content=og.title />
        <Meta property="og:description" content=og.description />
        <Meta property="og:site_name" content=og.site_name />
        <Meta property="og:locale" content=og.locale />
        <Meta property="og:image" content=meta.absolute_url(image.url) />
        <Meta property="og:image:width" content=image.width.to_string() />
        <Meta property="og:image:height" content=image.height.to_string() />
        <Meta property="og:image:alt" content=image.alt />

        // Twitter
        <Meta property="twitter:card" content=meta.twitter.card />
        <Meta property="twitter:title" content=meta.twitter.title />
        <Meta property="twitter:description" content=meta.twitter.description />
        <Meta property="twitter:image" content=meta.absolute_url(meta.twitter.images[0]) />

        // Canonical URL
        <Link rel="canonical" href=meta.canonical_url() />

        // Per-deployment verification token, omitted when unset
        {meta
            .verification
            .google
            .map(|token| view! { <Meta name="google-site-verification" content=token /> })}

        // JSON-LD structured data
        <script type="application/ld+json" inner_html=meta.json_ld()></script>
    }
}

/// CSS for the hero entrance and the scroll reveal phases. Everything else
/// comes from the site stylesheet.
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Hero entrance */
            @keyframes fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .fade-in-up {
                animation: fade-in-up 0.6s ease-out forwards;
            }

            .fade-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            .fade-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }

            /* Scroll reveal: hidden/offset until the observer marks the unit
               visible; the sibling stagger arrives as an inline
               transition-delay */
            .reveal {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .reveal.is-visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* Degraded mode without intersection observation: visible with no
               animation at all */
            .reveal-instant {
                transition: none;
            }
            "#
        </style>
    }
}
