use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::config::{use_runtime_config, RuntimeConfig};
use crate::contact::ContactSection;
use crate::greeting::Greeting;
use crate::nav::NavBar;
use crate::projects::ProjectsSection;
use crate::typing::Tagline;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "Turki Alslamah | Portfolio" }
            div { class: "page loading",
                p { "Loading..." }
            }
        };
    };

    use_context_provider(|| config);

    use_effect(|| {
        tracing::info!("portfolio interactive layer ready");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#2563eb" }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    let config = use_context::<RuntimeConfig>();
    rsx! {
        document::Title { "Turki Alslamah | Portfolio" }
        document::Meta { name: "description", content: "Personal portfolio of Turki Alslamah." }
        NavBar {}
        main { class: "page",
            section { id: "home", class: "hero",
                Greeting {}
                h1 { class: "hero-title", "Turki Alslamah" }
                p { class: "hero-tagline",
                    Tagline {}
                }
                div { class: "hero-actions",
                    a { class: "btn primary", href: "#projects", "View My Work" }
                    a { class: "btn ghost", href: "#contact", "Get In Touch" }
                }
            }
            section { id: "about", class: "about",
                h2 { "About Me" }
                p {
                    "Software engineering student who enjoys building things end to end, "
                    "from database schemas to the pixels on screen. Currently exploring "
                    "systems programming and full-stack web development."
                }
            }
            if config.show_projects {
                section { id: "projects", class: "projects",
                    h2 { "Projects" }
                    ProjectsSection {}
                }
            }
            section { id: "contact", class: "contact",
                h2 { "Get In Touch" }
                ContactSection {}
            }
        }
        footer { class: "site-footer",
            p { "© 2025 Turki Alslamah. All rights reserved." }
        }
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found | Turki Alslamah" }
        div { class: "page not-found",
            h1 { "404" }
            p { "Missing: /{path}" }
            Link { to: Route::Home {}, class: "btn primary", "Back home" }
        }
    }
}
