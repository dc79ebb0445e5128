use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::scroll::scroll_to_fragment;
use crate::theme::ThemeToggle;

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

const HAMBURGER_ID: &str = "hamburger";
const NAV_MENU_ID: &str = "nav-menu";

#[cfg(target_arch = "wasm32")]
struct MenuListeners {
    click: Rc<Closure<dyn FnMut(web_sys::Event)>>,
    keydown: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

#[component]
pub fn NavBar() -> Element {
    let mut open = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    let mut listeners = use_signal(|| None::<MenuListeners>);
    #[cfg(not(target_arch = "wasm32"))]
    let _listeners = ();

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if listeners.read().is_some() {
            return;
        }
        let document = match web_sys::window().and_then(|window| window.document()) {
            Some(document) => document,
            None => return,
        };

        let mut open_for_click = open;
        let on_click = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
            if !open_for_click() {
                return;
            }
            if click_landed_inside_menu(&event) {
                return;
            }
            open_for_click.set(false);
        }) as Box<dyn FnMut(_)>));

        let mut open_for_key = open;
        let on_keydown = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Ok(event) = event.dyn_into::<web_sys::KeyboardEvent>() else {
                return;
            };
            if event.key() == "Escape" && open_for_key() {
                open_for_key.set(false);
            }
        }) as Box<dyn FnMut(_)>));

        let _ = document.add_event_listener_with_callback(
            "click",
            on_click.as_ref().as_ref().unchecked_ref(),
        );
        let _ = document.add_event_listener_with_callback(
            "keydown",
            on_keydown.as_ref().as_ref().unchecked_ref(),
        );

        listeners.set(Some(MenuListeners {
            click: on_click,
            keydown: on_keydown,
        }));
    });

    #[cfg(target_arch = "wasm32")]
    {
        let listeners = listeners;
        use_drop(move || {
            let binding = listeners.read();
            let Some(listeners) = binding.as_ref() else {
                return;
            };
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "click",
                    listeners.click.as_ref().as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    listeners.keydown.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }

    rsx! {
        header { class: "site-header",
            nav { class: "site-nav", aria_label: "Main navigation",
                a {
                    class: "brand",
                    href: "#home",
                    onclick: move |event| {
                        if scroll_to_fragment("#home") {
                            event.prevent_default();
                        }
                    },
                    "Turki Alslamah"
                }
                div { class: "nav-controls",
                    ThemeToggle {}
                    button {
                        id: HAMBURGER_ID,
                        class: if open() { "hamburger active" } else { "hamburger" },
                        r#type: "button",
                        aria_label: "Toggle navigation menu",
                        aria_expanded: "{open}",
                        onclick: move |_| {
                            let next = !open();
                            open.set(next);
                        },
                        span { class: "hamburger-bar" }
                        span { class: "hamburger-bar" }
                        span { class: "hamburger-bar" }
                    }
                }
                ul {
                    id: NAV_MENU_ID,
                    class: if open() { "nav-menu active" } else { "nav-menu" },
                    for (href, label) in NAV_SECTIONS.iter().copied() {
                        li {
                            a {
                                class: "nav-link",
                                href: "{href}",
                                onclick: move |event| {
                                    if scroll_to_fragment(href) {
                                        event.prevent_default();
                                    }
                                    if open() {
                                        open.set(false);
                                    }
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn click_landed_inside_menu(event: &web_sys::Event) -> bool {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
    else {
        return false;
    };
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    [HAMBURGER_ID, NAV_MENU_ID].iter().any(|id| {
        document
            .get_element_by_id(id)
            .is_some_and(|element| element.contains(Some(&target)))
    })
}
