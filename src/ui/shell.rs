use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app-root",
            header {
                class: "app-header",
                div { class: "app-header__inner",
                    h1 { class: "app-title", "{APP_NAME}" }
                    nav { class: "app-nav",
                        NavButton {
                            active: matches!(current_route, Route::Lookup {}),
                            onclick: move |_| { nav.push(Route::Lookup {}); },
                            label: "Impact",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "Settings",
                        }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer muted", "{version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button_class(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
