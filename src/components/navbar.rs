use dioxus::prelude::*;

use crate::components::{nav_entries, view_label, AppView, Icon};

#[component]
pub fn Navbar() -> Element {
    let current = use_route::<AppView>();
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "fixed top-0 inset-x-0 z-40 glass border-b border-white/10",
            div { class: "max-w-6xl mx-auto px-4 h-16 flex items-center justify-between",
                Link {
                    to: AppView::Home {},
                    class: "flex items-center gap-3",
                    div { class: "w-9 h-9 rounded-xl bg-gradient-to-br from-coral to-sky flex items-center justify-center text-white font-bold",
                        "P"
                    }
                    span { class: "text-lg font-bold gradient-text", "Portfolio" }
                }

                div { class: "hidden md:flex items-center gap-1",
                    for view in nav_entries() {
                        NavItem {
                            key: "{view}",
                            active: current == view,
                            to: view.clone(),
                        }
                    }
                }

                button {
                    class: "md:hidden p-2 rounded-lg text-muted hover:text-white",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.toggle(),
                    Icon {
                        name: if menu_open() { "x".to_string() } else { "menu".to_string() },
                        class: "w-6 h-6".to_string(),
                    }
                }
            }

            if menu_open() {
                div {
                    class: "md:hidden px-4 pb-4 flex flex-col gap-1",
                    onclick: move |_| menu_open.set(false),
                    for view in nav_entries() {
                        NavItem {
                            key: "{view}",
                            active: current == view,
                            to: view.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(to: AppView, active: bool) -> Element {
    let base_class = "px-3 py-2 rounded-xl text-sm font-medium transition-all duration-200";
    let active_class = if active {
        "bg-coral/20 text-coral"
    } else {
        "text-muted hover:text-white hover:bg-white/5"
    };
    let label = view_label(&to);

    rsx! {
        Link { class: "{base_class} {active_class}", to, "{label}" }
    }
}
