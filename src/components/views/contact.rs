use dioxus::prelude::*;

use super::{GlassCard, PageSection};
use crate::components::Icon;

#[component]
pub fn Contact() -> Element {
    rsx! {
        PageSection {
            title: "Get in Touch",
            subtitle: "Open to QA roles, collaborations, and rehabilitation tech conversations",
            div { class: "grid md:grid-cols-2 gap-6 max-w-3xl mx-auto",
                GlassCard {
                    a {
                        class: "flex items-center gap-3 text-white hover:text-coral transition-colors",
                        href: "mailto:hello@example.com",
                        Icon { name: "mail".to_string(), class: "w-6 h-6".to_string() }
                        span { "Email" }
                    }
                }
                GlassCard {
                    a {
                        class: "flex items-center gap-3 text-white hover:text-coral transition-colors",
                        href: "https://www.linkedin.com/",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { name: "link".to_string(), class: "w-6 h-6".to_string() }
                        span { "LinkedIn" }
                    }
                }
            }
        }
    }
}
