use dioxus::prelude::*;

use super::GlassCard;
use crate::components::AppView;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "min-h-[80vh] flex flex-col items-center justify-center text-center px-4",
            p { class: "text-coral font-mono text-sm mb-4", "Hello, I'm" }
            h1 { class: "text-5xl md:text-7xl font-bold gradient-text mb-6", "Engineer. Survivor. Builder." }
            p { class: "text-xl text-muted max-w-2xl mb-10",
                "Software and QA engineer building rehabilitation technology with purpose."
            }
            div { class: "flex flex-wrap gap-4 justify-center",
                Link {
                    to: AppView::Projects {},
                    class: "px-6 py-3 rounded-full bg-coral text-white font-medium",
                    "View projects"
                }
                Link {
                    to: AppView::Contact {},
                    class: "px-6 py-3 rounded-full glass text-white font-medium",
                    "Get in touch"
                }
            }
        }
        section { class: "max-w-4xl mx-auto px-4 pb-16",
            GlassCard { class: "text-center",
                p { class: "motivational-quote text-xl text-sky-light",
                    "\"Every setback is a setup for a comeback.\""
                }
            }
        }
    }
}
