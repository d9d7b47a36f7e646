use dioxus::prelude::*;

use crate::components::AppView;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        section { class: "min-h-[60vh] flex flex-col items-center justify-center text-center px-4",
            h1 { class: "text-6xl font-bold gradient-text mb-4", "404" }
            p { class: "text-muted mb-8", "Nothing lives at {path}." }
            Link { to: AppView::Home {}, class: "px-6 py-3 rounded-full bg-coral text-white", "Back home" }
        }
    }
}
