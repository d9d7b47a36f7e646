use dioxus::prelude::*;

use super::{GlassCard, PageSection};
use crate::components::YouTubeEmbed;

#[component]
pub fn Documentation() -> Element {
    rsx! {
        PageSection {
            title: "Documentation",
            subtitle: "Recorded walkthroughs of the builds and the testing behind them",
            GlassCard { class: "max-w-4xl mx-auto",
                h2 { class: "text-xl font-semibold mb-4", "Video Documentation" }
                YouTubeEmbed { video_id: "O7V3FCIaXww", title: "Video Documentation" }
                p { class: "text-muted mt-4",
                    "Playing the video pauses the site soundtrack; it comes back when the video stops."
                }
            }
        }
    }
}
