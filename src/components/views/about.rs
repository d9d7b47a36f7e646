use dioxus::prelude::*;

use super::{GlassCard, PageSection};
use crate::components::{InlineVideo, YouTubeEmbed};

struct Milestone {
    year: &'static str,
    title: &'static str,
    text: &'static str,
}

const MILESTONES: [Milestone; 4] = [
    Milestone {
        year: "2011",
        title: "Life-Changing Moment",
        text: "A spinal cord injury reshaped every plan, and started a new one.",
    },
    Milestone {
        year: "2015",
        title: "HAL Exoskeleton Rehabilitation - Japan",
        text: "Months of robotic gait training that sparked an interest in assistive tech.",
    },
    Milestone {
        year: "2018",
        title: "Electrical Engineering Degree",
        text: "Graduated with a focus on biomedical instrumentation.",
    },
    Milestone {
        year: "2019",
        title: "Software & QA Engineer",
        text: "Joined the IT industry, testing products end to end.",
    },
];

enum JourneyVideo {
    Inline { src: &'static str, title: &'static str },
    YouTube { id: &'static str, title: &'static str },
}

const JOURNEY_VIDEOS: [JourneyVideo; 5] = [
    JourneyVideo::Inline { src: "/assets/videos/japan.mp4", title: "HAL Exoskeleton in Japan" },
    JourneyVideo::Inline { src: "/assets/videos/kafoWalker.mp4", title: "KAFO Walker Progress" },
    JourneyVideo::YouTube { id: "Vy1L4aWXQZY", title: "AFO Training Session" },
    JourneyVideo::Inline { src: "/assets/videos/red1.mp4", title: "Rehabilitation Exercise" },
    JourneyVideo::Inline { src: "/assets/videos/red2.mp4", title: "Recovery Training" },
];

#[component]
pub fn About() -> Element {
    rsx! {
        PageSection {
            title: "About Me",
            subtitle: "A journey of resilience, engineering, and hope",
            div { class: "relative border-l border-white/10 ml-4 space-y-8 mb-16",
                for milestone in MILESTONES.iter() {
                    div { key: "{milestone.year}-{milestone.title}", class: "pl-8 relative",
                        span { class: "absolute -left-2 top-1 w-4 h-4 rounded-full bg-coral" }
                        span { class: "text-coral font-mono text-sm", "{milestone.year}" }
                        h3 { class: "text-xl font-semibold text-white", "{milestone.title}" }
                        p { class: "text-muted", "{milestone.text}" }
                    }
                }
            }

            h2 { class: "text-2xl font-bold text-center mb-6 text-sky-light", "My Journey in Motion" }
            div { class: "grid md:grid-cols-2 gap-6",
                for video in JOURNEY_VIDEOS.iter() {
                    {match video {
                        JourneyVideo::Inline { src, title } => rsx! {
                            GlassCard { key: "{src}",
                                h4 { class: "font-semibold mb-3", "{title}" }
                                InlineVideo { src: *src, title: *title }
                            }
                        },
                        JourneyVideo::YouTube { id, title } => rsx! {
                            GlassCard { key: "{id}",
                                h4 { class: "font-semibold mb-3", "{title}" }
                                YouTubeEmbed { video_id: *id, title: *title }
                            }
                        },
                    }}
                }
            }
        }
    }
}
