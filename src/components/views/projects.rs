use dioxus::prelude::*;

use super::{GlassCard, PageSection};
use crate::components::{AppView, InlineVideo};

struct Project {
    title: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
    videos: &'static [(&'static str, &'static str)],
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Lower-Limb Exoskeleton Prototype",
        summary: "Motor-assisted knee joint driven by a small embedded controller, built and tested on myself.",
        tags: &["Embedded", "Motor control", "Testing"],
        videos: &[("/assets/videos/exo1.mp4", "Exoskeleton walking trial")],
    },
    Project {
        title: "EMG-Triggered Stimulation",
        summary: "Surface EMG signals detect intent to move and trigger functional electrical stimulation.",
        tags: &["Signal processing", "Biomedical", "Python"],
        videos: &[
            ("/assets/videos/emg1.mp4", "EMG signal capture"),
            ("/assets/videos/emg2.mp4", "Threshold calibration"),
            ("/assets/videos/emg3.mp4", "Stimulation in use"),
        ],
    },
    Project {
        title: "Adaptive Cycling Rig",
        summary: "A stationary bike retrofit for assisted pedalling sessions.",
        tags: &["Hardware", "Rehabilitation"],
        videos: &[("/assets/videos/bike.mp4", "Assisted cycling session")],
    },
    Project {
        title: "Ankle Mobility and Aquatic Therapy",
        summary: "Low-cost ankle trainer and pool routines logged across months of recovery.",
        tags: &["Rehabilitation", "Data logging"],
        videos: &[
            ("/assets/videos/ankle.mp4", "Ankle trainer"),
            ("/assets/videos/water.mp4", "Aquatic therapy"),
        ],
    },
];

#[component]
pub fn Projects() -> Element {
    rsx! {
        PageSection {
            title: "Projects",
            subtitle: "Rehabilitation tools I designed, built, and tested",
            div { class: "space-y-10",
                for project in PROJECTS.iter() {
                    GlassCard { key: "{project.title}",
                        h2 { class: "text-2xl font-semibold text-white mb-2", "{project.title}" }
                        p { class: "text-muted mb-4", "{project.summary}" }
                        div { class: "flex flex-wrap gap-2 mb-6",
                            for tag in project.tags.iter() {
                                span {
                                    key: "{tag}",
                                    class: "px-3 py-1 rounded-full text-xs bg-white/5 text-sky-light",
                                    "{tag}"
                                }
                            }
                        }
                        div { class: "grid md:grid-cols-2 gap-4",
                            for (src, title) in project.videos.iter() {
                                InlineVideo { key: "{src}", src: *src, title: *title }
                            }
                        }
                    }
                }
            }
            p { class: "text-center mt-12 text-muted",
                "Build notes and walkthroughs are on the "
                Link { to: AppView::Documentation {}, class: "text-coral underline", "documentation" }
                " page."
            }
        }
    }
}
