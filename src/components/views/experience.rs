use dioxus::prelude::*;

use super::{GlassCard, PageSection};

struct Role {
    company: &'static str,
    title: &'static str,
    period: &'static str,
    points: &'static [&'static str],
}

const ROLES: [Role; 3] = [
    Role {
        company: "Software company",
        title: "Software & QA Engineer",
        period: "2021 - Present",
        points: &[
            "Own test plans for web and mobile releases",
            "Automate regression suites",
        ],
    },
    Role {
        company: "IT services",
        title: "QA Engineer",
        period: "2019 - 2021",
        points: &["Manual and exploratory testing", "Defect reporting and triage"],
    },
    Role {
        company: "University lab",
        title: "Research Assistant",
        period: "2017 - 2018",
        points: &["Biomedical signal acquisition", "Prototype rehabilitation devices"],
    },
];

#[component]
pub fn Experience() -> Element {
    rsx! {
        PageSection {
            title: "Experience",
            subtitle: "Where I have worked",
            div { class: "space-y-6 max-w-3xl mx-auto",
                for role in ROLES.iter() {
                    GlassCard { key: "{role.company}-{role.period}",
                        div { class: "flex flex-wrap justify-between items-baseline mb-2",
                            h2 { class: "text-xl font-semibold text-white", "{role.title}" }
                            span { class: "text-sm font-mono text-coral", "{role.period}" }
                        }
                        p { class: "text-sky-light mb-3", "{role.company}" }
                        ul { class: "list-disc list-inside space-y-1 text-muted",
                            for point in role.points.iter() {
                                li { key: "{point}", "{point}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
