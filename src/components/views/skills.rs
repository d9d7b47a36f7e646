use dioxus::prelude::*;

use super::{GlassCard, PageSection};

const SKILL_GROUPS: [(&str, &[&str]); 3] = [
    (
        "Testing & QA",
        &[
            "Manual testing",
            "Test automation",
            "Regression planning",
            "API testing",
            "Bug triage",
        ],
    ),
    (
        "Programming",
        &["Python", "JavaScript", "C / C++", "SQL", "Embedded firmware"],
    ),
    (
        "Tools & Hardware",
        &["Git", "Jira", "Postman", "Arduino", "EMG sensors", "3D printing"],
    ),
];

#[component]
pub fn Skills() -> Element {
    rsx! {
        PageSection {
            title: "Skills",
            subtitle: "What I bring to a team",
            div { class: "grid md:grid-cols-3 gap-6",
                for (group, skills) in SKILL_GROUPS.iter() {
                    GlassCard { key: "{group}",
                        h2 { class: "text-xl font-semibold text-coral mb-4", "{group}" }
                        ul { class: "space-y-2",
                            for skill in skills.iter() {
                                li { key: "{skill}", class: "text-muted", "{skill}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
