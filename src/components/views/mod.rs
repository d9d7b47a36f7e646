//! One component per route.

use dioxus::prelude::*;

mod about;
mod contact;
mod documentation;
mod experience;
mod home;
mod not_found;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use documentation::Documentation;
pub use experience::Experience;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;
pub use skills::Skills;

#[component]
fn PageSection(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        section { class: "max-w-6xl mx-auto px-4 pt-8 pb-16",
            header { class: "text-center mb-12",
                h1 { class: "text-4xl md:text-5xl font-bold gradient-text mb-4", "{title}" }
                p { class: "text-lg text-muted max-w-2xl mx-auto", "{subtitle}" }
            }
            {children}
        }
    }
}

#[component]
fn GlassCard(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "glass rounded-2xl p-6 {class}", {children} }
    }
}
