use dioxus::prelude::*;

const ROLES: [&str; 3] = [
    "SCI Survivor",
    "Software & QA Engineer",
    "Rehabilitation Tech Developer",
];

/// Full-screen entry overlay. The click that dismisses it is the user
/// gesture the browser needs before the soundtrack may start.
#[component]
pub fn WelcomeOverlay(on_enter: EventHandler<()>) -> Element {
    let mut visible = use_signal(|| true);

    if !visible() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 z-[100] flex items-center justify-center cursor-pointer welcome-backdrop",
            role: "button",
            aria_label: "Enter site",
            onclick: move |_| {
                visible.set(false);
                on_enter.call(());
            },
            div { class: "absolute inset-0 overflow-hidden pointer-events-none",
                div { class: "orb orb-coral" }
                div { class: "orb orb-sky" }
                div { class: "orb orb-hope" }
            }
            div { class: "relative text-center px-6",
                h1 { class: "text-4xl md:text-6xl font-bold gradient-text mb-6", "Welcome" }
                div { class: "flex flex-col gap-2 mb-10",
                    for role in ROLES {
                        p { key: "{role}", class: "text-lg text-sky-light", "{role}" }
                    }
                }
                p { class: "text-muted animate-pulse", "Click anywhere to enter" }
            }
        }
    }
}
