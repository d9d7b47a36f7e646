//! Floating soundtrack controls: mute toggle and volume slider.

use dioxus::prelude::*;

use crate::components::Icon;
use crate::media::MediaHub;

#[cfg(target_arch = "wasm32")]
const LOADING_POLL_MS: u32 = 250;

#[component]
pub fn SoundtrackPanel() -> Element {
    let hub = use_context::<MediaHub>();
    let mut muted = use_signal(|| hub.with_soundtrack(|s| s.is_muted()).unwrap_or(false));
    let mut volume = use_signal(|| hub.with_soundtrack(|s| s.volume()).unwrap_or(0.0));
    let loading = use_signal(|| hub.with_soundtrack(|s| s.is_loading()).unwrap_or(false));

    // Mirror the element's buffering state; the poll stops with the panel.
    #[cfg(target_arch = "wasm32")]
    {
        let hub = hub.clone();
        use_effect(move || {
            let hub = hub.clone();
            let mut loading = loading;
            spawn(async move {
                loop {
                    gloo_timers::future::TimeoutFuture::new(LOADING_POLL_MS).await;
                    if let Some(now) = hub.with_soundtrack(|s| s.is_loading()) {
                        if *loading.peek() != now {
                            loading.set(now);
                        }
                    }
                }
            });
        });
    }

    let on_toggle = {
        let hub = hub.clone();
        move |_| {
            if let Some(now_muted) = hub.toggle_mute() {
                muted.set(now_muted);
            }
        }
    };

    let on_volume_change = {
        let hub = hub.clone();
        move |e: Event<FormData>| {
            if let Ok(val) = e.value().parse::<f64>() {
                if let Some(applied) = hub.with_soundtrack(|s| {
                    s.set_volume(val / 100.0);
                    s.volume()
                }) {
                    volume.set(applied);
                }
            }
        }
    };

    let title = if muted() { "Play music" } else { "Mute music" };
    let status = if loading() { "Loading..." } else { "Now Playing" };

    rsx! {
        div { class: "fixed bottom-6 right-6 z-50 flex items-center gap-3",
            if !muted() {
                div { class: "glass px-3 py-2 rounded-full",
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        step: "10",
                        value: (volume() * 100.0).round() as i32,
                        class: "w-20 h-1 accent-coral cursor-pointer",
                        aria_label: "Soundtrack volume",
                        oninput: on_volume_change,
                    }
                }
            }
            button {
                class: if muted() { "p-4 rounded-full glass transition-all duration-300" } else { "p-4 rounded-full glass transition-all duration-300 bg-coral/20 border-coral/50" },
                title: "{title}",
                aria_label: "{title}",
                onclick: on_toggle,
                Icon {
                    name: if muted() { "volume-off".to_string() } else { "music".to_string() },
                    class: "w-6 h-6".to_string(),
                }
            }
        }

        if !muted() {
            div { class: "fixed bottom-6 left-6 z-50 flex items-center gap-2 glass px-4 py-2 rounded-full",
                div { class: "flex items-end gap-1 h-4",
                    for i in 1..=4 {
                        div {
                            key: "{i}",
                            class: "w-1 bg-coral rounded-full equalizer-bar",
                            style: format!("animation-delay: {:.1}s", i as f32 * 0.1),
                        }
                    }
                }
                span { class: "text-xs text-muted ml-2", "{status}" }
            }
        }
    }
}
