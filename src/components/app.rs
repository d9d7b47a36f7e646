use dioxus::prelude::*;

use crate::components::{
    AppView, AudioController, HtmlAudioSink, Navbar, SoundtrackPanel, SoundtrackPreload,
    WelcomeOverlay,
};
use crate::config::SiteConfig;
use crate::media::{MediaHub, SoundtrackController, Track, TrackMap};

fn build_media_hub(config: &SiteConfig) -> MediaHub {
    let tracks = config.track_map().unwrap_or_else(|err| {
        log::warn!("falling back to a single soundtrack: {err}");
        TrackMap::with_default(Track {
            name: "home".to_string(),
            asset: "/audio/home.mp3".to_string(),
        })
    });
    let sink = HtmlAudioSink::new(config.audio_element_id.clone());
    MediaHub::new(SoundtrackController::new(
        Box::new(sink),
        tracks,
        config.default_volume,
    ))
}

/// Layout shared by every page. Builds the media services once for the
/// session and provides them to the pages below.
#[component]
pub fn AppShell() -> Element {
    let config = use_hook(SiteConfig::load);
    let hub = use_hook(|| build_media_hub(&config));
    let mut entered = use_signal(|| false);

    use_context_provider(|| config.clone());
    use_context_provider(|| hub.clone());

    rsx! {
        div { class: "min-h-screen bg-primary relative",
            WelcomeOverlay { on_enter: move |_| entered.set(true) }
            div { class: "particle-field", aria_hidden: "true" }
            Navbar {}
            main { class: "relative z-10 pt-16",
                Outlet::<AppView> {}
            }
            footer { class: "relative z-10 py-8 text-center text-sm text-muted",
                "Built with Rust and Dioxus"
            }
            SoundtrackPreload {}
            if entered() {
                AudioController {}
                SoundtrackPanel {}
            }
        }
    }
}
