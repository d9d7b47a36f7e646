//! Audio Manager - binds the soundtrack controller to the one `<audio>`
//! element of the session and to the current route.

use dioxus::prelude::*;

use crate::components::AppView;
use crate::error::MediaError;
use crate::media::{AudioSink, MediaHub};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement, HtmlMediaElement};

/// Initialize the global audio element once
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element(id: &str) -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(id) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(id);
    audio.set_loop(true);
    audio.set_attribute("preload", "auto").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// Sink backed by the page's `<audio>` element. The element is looked up on
/// every call, so the sink can be built before the DOM is ready.
pub struct HtmlAudioSink {
    element_id: String,
    #[cfg(not(target_arch = "wasm32"))]
    paused: bool,
}

impl HtmlAudioSink {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            #[cfg(not(target_arch = "wasm32"))]
            paused: true,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl AudioSink for HtmlAudioSink {
    fn load(&mut self, asset: &str) {
        if let Some(audio) = get_or_create_audio_element(&self.element_id) {
            audio.set_src(asset);
            audio.set_current_time(0.0);
            audio.load();
        }
    }

    fn play(&mut self) -> Result<(), MediaError> {
        let audio = get_or_create_audio_element(&self.element_id)
            .ok_or_else(|| MediaError::ElementUnavailable(self.element_id.clone()))?;
        let promise = audio
            .play()
            .map_err(|err| MediaError::PlaybackRejected(format!("{err:?}")))?;
        // Autoplay rejections surface asynchronously; the element just stays paused.
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::debug!("soundtrack play() rejected: {err:?}");
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(audio) = get_or_create_audio_element(&self.element_id) {
            let _ = audio.pause();
        }
    }

    fn is_paused(&self) -> bool {
        get_or_create_audio_element(&self.element_id)
            .map(|a| a.paused())
            .unwrap_or(true)
    }

    fn set_volume(&mut self, volume: f64) {
        if let Some(audio) = get_or_create_audio_element(&self.element_id) {
            audio.set_volume(volume);
        }
    }

    fn is_buffering(&self) -> bool {
        get_or_create_audio_element(&self.element_id)
            .map(|a| {
                !a.current_src().is_empty()
                    && a.ready_state() < HtmlMediaElement::HAVE_ENOUGH_DATA
            })
            .unwrap_or(false)
    }
}

/// Host builds have no audio output; the sink only tracks play/pause so the
/// controller logic behaves the same.
#[cfg(not(target_arch = "wasm32"))]
impl AudioSink for HtmlAudioSink {
    fn load(&mut self, asset: &str) {
        log::debug!("{}: load {asset}", self.element_id);
        self.paused = true;
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_volume(&mut self, _volume: f64) {}

    fn is_buffering(&self) -> bool {
        false
    }
}

/// Retargets the soundtrack whenever the route changes. Mounted only after
/// the visitor entered the site, so the first `navigate` runs inside a user
/// gesture and may start audio.
#[component]
pub fn AudioController() -> Element {
    let hub = use_context::<MediaHub>();
    let path = use_route::<AppView>().to_string();

    use_effect(use_reactive((&path,), move |(path,)| {
        hub.with_soundtrack(|s| s.navigate(&path));
    }));

    rsx! {}
}

/// Hidden preloading elements for every track so route changes start
/// quickly. They are never played.
#[component]
pub fn SoundtrackPreload() -> Element {
    let hub = use_context::<MediaHub>();
    let assets: Vec<String> = hub
        .with_soundtrack(|s| s.tracks().assets().map(str::to_string).collect())
        .unwrap_or_default();

    rsx! {
        div { class: "hidden", aria_hidden: "true",
            for asset in assets {
                audio { key: "{asset}", preload: "auto", src: "{asset}" }
            }
        }
    }
}
