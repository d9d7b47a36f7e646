//! Inline `<video>` player registered with the media coordinator.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::error::MediaError;
use crate::media::{MediaHub, PlayableHandle, Registration};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlVideoElement};

static NEXT_ELEMENT: AtomicU64 = AtomicU64::new(1);

/// DOM id unique for the page session.
pub(crate) fn next_element_id(prefix: &str) -> String {
    format!("{prefix}-{}", NEXT_ELEMENT.fetch_add(1, Ordering::Relaxed))
}

/// Registration slot shared by a component's event handlers. Emptied on
/// unmount, which drops the [`Registration`] and deregisters the handle.
pub(crate) type RegistrationSlot = Rc<RefCell<Option<Registration>>>;

pub(crate) fn with_registration(slot: &RegistrationSlot, f: impl FnOnce(&Registration)) {
    let slot = slot.borrow();
    if let Some(registration) = slot.as_ref() {
        f(registration);
    }
}

/// Handle over a `<video>` element, found by id on each query.
pub struct HtmlVideoHandle {
    element_id: String,
    title: String,
}

impl HtmlVideoHandle {
    pub fn new(element_id: String, title: String) -> Self {
        Self { element_id, title }
    }

    #[cfg(target_arch = "wasm32")]
    fn element(&self) -> Result<HtmlVideoElement, MediaError> {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&self.element_id))
            .and_then(|e| e.dyn_into::<HtmlVideoElement>().ok())
            .ok_or_else(|| MediaError::StaleHandle(self.element_id.clone()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PlayableHandle for HtmlVideoHandle {
    fn label(&self) -> String {
        format!("video \"{}\"", self.title)
    }

    fn is_playing(&self) -> Result<bool, MediaError> {
        let video = self.element()?;
        Ok(!video.paused() && !video.ended())
    }

    fn pause(&self) -> Result<(), MediaError> {
        self.element()?
            .pause()
            .map_err(|_| MediaError::StaleHandle(self.element_id.clone()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PlayableHandle for HtmlVideoHandle {
    fn label(&self) -> String {
        format!("video \"{}\"", self.title)
    }

    fn is_playing(&self) -> Result<bool, MediaError> {
        Err(MediaError::StaleHandle(self.element_id.clone()))
    }

    fn pause(&self) -> Result<(), MediaError> {
        Err(MediaError::StaleHandle(self.element_id.clone()))
    }
}

#[component]
pub fn InlineVideo(src: String, title: String, #[props(default)] class: String) -> Element {
    let hub = use_context::<MediaHub>();
    let element_id = use_hook(|| next_element_id("inline-video"));

    let slot: RegistrationSlot = use_hook(|| {
        let handle = HtmlVideoHandle::new(element_id.clone(), title.clone());
        Rc::new(RefCell::new(Some(hub.register(Rc::new(handle)))))
    });

    {
        let slot = slot.clone();
        use_drop(move || {
            let registration = slot.borrow_mut().take();
            drop(registration);
        });
    }

    let on_play = {
        let slot = slot.clone();
        move |_: Event<MediaData>| with_registration(&slot, Registration::started)
    };
    let on_pause = {
        let slot = slot.clone();
        move |_: Event<MediaData>| with_registration(&slot, Registration::stopped)
    };
    let on_ended = {
        let slot = slot.clone();
        move |_: Event<MediaData>| with_registration(&slot, Registration::stopped)
    };

    rsx! {
        div { class: "rounded-lg overflow-hidden bg-black/50",
            video {
                id: "{element_id}",
                class: "w-full h-auto {class}",
                title: "{title}",
                controls: true,
                playsinline: true,
                preload: "metadata",
                onplay: on_play,
                onpause: on_pause,
                onended: on_ended,
                source { src: "{src}", r#type: "video/mp4" }
                "Your browser does not support the video tag."
            }
        }
    }
}
