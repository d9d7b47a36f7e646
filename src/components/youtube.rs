//! Embedded YouTube player wired into the media coordinator through the
//! iframe message API.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::video::{next_element_id, with_registration, RegistrationSlot};
use crate::error::MediaError;
use crate::media::{embed_url, EmbedAdapter, EmbedSignal, Handshake, MediaHub, PlayableHandle, Registration};

#[cfg(target_arch = "wasm32")]
use crate::config::SiteConfig;
#[cfg(target_arch = "wasm32")]
use crate::media::EMBED_ORIGIN;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlIFrameElement, MessageEvent};

#[cfg(target_arch = "wasm32")]
type MessageListener = Rc<RefCell<Option<Closure<dyn FnMut(MessageEvent)>>>>;

#[cfg(target_arch = "wasm32")]
fn frame_window(frame_id: &str) -> Result<web_sys::Window, MediaError> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(frame_id))
        .and_then(|e| e.dyn_into::<HtmlIFrameElement>().ok())
        .and_then(|frame| frame.content_window())
        .ok_or_else(|| MediaError::StaleHandle(frame_id.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn post_to_frame(frame_id: &str, message: &str) -> Result<(), MediaError> {
    frame_window(frame_id)?
        .post_message(&JsValue::from_str(message), EMBED_ORIGIN)
        .map_err(|_| MediaError::StaleHandle(frame_id.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn unsubscribe(listener: &MessageListener) {
    if let Some(on_message) = listener.borrow_mut().take() {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback("message", on_message.as_ref().unchecked_ref());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn post_to_frame(frame_id: &str, _message: &str) -> Result<(), MediaError> {
    Err(MediaError::StaleHandle(frame_id.to_string()))
}

fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Registry handle for one embed. Its playing state is whatever the frame
/// last reported; a frame that never reports counts as idle.
pub struct EmbedHandle {
    title: String,
    adapter: Rc<RefCell<EmbedAdapter>>,
}

impl PlayableHandle for EmbedHandle {
    fn label(&self) -> String {
        format!("embed \"{}\"", self.title)
    }

    fn is_playing(&self) -> Result<bool, MediaError> {
        let adapter = self
            .adapter
            .try_borrow()
            .map_err(|_| MediaError::StaleHandle(self.title.clone()))?;
        Ok(adapter.is_active())
    }

    fn pause(&self) -> Result<(), MediaError> {
        let (frame_id, command) = {
            let adapter = self
                .adapter
                .try_borrow()
                .map_err(|_| MediaError::StaleHandle(self.title.clone()))?;
            (adapter.frame_id().to_string(), adapter.command_message("pauseVideo"))
        };
        post_to_frame(&frame_id, &command)?;
        if let Ok(mut adapter) = self.adapter.try_borrow_mut() {
            adapter.assume_paused();
        }
        Ok(())
    }
}

/// Routes one adapter signal to the coordinator.
fn dispatch(slot: &RegistrationSlot, signal: Option<EmbedSignal>) {
    match signal {
        Some(EmbedSignal::Started) => with_registration(slot, Registration::started),
        Some(EmbedSignal::Stopped) => with_registration(slot, Registration::stopped),
        None => {}
    }
}

#[component]
pub fn YouTubeEmbed(video_id: String, title: String, #[props(default)] class: String) -> Element {
    let hub = use_context::<MediaHub>();
    #[cfg(target_arch = "wasm32")]
    let config = use_context::<SiteConfig>();
    let frame_id = use_hook(|| next_element_id("yt-embed"));
    let adapter = use_hook(|| Rc::new(RefCell::new(EmbedAdapter::new(frame_id.clone()))));
    let mounted = use_hook(|| Rc::new(Cell::new(true)));

    let slot: RegistrationSlot = use_hook(|| {
        let handle = EmbedHandle {
            title: title.clone(),
            adapter: adapter.clone(),
        };
        Rc::new(RefCell::new(Some(hub.register(Rc::new(handle)))))
    });

    #[cfg(target_arch = "wasm32")]
    let listener: MessageListener = use_hook(|| Rc::new(RefCell::new(None)));

    // Subscribe first, then announce to the frame until it reports ready.
    #[cfg(target_arch = "wasm32")]
    {
        let adapter = adapter.clone();
        let mounted = mounted.clone();
        let slot = slot.clone();
        let listener = listener.clone();
        let config = config.clone();
        use_effect(move || {
            if listener.borrow().is_some() {
                return;
            }
            let Some(win) = window() else {
                return;
            };

            let on_message = {
                let adapter = adapter.clone();
                let mounted = mounted.clone();
                let slot = slot.clone();
                let config = config.clone();
                Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
                    if !mounted.get() {
                        return;
                    }
                    let Some(data) = event.data().as_string() else {
                        return;
                    };
                    let frame_id = adapter.borrow().frame_id().to_string();
                    if let (Some(source), Ok(frame)) = (event.source(), frame_window(&frame_id)) {
                        if !js_sys::Object::is(&source, &frame) {
                            return;
                        }
                    }
                    let origin = event.origin();
                    let allowed = config.is_embed_origin(&origin);
                    let signal = adapter.borrow_mut().handle_message(allowed, &origin, &data);
                    dispatch(&slot, signal);
                })
            };
            if win
                .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
                .is_err()
            {
                log::debug!("could not subscribe to embed messages");
                return;
            }
            *listener.borrow_mut() = Some(on_message);

            let handshake = Handshake {
                delay_ms: config.embed_handshake_delay_ms,
                attempts: config.embed_handshake_attempts,
            };
            let adapter = adapter.clone();
            let mounted = mounted.clone();
            spawn(async move {
                let mut attempt = 0;
                while let Some(delay) = handshake.delay_for(attempt) {
                    gloo_timers::future::TimeoutFuture::new(delay).await;
                    if !mounted.get() || adapter.borrow().is_ready() {
                        return;
                    }
                    let (frame_id, hello) = {
                        let adapter = adapter.borrow();
                        (adapter.frame_id().to_string(), adapter.listening_message())
                    };
                    if let Err(err) = post_to_frame(&frame_id, &hello) {
                        log::debug!("embed handshake #{attempt} failed: {err}");
                    }
                    attempt += 1;
                }
                log::debug!("embed never reported ready; soundtrack will not yield to it");
            });
        });
    }

    {
        let mounted = mounted.clone();
        let slot = slot.clone();
        #[cfg(target_arch = "wasm32")]
        let listener = listener.clone();
        use_drop(move || {
            mounted.set(false);
            #[cfg(target_arch = "wasm32")]
            unsubscribe(&listener);
            let registration = slot.borrow_mut().take();
            drop(registration);
        });
    }

    let src = embed_url(&video_id, page_origin().as_deref());

    rsx! {
        div { class: "aspect-video {class}",
            iframe {
                id: "{frame_id}",
                class: "w-full h-full",
                src: "{src}",
                title: "{title}",
                allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                allowfullscreen: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::soundtrack::tests::controller;

    fn embed(hub: &MediaHub) -> (Rc<RefCell<EmbedAdapter>>, RegistrationSlot) {
        let adapter = Rc::new(RefCell::new(EmbedAdapter::new("yt-test")));
        let handle = EmbedHandle {
            title: "demo".into(),
            adapter: adapter.clone(),
        };
        let slot = Rc::new(RefCell::new(Some(hub.register(Rc::new(handle)))));
        (adapter, slot)
    }

    fn feed(adapter: &Rc<RefCell<EmbedAdapter>>, slot: &RegistrationSlot, data: &str) {
        let signal = adapter
            .borrow_mut()
            .handle_message(true, "https://www.youtube.com", data);
        dispatch(slot, signal);
    }

    #[test]
    fn embed_playback_suspends_and_resumes_the_soundtrack() {
        let (mut ctl, log) = controller();
        ctl.navigate("/documentation");
        let hub = MediaHub::new(ctl);
        let (adapter, slot) = embed(&hub);

        feed(&adapter, &slot, r#"{"event":"onStateChange","info":1}"#);
        assert!(log.borrow().paused);
        assert!(hub.any_playing());

        feed(&adapter, &slot, r#"{"event":"onStateChange","info":0}"#);
        assert!(!log.borrow().paused);
        assert!(!hub.any_playing());
    }

    #[test]
    fn silent_embed_never_suspends() {
        let (mut ctl, log) = controller();
        ctl.navigate("/documentation");
        let hub = MediaHub::new(ctl);
        let (_adapter, _slot) = embed(&hub);

        assert!(!hub.any_playing());
        assert!(!log.borrow().paused);
        assert_eq!(log.borrow().pause_calls, 0);
    }

    #[test]
    fn duplicate_playing_reports_suspend_once() {
        let (mut ctl, log) = controller();
        ctl.navigate("/");
        let hub = MediaHub::new(ctl);
        let (adapter, slot) = embed(&hub);

        for _ in 0..3 {
            feed(&adapter, &slot, r#"{"event":"onStateChange","info":1}"#);
        }
        assert_eq!(log.borrow().pause_calls, 1);
    }

    #[test]
    fn messages_after_unmount_are_no_ops() {
        let (mut ctl, log) = controller();
        ctl.navigate("/");
        let hub = MediaHub::new(ctl);
        let (adapter, slot) = embed(&hub);

        slot.borrow_mut().take();
        assert_eq!(hub.registered_count(), 0);
        feed(&adapter, &slot, r#"{"event":"onStateChange","info":1}"#);
        assert!(!log.borrow().paused);
    }

    #[test]
    fn pausing_an_unreachable_frame_reports_stale() {
        let (ctl, _log) = controller();
        let hub = MediaHub::new(ctl);
        let (adapter, _slot) = embed(&hub);
        let handle = EmbedHandle {
            title: "demo".into(),
            adapter: adapter.clone(),
        };
        feed_direct(&adapter, r#"{"event":"onStateChange","info":1}"#);

        assert!(matches!(handle.pause(), Err(MediaError::StaleHandle(_))));
        assert!(handle.is_playing().unwrap());
    }

    fn feed_direct(adapter: &Rc<RefCell<EmbedAdapter>>, data: &str) {
        adapter
            .borrow_mut()
            .handle_message(true, "https://www.youtube.com", data);
    }
}
