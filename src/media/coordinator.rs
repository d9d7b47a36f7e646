//! Keeps at most one audible source on the page.
//!
//! All state lives behind `Rc<RefCell<..>>` on the UI thread. Borrows are
//! scoped so a handle's `pause` may call back into the coordinator without
//! tripping a double borrow.

use std::cell::RefCell;
use std::rc::Rc;

use crate::media::registry::{probe_playing, HandleToken, MediaRegistry, PlayableHandle};
use crate::media::soundtrack::SoundtrackController;

/// Process-wide media services, built once by the app shell and handed to
/// components through context.
#[derive(Clone)]
pub struct MediaHub {
    registry: Rc<RefCell<MediaRegistry>>,
    soundtrack: Rc<RefCell<SoundtrackController>>,
}

impl PartialEq for MediaHub {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry) && Rc::ptr_eq(&self.soundtrack, &other.soundtrack)
    }
}

impl MediaHub {
    pub fn new(soundtrack: SoundtrackController) -> Self {
        Self {
            registry: Rc::new(RefCell::new(MediaRegistry::new())),
            soundtrack: Rc::new(RefCell::new(soundtrack)),
        }
    }

    /// Runs `f` against the soundtrack. Returns `None` if the controller is
    /// already borrowed further up the stack.
    pub fn with_soundtrack<R>(&self, f: impl FnOnce(&mut SoundtrackController) -> R) -> Option<R> {
        match self.soundtrack.try_borrow_mut() {
            Ok(mut soundtrack) => Some(f(&mut soundtrack)),
            Err(_) => {
                log::debug!("soundtrack busy, dropping re-entrant call");
                None
            }
        }
    }

    pub fn register(&self, handle: Rc<dyn PlayableHandle>) -> Registration {
        let token = self.registry.borrow_mut().register(handle);
        Registration {
            hub: self.clone(),
            token,
        }
    }

    /// A tracked video started: pause every other playing handle, then
    /// suspend the soundtrack.
    ///
    /// A `play` event can arrive after the coordinator already paused that
    /// same handle (two videos started in one turn). Its mark is kept then.
    pub fn notify_started(&self, token: HandleToken) {
        let (own, others) = {
            let registry = self.registry.borrow();
            (registry.get(token), registry.others(Some(token)))
        };
        if own.is_some_and(|h| probe_playing(h.as_ref())) {
            self.registry.borrow_mut().clear_paused_by_coordinator(token);
        }

        for (other, handle) in others {
            if !probe_playing(handle.as_ref()) {
                continue;
            }
            match handle.pause() {
                Ok(()) => self.registry.borrow_mut().mark_paused_by_coordinator(other),
                Err(err) => log::debug!("could not pause {}: {err}", handle.label()),
            }
        }

        self.with_soundtrack(|s| s.suspend_for_foreign_media());
    }

    /// A tracked video paused or ended: resume the soundtrack once nothing
    /// registered is still playing.
    pub fn notify_stopped(&self, _token: HandleToken) {
        if !self.any_playing() {
            self.with_soundtrack(|s| s.resume_if_eligible());
        }
    }

    pub fn any_playing(&self) -> bool {
        let handles = self.registry.borrow().others(None);
        handles.iter().any(|(_, h)| probe_playing(h.as_ref()))
    }

    /// Flips the soundtrack's mute. An unmute while a registered video plays
    /// waits for that video instead of playing over it. Returns the new mute
    /// state, or `None` if the soundtrack is busy.
    pub fn toggle_mute(&self) -> Option<bool> {
        let media_playing = self.any_playing();
        self.with_soundtrack(|s| s.toggle_mute(media_playing))
    }

    #[cfg(test)]
    pub fn paused_by_coordinator(&self, token: HandleToken) -> bool {
        self.registry.borrow().paused_by_coordinator(token)
    }

    #[cfg(test)]
    pub fn is_registered(&self, token: HandleToken) -> bool {
        self.registry.borrow().contains(token)
    }

    #[cfg(test)]
    pub fn registered_count(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Drops `token` and re-checks whether the soundtrack may come back.
    fn release(&self, token: HandleToken) {
        let removed = match self.registry.try_borrow_mut() {
            Ok(mut registry) => registry.deregister(token),
            Err(_) => {
                log::warn!("media registry busy while releasing #{}", token.id());
                return;
            }
        };
        if removed && !self.any_playing() {
            self.with_soundtrack(|s| {
                if s.was_playing_before_suspend() {
                    s.resume_if_eligible();
                }
            });
        }
    }
}

/// Live registry membership. Dropping it deregisters the handle, so an
/// unmounted component can never leave a stale entry behind.
pub struct Registration {
    hub: MediaHub,
    token: HandleToken,
}

impl Registration {
    pub fn token(&self) -> HandleToken {
        self.token
    }

    pub fn started(&self) {
        self.hub.notify_started(self.token);
    }

    pub fn stopped(&self) {
        self.hub.notify_stopped(self.token);
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.hub.release(self.token);
    }
}
