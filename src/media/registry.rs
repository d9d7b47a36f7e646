//! Registry of video-like media mounted on the page.

use std::collections::HashSet;
use std::rc::Rc;

use crate::error::MediaError;

/// Any registered video source, inline `<video>` or embedded widget.
pub trait PlayableHandle {
    /// Human readable label for logs.
    fn label(&self) -> String;
    /// Errors when the backing resource is gone.
    fn is_playing(&self) -> Result<bool, MediaError>;
    fn pause(&self) -> Result<(), MediaError>;
}

/// Opaque registration token, unique for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleToken(u64);

impl HandleToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Default)]
pub struct MediaRegistry {
    next_id: u64,
    entries: Vec<(HandleToken, Rc<dyn PlayableHandle>)>,
    paused_by_coordinator: HashSet<HandleToken>,
}

impl MediaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handle: Rc<dyn PlayableHandle>) -> HandleToken {
        self.next_id += 1;
        let token = HandleToken(self.next_id);
        log::debug!("registered media {} as #{}", handle.label(), token.0);
        self.entries.push((token, handle));
        token
    }

    /// Removes the entry. Returns `false` if it was already gone.
    pub fn deregister(&mut self, token: HandleToken) -> bool {
        self.paused_by_coordinator.remove(&token);
        let before = self.entries.len();
        self.entries.retain(|(t, _)| *t != token);
        before != self.entries.len()
    }

    pub fn contains(&self, token: HandleToken) -> bool {
        self.entries.iter().any(|(t, _)| *t == token)
    }

    pub fn get(&self, token: HandleToken) -> Option<Rc<dyn PlayableHandle>> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, h)| h.clone())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of every handle except `skip`, so callers can act on them
    /// without holding a borrow of the registry.
    pub fn others(&self, skip: Option<HandleToken>) -> Vec<(HandleToken, Rc<dyn PlayableHandle>)> {
        self.entries
            .iter()
            .filter(|(t, _)| Some(*t) != skip)
            .map(|(t, h)| (*t, h.clone()))
            .collect()
    }

    pub fn mark_paused_by_coordinator(&mut self, token: HandleToken) {
        if self.contains(token) {
            self.paused_by_coordinator.insert(token);
        }
    }

    pub fn clear_paused_by_coordinator(&mut self, token: HandleToken) {
        self.paused_by_coordinator.remove(&token);
    }

    #[cfg(test)]
    pub fn paused_by_coordinator(&self, token: HandleToken) -> bool {
        self.paused_by_coordinator.contains(&token)
    }
}

/// Reads a handle's state; a stale handle counts as not playing.
pub fn probe_playing(handle: &dyn PlayableHandle) -> bool {
    match handle.is_playing() {
        Ok(playing) => playing,
        Err(err) => {
            log::debug!("skipping {}: {err}", handle.label());
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    /// Handle whose state tests flip directly.
    pub struct FakeHandle {
        pub name: &'static str,
        pub playing: Cell<bool>,
        pub torn_down: Cell<bool>,
        pub pause_calls: Cell<usize>,
    }

    impl FakeHandle {
        pub fn new(name: &'static str) -> Rc<Self> {
            Rc::new(Self {
                name,
                playing: Cell::new(false),
                torn_down: Cell::new(false),
                pause_calls: Cell::new(0),
            })
        }
    }

    impl PlayableHandle for FakeHandle {
        fn label(&self) -> String {
            self.name.to_string()
        }

        fn is_playing(&self) -> Result<bool, MediaError> {
            if self.torn_down.get() {
                return Err(MediaError::StaleHandle(self.name.to_string()));
            }
            Ok(self.playing.get())
        }

        fn pause(&self) -> Result<(), MediaError> {
            if self.torn_down.get() {
                return Err(MediaError::StaleHandle(self.name.to_string()));
            }
            self.pause_calls.set(self.pause_calls.get() + 1);
            self.playing.set(false);
            Ok(())
        }
    }

    #[test]
    fn tokens_are_unique() {
        let mut registry = MediaRegistry::new();
        let a = registry.register(FakeHandle::new("a"));
        let b = registry.register(FakeHandle::new("b"));
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn deregister_removes_exactly_once() {
        let mut registry = MediaRegistry::new();
        let a = registry.register(FakeHandle::new("a"));
        assert!(registry.deregister(a));
        assert!(!registry.deregister(a));
        assert!(registry.is_empty());
    }

    #[test]
    fn tokens_are_not_reused_after_deregister() {
        let mut registry = MediaRegistry::new();
        let a = registry.register(FakeHandle::new("a"));
        registry.deregister(a);
        let b = registry.register(FakeHandle::new("b"));
        assert_ne!(a, b);
    }

    #[test]
    fn others_skips_the_given_token() {
        let mut registry = MediaRegistry::new();
        let a = registry.register(FakeHandle::new("a"));
        let b = registry.register(FakeHandle::new("b"));
        let others = registry.others(Some(a));
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].0, b);
        assert_eq!(registry.others(None).len(), 2);
    }

    #[test]
    fn stale_handles_probe_as_not_playing() {
        let handle = FakeHandle::new("gone");
        handle.playing.set(true);
        handle.torn_down.set(true);
        assert!(!probe_playing(handle.as_ref()));
    }

    #[test]
    fn coordinator_marks_are_dropped_with_the_entry() {
        let mut registry = MediaRegistry::new();
        let a = registry.register(FakeHandle::new("a"));
        registry.mark_paused_by_coordinator(a);
        assert!(registry.paused_by_coordinator(a));
        registry.deregister(a);
        assert!(!registry.paused_by_coordinator(a));

        registry.mark_paused_by_coordinator(a);
        assert!(!registry.paused_by_coordinator(a));
    }
}
