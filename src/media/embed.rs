//! Adapter for the YouTube iframe message API.
//!
//! The widget reports state over `postMessage`. Delivery is best effort: the
//! frame may ignore the first `listening` announcements, answer late, repeat
//! itself, or never answer at all. The adapter turns whatever does arrive into
//! edge-triggered start/stop signals for the coordinator and never fails.

use serde_json::{json, Value};

use crate::error::MediaError;

/// Origin the embed frames are loaded from; commands are posted to it.
pub const EMBED_ORIGIN: &str = "https://www.youtube.com";

/// Player states reported by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlayerState {
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            -1 => Self::Unstarted,
            0 => Self::Ended,
            1 => Self::Playing,
            2 => Self::Paused,
            3 => Self::Buffering,
            5 => Self::Cued,
            _ => return None,
        })
    }

    /// Playing or about to play; the soundtrack stays suspended.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Playing | Self::Buffering)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedSignal {
    Started,
    Stopped,
}

/// Per-frame protocol state.
#[derive(Debug, Clone)]
pub struct EmbedAdapter {
    frame_id: String,
    ready: bool,
    state: PlayerState,
}

impl EmbedAdapter {
    pub fn new(frame_id: impl Into<String>) -> Self {
        Self {
            frame_id: frame_id.into(),
            ready: false,
            state: PlayerState::Unstarted,
        }
    }

    pub fn frame_id(&self) -> &str {
        &self.frame_id
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[cfg(test)]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Feeds one raw message. Anything unexpected is dropped.
    pub fn handle_message(
        &mut self,
        origin_allowed: bool,
        origin: &str,
        data: &str,
    ) -> Option<EmbedSignal> {
        match self.apply(origin_allowed, origin, data) {
            Ok(signal) => signal,
            Err(err) => {
                log::debug!("ignoring message for {}: {err}", self.frame_id);
                None
            }
        }
    }

    fn apply(
        &mut self,
        origin_allowed: bool,
        origin: &str,
        data: &str,
    ) -> Result<Option<EmbedSignal>, MediaError> {
        if !origin_allowed {
            return Err(MediaError::UnexpectedOrigin(origin.to_string()));
        }
        let message: Value = serde_json::from_str(data)
            .map_err(|err| MediaError::MalformedMessage(err.to_string()))?;

        // Messages without an id are accepted; a foreign id is not.
        if let Some(id) = message.get("id") {
            let matches = match id {
                Value::String(s) => s == &self.frame_id,
                Value::Number(n) => n.to_string() == self.frame_id,
                _ => false,
            };
            if !matches {
                return Ok(None);
            }
        }

        let event = message
            .get("event")
            .and_then(Value::as_str)
            .ok_or_else(|| MediaError::MalformedMessage("missing event".into()))?;
        let info = message.get("info").unwrap_or(&Value::Null);

        let reported = match event {
            "onReady" => {
                self.ready = true;
                None
            }
            "initialDelivery" | "infoDelivery" => {
                self.ready = true;
                info.get("playerState").and_then(Value::as_i64)
            }
            "onStateChange" => {
                self.ready = true;
                info.as_i64()
                    .or_else(|| info.get("playerState").and_then(Value::as_i64))
            }
            _ => None,
        };

        let Some(next) = reported.and_then(PlayerState::from_code) else {
            return Ok(None);
        };
        Ok(self.transition(next))
    }

    fn transition(&mut self, next: PlayerState) -> Option<EmbedSignal> {
        let was_active = self.state.is_active();
        self.state = next;
        match (was_active, next.is_active()) {
            (false, true) => Some(EmbedSignal::Started),
            (true, false) => Some(EmbedSignal::Stopped),
            _ => None,
        }
    }

    /// Called after the coordinator asked the frame to pause, so a lost
    /// `onStateChange` does not keep the soundtrack suspended.
    pub fn assume_paused(&mut self) {
        if self.state.is_active() {
            self.state = PlayerState::Paused;
        }
    }

    pub fn listening_message(&self) -> String {
        json!({ "event": "listening", "id": self.frame_id, "channel": "widget" }).to_string()
    }

    pub fn command_message(&self, func: &str) -> String {
        json!({
            "event": "command",
            "func": func,
            "args": [],
            "id": self.frame_id,
            "channel": "widget",
        })
        .to_string()
    }
}

/// Bounded, best-effort handshake schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handshake {
    pub delay_ms: u32,
    pub attempts: u32,
}

impl Handshake {
    /// Delay before announcement `attempt` (zero based). Later attempts back
    /// off linearly. `None` once the budget is spent.
    pub fn delay_for(&self, attempt: u32) -> Option<u32> {
        if attempt >= self.attempts {
            return None;
        }
        Some(self.delay_ms.saturating_mul(attempt + 1))
    }
}

/// Builds the embed URL with the JS API enabled for `origin`.
pub fn embed_url(video_id: &str, origin: Option<&str>) -> String {
    let mut url = format!(
        "{EMBED_ORIGIN}/embed/{}?enablejsapi=1&rel=0",
        urlencoding::encode(video_id)
    );
    if let Some(origin) = origin.filter(|o| !o.is_empty()) {
        url.push_str("&origin=");
        url.push_str(&urlencoding::encode(origin));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const YT: &str = "https://www.youtube.com";

    fn feed(adapter: &mut EmbedAdapter, data: &str) -> Option<EmbedSignal> {
        adapter.handle_message(true, YT, data)
    }

    #[test]
    fn state_change_to_playing_starts() {
        let mut adapter = EmbedAdapter::new("yt-1");
        let signal = feed(&mut adapter, r#"{"event":"onStateChange","info":1,"id":"yt-1"}"#);
        assert_eq!(signal, Some(EmbedSignal::Started));
        assert!(adapter.is_active());
        assert!(adapter.is_ready());
    }

    #[test]
    fn info_delivery_carries_player_state() {
        let mut adapter = EmbedAdapter::new("yt-1");
        assert_eq!(
            feed(&mut adapter, r#"{"event":"infoDelivery","info":{"playerState":1,"currentTime":3.2}}"#),
            Some(EmbedSignal::Started)
        );
        assert_eq!(
            feed(&mut adapter, r#"{"event":"infoDelivery","info":{"playerState":0}}"#),
            Some(EmbedSignal::Stopped)
        );
        assert_eq!(adapter.state(), PlayerState::Ended);
    }

    #[test]
    fn duplicate_playing_reports_are_idempotent() {
        let mut adapter = EmbedAdapter::new("yt-1");
        let msg = r#"{"event":"onStateChange","info":1}"#;
        assert_eq!(feed(&mut adapter, msg), Some(EmbedSignal::Started));
        assert_eq!(feed(&mut adapter, msg), None);
        assert_eq!(
            feed(&mut adapter, r#"{"event":"infoDelivery","info":{"playerState":1}}"#),
            None
        );
    }

    #[test]
    fn buffering_keeps_the_embed_active() {
        let mut adapter = EmbedAdapter::new("yt-1");
        feed(&mut adapter, r#"{"event":"onStateChange","info":1}"#);
        assert_eq!(feed(&mut adapter, r#"{"event":"onStateChange","info":3}"#), None);
        assert!(adapter.is_active());
        assert_eq!(
            feed(&mut adapter, r#"{"event":"onStateChange","info":2}"#),
            Some(EmbedSignal::Stopped)
        );
    }

    #[test]
    fn ready_without_state_changes_nothing() {
        let mut adapter = EmbedAdapter::new("yt-1");
        assert_eq!(feed(&mut adapter, r#"{"event":"onReady","info":null}"#), None);
        assert!(adapter.is_ready());
        assert!(!adapter.is_active());
    }

    #[test]
    fn foreign_origins_are_ignored() {
        let mut adapter = EmbedAdapter::new("yt-1");
        let signal = adapter.handle_message(
            false,
            "https://evil.example",
            r#"{"event":"onStateChange","info":1}"#,
        );
        assert_eq!(signal, None);
        assert!(!adapter.is_ready());
    }

    #[test]
    fn malformed_messages_are_ignored() {
        let mut adapter = EmbedAdapter::new("yt-1");
        for data in [
            "not json",
            "42",
            r#"{"info":1}"#,
            r#"{"event":"onStateChange","info":"playing"}"#,
            r#"{"event":"onStateChange","info":9}"#,
            r#"{"event":"onPlaybackRateChange","info":2}"#,
        ] {
            assert_eq!(feed(&mut adapter, data), None, "{data}");
        }
        assert_eq!(adapter.state(), PlayerState::Unstarted);
    }

    #[test]
    fn messages_for_other_frames_are_ignored() {
        let mut adapter = EmbedAdapter::new("yt-1");
        assert_eq!(
            feed(&mut adapter, r#"{"event":"onStateChange","info":1,"id":"yt-2"}"#),
            None
        );
        assert!(!adapter.is_ready());
    }

    #[test]
    fn numeric_ids_match_by_value() {
        let mut adapter = EmbedAdapter::new("7");
        assert_eq!(
            feed(&mut adapter, r#"{"event":"onStateChange","info":1,"id":7}"#),
            Some(EmbedSignal::Started)
        );
    }

    #[test]
    fn assume_paused_clears_active_state() {
        let mut adapter = EmbedAdapter::new("yt-1");
        feed(&mut adapter, r#"{"event":"onStateChange","info":1}"#);
        adapter.assume_paused();
        assert!(!adapter.is_active());
        // The real pause report is then not a second stop.
        assert_eq!(feed(&mut adapter, r#"{"event":"onStateChange","info":2}"#), None);
    }

    #[test]
    fn protocol_messages_are_well_formed() {
        let adapter = EmbedAdapter::new("yt-1");
        let listening: Value = serde_json::from_str(&adapter.listening_message()).unwrap();
        assert_eq!(listening["event"], "listening");
        assert_eq!(listening["id"], "yt-1");
        assert_eq!(listening["channel"], "widget");

        let pause: Value = serde_json::from_str(&adapter.command_message("pauseVideo")).unwrap();
        assert_eq!(pause["event"], "command");
        assert_eq!(pause["func"], "pauseVideo");
        assert_eq!(pause["args"], json!([]));
    }

    #[test]
    fn handshake_backs_off_and_stops() {
        let handshake = Handshake {
            delay_ms: 400,
            attempts: 3,
        };
        assert_eq!(handshake.delay_for(0), Some(400));
        assert_eq!(handshake.delay_for(2), Some(1200));
        assert_eq!(handshake.delay_for(3), None);

        let none = Handshake {
            delay_ms: 400,
            attempts: 0,
        };
        assert_eq!(none.delay_for(0), None);
    }

    #[test]
    fn embed_url_enables_the_api() {
        assert_eq!(
            embed_url("O7V3FCIaXww", Some("https://site.example")),
            "https://www.youtube.com/embed/O7V3FCIaXww?enablejsapi=1&rel=0&origin=https%3A%2F%2Fsite.example"
        );
        assert_eq!(
            embed_url("abc", None),
            "https://www.youtube.com/embed/abc?enablejsapi=1&rel=0"
        );
    }
}
