//! Soundtrack and video coordination, independent of the DOM.

pub mod coordinator;
pub mod embed;
pub mod registry;
pub mod soundtrack;
pub mod track_map;

pub use coordinator::{MediaHub, Registration};
pub use embed::{embed_url, EmbedAdapter, EmbedSignal, Handshake, PlayerState, EMBED_ORIGIN};
pub use registry::{HandleToken, MediaRegistry, PlayableHandle};
pub use soundtrack::{AudioSink, ChannelState, SoundtrackController};
pub use track_map::{normalize_path, Track, TrackMap};
