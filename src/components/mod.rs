//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod audio_manager;
mod icons;
mod navbar;
mod player;
mod video;
mod welcome;
mod youtube;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use audio_manager::*;
pub use icons::*;
pub use navbar::*;
pub use player::*;
pub use video::{HtmlVideoHandle, InlineVideo};
pub use welcome::*;
pub use youtube::*;
// Views are accessed via views::ViewName
