use dioxus::prelude::*;

mod components;
mod config;
mod error;
mod media;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_log::init_with_level(log::Level::Info).unwrap_or(());

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#0b1020" }
        document::Title { "Portfolio" }
        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
