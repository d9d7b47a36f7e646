//! Routes of the site.

use dioxus::prelude::*;

use crate::components::views::{About, Contact, Documentation, Experience, Home, NotFound, Projects, Skills};
use crate::components::AppShell;

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
#[allow(clippy::empty_line_after_outer_attr)]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/projects")]
        Projects {},
        #[route("/skills")]
        Skills {},
        #[route("/experience")]
        Experience {},
        #[route("/documentation")]
        Documentation {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Home {} => "Home",
        AppView::About {} => "About",
        AppView::Projects {} => "Projects",
        AppView::Skills {} => "Skills",
        AppView::Experience {} => "Experience",
        AppView::Documentation {} => "Docs",
        AppView::Contact {} => "Contact",
        AppView::NotFound { .. } => "Not found",
    }
}

/// Entries shown in the navigation bar, in order.
pub fn nav_entries() -> [AppView; 7] {
    [
        AppView::Home {},
        AppView::About {},
        AppView::Projects {},
        AppView::Skills {},
        AppView::Experience {},
        AppView::Documentation {},
        AppView::Contact {},
    ]
}
