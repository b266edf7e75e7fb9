//! Top navigation bar with the brand link and the sidebar toggle control.

use leptos::prelude::*;

use crate::util::sidebar_config::DEFAULT_TOGGLE_ID;

/// Fixed top bar.
///
/// The toggle button has no click handler of its own: the document-level
/// listener installed by `AppShell` recognises it by id.
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <nav class="sb-topnav">
            <a class="sb-topnav__brand" href="/dashboard/overview">"Travel Dashboard"</a>
            <button
                id=DEFAULT_TOGGLE_ID
                class="sb-topnav__toggle"
                type="button"
                title="Toggle sidebar"
            >
                <span class="sb-topnav__toggle-icon" aria-hidden="true">"☰"</span>
            </button>
        </nav>
    }
}
