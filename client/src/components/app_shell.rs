//! Dashboard layout: top bar, sidebar, and routed content.
//!
//! ARCHITECTURE
//! ============
//! The collapsed/expanded layout is driven purely by the marker class on
//! `<body>`, which lives outside the Leptos-managed tree. This component
//! only installs the controller that maintains that class.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;
use crate::components::top_bar::TopBar;
use crate::util::sidebar_config::DEFAULT_TRANSITION_TARGET_ID;

/// Parent route view wrapping every dashboard page.
#[component]
pub fn AppShell() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Err(e) = crate::util::sidebar_dom::install() {
                log::warn!("sidebar toggle unavailable: {e}");
            }
        });
    }

    view! {
        <TopBar/>
        <div class="sb-layout">
            <div id=DEFAULT_TRANSITION_TARGET_ID class="sb-layout__nav">
                <Sidebar/>
            </div>
            <main class="sb-layout__content">
                <Outlet/>
            </main>
        </div>
    }
}
