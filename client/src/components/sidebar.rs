//! Sidebar navigation menu.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::nav::{NavSection, is_active, sections, sidebar_items};

/// Sectioned link list; the link for the current route is highlighted.
#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <div class="sb-sidenav">
            {sections(&sidebar_items())
                .into_iter()
                .map(|section| view! { <SidebarSection section=section pathname=pathname/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn SidebarSection(section: NavSection, pathname: Memo<String>) -> impl IntoView {
    let header = section.header.map(|header| {
        view! {
            <div class="sb-sidenav__heading" class:sb-sidenav__heading--spaced=header.margin_top>
                {header.label}
            </div>
        }
    });

    view! {
        {header}
        {section
            .links
            .into_iter()
            .map(|link| {
                let href = link.href.clone();
                let active = move || pathname.with(|path| is_active(&href, path));
                view! {
                    <a class="sb-sidenav__link" class:sb-sidenav__link--active=active href=link.href>
                        <span class="sb-sidenav__icon" aria-hidden="true">{link.icon}</span>
                        {link.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()}
    }
}
