//! Routed pages.
//!
//! Dashboard and member pages render inside `AppShell`; login and register
//! render standalone.

pub mod dashboard;
pub mod login;
pub mod member;

use leptos::prelude::*;

/// Titled content area shared by the placeholder pages.
#[component]
pub fn ContentPage(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="content-page">
            <h1 class="content-page__title">{title}</h1>
            <div class="content-page__body">{children()}</div>
        </section>
    }
}
