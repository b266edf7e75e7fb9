//! Dashboard pages.

use leptos::prelude::*;

use crate::pages::ContentPage;

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <ContentPage title="Overview">
            <p>"Travel statistics at a glance."</p>
        </ContentPage>
    }
}

#[component]
pub fn PlannerPage() -> impl IntoView {
    view! {
        <ContentPage title="Trip Planner">
            <p>"Search and compare destinations."</p>
        </ContentPage>
    }
}

#[component]
pub fn AttractionsPage() -> impl IntoView {
    view! {
        <ContentPage title="Attractions Map">
            <p>"Attractions by region."</p>
        </ContentPage>
    }
}
