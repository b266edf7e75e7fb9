//! Member area pages.

use leptos::prelude::*;

use crate::pages::ContentPage;

#[component]
pub fn PreferencesPage() -> impl IntoView {
    view! {
        <ContentPage title="Preferences">
            <p>"Travel style, budget, and notification settings."</p>
        </ContentPage>
    }
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    view! {
        <ContentPage title="Saved Trips">
            <p>"Trips you have bookmarked."</p>
        </ContentPage>
    }
}

#[component]
pub fn SchedulePage() -> impl IntoView {
    view! {
        <ContentPage title="Trip Schedule">
            <p>"Upcoming itineraries."</p>
        </ContentPage>
    }
}
