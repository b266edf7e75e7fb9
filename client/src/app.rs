//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::app_shell::AppShell;
use crate::pages::dashboard::{AttractionsPage, OverviewPage, PlannerPage};
use crate::pages::login::{LoginPage, RegisterPage};
use crate::pages::member::{FavoritesPage, PreferencesPage, SchedulePage};
use crate::util::sidebar_config::ResizeStrategy;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The sidebar resize strategy is written onto `<body>` here, which only the
/// server renders, so pages reached by client-side navigation still see it.
pub fn shell(options: LeptosOptions, resize: ResizeStrategy) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <ShellBody resize>
                <App/>
            </ShellBody>
        </html>
    }
}

/// Document `<body>` carrying the sidebar config read by the toggle controller.
#[component]
pub fn ShellBody(resize: ResizeStrategy, children: Children) -> impl IntoView {
    view! {
        <body
            class="sb-nav-fixed"
            data-resize-strategy=resize.kind()
            data-resize-delay-ms=resize.delay_millis().to_string()
        >
            {children()}
        </body>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard.css"/>
        <Title text="Travel Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("") view=AppShell>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("overview")) view=OverviewPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("planner")) view=PlannerPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("attractions")) view=AttractionsPage/>
                    <Route path=(StaticSegment("member"), StaticSegment("preferences")) view=PreferencesPage/>
                    <Route path=(StaticSegment("member"), StaticSegment("favorites")) view=FavoritesPage/>
                    <Route path=(StaticSegment("member"), StaticSegment("schedule")) view=SchedulePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
