//! Login and registration pages.

use leptos::prelude::*;

/// Sign-in form. There is no backend; the form links back to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <h1>"Sign in"</h1>
            <form class="auth-page__form" action="/dashboard/overview" method="get">
                <input class="auth-page__input" type="email" name="email" placeholder="Email"/>
                <input class="auth-page__input" type="password" name="password" placeholder="Password"/>
                <button class="btn btn--primary" type="submit">"Sign in"</button>
            </form>
            <a class="auth-page__link" href="/register">"Create an account"</a>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <h1>"Create account"</h1>
            <form class="auth-page__form" action="/login" method="get">
                <input class="auth-page__input" type="text" name="name" placeholder="Name"/>
                <input class="auth-page__input" type="email" name="email" placeholder="Email"/>
                <input class="auth-page__input" type="password" name="password" placeholder="Password"/>
                <button class="btn btn--primary" type="submit">"Register"</button>
            </form>
            <a class="auth-page__link" href="/login">"Already have an account?"</a>
        </div>
    }
}
