//! Home page component.

use leptos::prelude::*;
use portico_core::RoutePath;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"portico"</h1>
            <p>"The front door to your workspace."</p>
            <div class="home-actions">
                <a href=RoutePath::SIGN_IN.to_string() class="cta-button">"Sign in"</a>
                <a href=RoutePath::SIGN_UP.to_string() class="cta-link">"Create an account"</a>
            </div>
        </div>
    }
}
