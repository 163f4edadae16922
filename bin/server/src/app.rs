//! Main Leptos application component and routing.

use crate::pages::{HomePage, SignInPage, SignUpPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// The main application component.
///
/// The widgets use path routing, so every sub-path of `/sign-in` and
/// `/sign-up` renders the same page and the widget picks its step from the URL.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="portico"/>
        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/sign-in") view=SignInPage/>
                    <Route path=path!("/sign-in/*any") view=SignInPage/>
                    <Route path=path!("/sign-up") view=SignUpPage/>
                    <Route path=path!("/sign-up/*any") view=SignUpPage/>
                </Routes>
            </main>
        </Router>
    }
}
