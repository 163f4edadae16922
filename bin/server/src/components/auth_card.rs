//! Centered card shell around an identity provider widget.

use leptos::prelude::*;

/// Branded card with a title, subtitle and access notice above its children.
#[component]
pub fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    /// Caption telling visitors who may use this page.
    notice: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <section class="auth-card">
                <h1 class="auth-card__title">{title}</h1>
                <p class="auth-card__subtitle">{subtitle}</p>
                <p class="auth-card__notice">{notice}</p>
                <div class="auth-card__widget">{children()}</div>
            </section>
        </div>
    }
}
