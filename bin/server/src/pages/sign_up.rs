//! Sign-up page component.

use crate::components::{AuthCard, AuthWidget};
use leptos::prelude::*;
use portico_identity::SignUpProps;

const TITLE: &str = "Create your account";
const SUBTITLE: &str = "Use the address your invitation was sent to.";
const NOTICE: &str = "Only invited addresses can register.";

/// Sign-up page - hosts the identity provider's sign-up widget.
#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <AuthCard title=TITLE subtitle=SUBTITLE notice=NOTICE>
            <AuthWidget widget=SignUpProps::standard()/>
        </AuthCard>
    }
}
