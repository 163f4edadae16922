//! Sign-in page component.

use crate::components::{AuthCard, AuthWidget};
use leptos::prelude::*;
use portico_identity::SignInProps;

const TITLE: &str = "Welcome back";
const SUBTITLE: &str = "Sign in to continue to your workspace.";
const NOTICE: &str = "Access is limited to invited accounts. Ask your administrator if you need one.";

/// Sign-in page - hosts the identity provider's sign-in widget.
#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <AuthCard title=TITLE subtitle=SUBTITLE notice=NOTICE>
            <AuthWidget widget=SignInProps::standard()/>
        </AuthCard>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render() -> String {
        Owner::new().with(|| view! { <SignInPage/> }.to_html())
    }

    #[test]
    fn renders_card_sections_once() {
        let html = render();
        assert_eq!(html.matches(r#"class="auth-card__title""#).count(), 1);
        assert_eq!(html.matches(r#"class="auth-card__subtitle""#).count(), 1);
        assert_eq!(html.matches(r#"class="auth-card__notice""#).count(), 1);
        assert_eq!(html.matches("data-auth-widget=").count(), 1);
        assert!(html.contains(TITLE));
        assert!(html.contains(NOTICE));
    }

    #[test]
    fn mounts_sign_in_widget_at_sign_in_path() {
        let html = render();
        assert!(html.contains(r#"data-auth-widget="sign-in""#));
        assert!(html.contains("&quot;routing&quot;:&quot;path&quot;"));
        assert!(html.contains("&quot;path&quot;:&quot;/sign-in&quot;"));
        assert!(html.contains("&quot;signUpUrl&quot;:&quot;/sign-up&quot;"));
        assert!(html.contains("&quot;rootBox&quot;:{&quot;width&quot;:&quot;100%&quot;}"));
    }

    #[test]
    fn rerender_is_identical() {
        assert_eq!(render(), render());
    }
}
