//! Host element for an identity provider widget.
//!
//! The server renders an empty host carrying the widget props. Once the page
//! hydrates, the provider SDK mounts its widget into that host and owns
//! everything inside it from then on.

use leptos::prelude::*;
use portico_identity::WidgetProps;

/// Mounts the provider widget described by `widget`.
#[component]
pub fn AuthWidget(#[prop(into)] widget: WidgetProps) -> impl IntoView {
    let kind = widget.kind();
    let props_json = match widget.to_json() {
        Ok(json) => json,
        Err(e) => {
            leptos::logging::error!("{kind} widget props: {e}");
            String::new()
        }
    };
    let host = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let mount = crate::browser::WidgetMount::new(kind);
        let cleanup = send_wrapper::SendWrapper::new(mount.clone());
        let props_json = props_json.clone();
        Effect::new(move || {
            let Some(element) = host.get() else {
                return;
            };
            mount.start(element.into(), props_json.clone());
        });
        on_cleanup(move || cleanup.dispose());
    }

    view! {
        <div
            id=kind.host_id()
            class="auth-widget"
            data-auth-widget=kind.as_str()
            data-props=props_json
            node_ref=host
        ></div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use portico_identity::{SignInProps, SignUpProps};

    fn render(widget: WidgetProps) -> String {
        Owner::new().with(|| view! { <AuthWidget widget=widget/> }.to_html())
    }

    #[test]
    fn renders_one_host_per_widget() {
        let html = render(SignInProps::standard().into());
        assert_eq!(html.matches("data-auth-widget=").count(), 1);
        assert!(html.contains(r#"id="sign-in-widget""#));
        assert!(html.contains(r#"data-auth-widget="sign-in""#));
    }

    #[test]
    fn host_carries_serialized_props() {
        let html = render(SignUpProps::standard().into());
        assert!(html.contains(r#"data-auth-widget="sign-up""#));
        assert!(html.contains("signInUrl"));
        assert!(html.contains("/sign-in"));
        assert!(html.contains("rootBox"));
    }
}
