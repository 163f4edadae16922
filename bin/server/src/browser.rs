//! Bindings to the identity provider's browser SDK.
//!
//! The SDK script is loaded by the document shell before hydration starts
//! and installs itself on `window.Clerk`.

use crate::lifecycle::MountLifecycle;
use portico_identity::WidgetKind;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    type Clerk;

    #[wasm_bindgen(method, catch)]
    fn load(this: &Clerk) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = mountSignIn)]
    fn mount_sign_in(this: &Clerk, node: &web_sys::HtmlElement, props: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = mountSignUp)]
    fn mount_sign_up(this: &Clerk, node: &web_sys::HtmlElement, props: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = unmountSignIn)]
    fn unmount_sign_in(this: &Clerk, node: &web_sys::HtmlElement);

    #[wasm_bindgen(method, js_name = unmountSignUp)]
    fn unmount_sign_up(this: &Clerk, node: &web_sys::HtmlElement);
}

fn sdk() -> Option<Clerk> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("Clerk")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value.unchecked_into())
}

/// A widget mount owned by one view.
///
/// Cloning shares the same mount, so the view's effect can start it while
/// its cleanup disposes it.
#[derive(Clone)]
pub struct WidgetMount {
    kind: WidgetKind,
    lifecycle: Rc<RefCell<MountLifecycle<web_sys::HtmlElement>>>,
}

impl WidgetMount {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            lifecycle: Rc::new(RefCell::new(MountLifecycle::new())),
        }
    }

    /// Loads the SDK and mounts the widget into `host`.
    ///
    /// Only the first call does anything. Failures are logged to the
    /// console and leave the host empty.
    pub fn start(&self, host: web_sys::HtmlElement, props_json: String) {
        if !self.lifecycle.borrow_mut().begin() {
            return;
        }
        let mount = self.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = mount.try_mount(host, &props_json).await {
                leptos::logging::error!("failed to mount {} widget: {e:?}", mount.kind);
            }
        });
    }

    async fn try_mount(&self, host: web_sys::HtmlElement, props_json: &str) -> Result<(), JsValue> {
        let clerk = sdk().ok_or_else(|| JsValue::from_str("identity provider SDK is not loaded"))?;
        JsFuture::from(clerk.load()?).await?;

        if !self.lifecycle.borrow().should_mount() {
            return Ok(());
        }
        let props = js_sys::JSON::parse(props_json)?;
        match self.kind {
            WidgetKind::SignIn => clerk.mount_sign_in(&host, &props)?,
            WidgetKind::SignUp => clerk.mount_sign_up(&host, &props)?,
        }

        let late = self.lifecycle.borrow_mut().mounted(host);
        if let Some(host) = late {
            unmount(&clerk, self.kind, &host);
        }
        Ok(())
    }

    /// Unmounts the widget if it is mounted and cancels a pending mount.
    pub fn dispose(&self) {
        let Some(host) = self.lifecycle.borrow_mut().dispose() else {
            return;
        };
        if let Some(clerk) = sdk() {
            unmount(&clerk, self.kind, &host);
        }
    }
}

fn unmount(clerk: &Clerk, kind: WidgetKind, host: &web_sys::HtmlElement) {
    match kind {
        WidgetKind::SignIn => clerk.unmount_sign_in(host),
        WidgetKind::SignUp => clerk.unmount_sign_up(host),
    }
}
