//! Browser binding to the Clerk JS SDK (`window.Clerk`).
//!
//! The SDK script is loaded by the host page; everything here degrades to
//! "not loaded / signed out" when it is missing.

use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::IdentitySession;

/// Identity session backed by `window.Clerk`
#[derive(Clone, Copy, Debug, Default)]
pub struct ClerkSession;

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn is_present(value: &JsValue) -> bool {
    !value.is_undefined() && !value.is_null()
}

fn clerk() -> Option<JsValue> {
    let window = web_sys::window()?;
    let clerk = Reflect::get(&window, &JsValue::from_str("Clerk")).ok()?;
    is_present(&clerk).then_some(clerk)
}

fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(is_present)
}

/// Call `target[name]()` and await the returned promise, if any
async fn call_method(target: &JsValue, name: &str) -> Result<JsValue, String> {
    let method = property(target, name)
        .ok_or_else(|| format!("Clerk.{} is not available", name))?
        .dyn_into::<Function>()
        .map_err(js_err)?;
    let result = method.call0(target).map_err(js_err)?;

    match result.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise).await.map_err(js_err),
        Err(value) => Ok(value),
    }
}

#[async_trait(?Send)]
impl IdentitySession for ClerkSession {
    fn is_loaded(&self) -> bool {
        clerk()
            .and_then(|c| property(&c, "loaded"))
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    fn is_signed_in(&self) -> bool {
        clerk().and_then(|c| property(&c, "user")).is_some()
    }

    async fn get_token(&self) -> Result<Option<String>, String> {
        let clerk = clerk().ok_or_else(|| "Clerk is not loaded".to_string())?;
        let Some(session) = property(&clerk, "session") else {
            return Ok(None);
        };
        let token = call_method(&session, "getToken").await?;
        Ok(token.as_string())
    }
}

/// Register `on_change` to run on every Clerk state change
/// (sign-in, sign-out, session refresh)
pub fn add_listener(on_change: impl Fn() + 'static) {
    let Some(clerk) = clerk() else {
        log::warn!("Clerk is not loaded, sign-in changes will not be tracked");
        return;
    };
    let Some(add) = property(&clerk, "addListener").and_then(|f| f.dyn_into::<Function>().ok())
    else {
        log::warn!("Clerk.addListener is not available");
        return;
    };

    let handler = Closure::wrap(Box::new(move |_event: JsValue| on_change()) as Box<dyn Fn(JsValue)>);
    if let Err(e) = add.call1(&clerk, handler.as_ref()) {
        log::error!("Failed to subscribe to Clerk: {}", js_err(e));
    }
    handler.forget();
}

/// Open the hosted sign-in modal
pub fn open_sign_in() -> Result<(), String> {
    let clerk = clerk().ok_or_else(|| "Clerk is not loaded".to_string())?;
    let open = property(&clerk, "openSignIn")
        .ok_or_else(|| "Clerk.openSignIn is not available".to_string())?
        .dyn_into::<Function>()
        .map_err(js_err)?;
    open.call0(&clerk).map_err(js_err)?;
    Ok(())
}

pub async fn sign_out() -> Result<(), String> {
    let clerk = clerk().ok_or_else(|| "Clerk is not loaded".to_string())?;
    call_method(&clerk, "signOut").await.map(|_| ())
}

/// Whether the SDK script is present on the page
pub fn is_available() -> bool {
    clerk().is_some()
}
