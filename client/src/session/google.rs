//! Google Identity (`gapi.auth2`) session provider.
//!
//! The SDK is loaded by the page's `<script src="https://apis.google.com/js/platform.js">`
//! tag; everything here talks to the global `gapi` object it installs.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use js_sys::{Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{Session, SessionError, SessionProvider};
use crate::state::error::ErrorPayload;

#[wasm_bindgen]
extern "C" {
    type GoogleAuth;
    type CurrentUser;
    type GoogleUser;
    type AuthResponse;
    type BasicProfile;

    #[wasm_bindgen(js_namespace = gapi, js_name = load, catch)]
    fn gapi_load(api: &str, callback: &Closure<dyn FnMut()>) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["gapi", "auth2"], js_name = init, catch)]
    fn auth2_init(params: &Object) -> Result<GoogleAuth, JsValue>;

    #[wasm_bindgen(js_namespace = ["gapi", "signin2"], js_name = render, catch)]
    fn signin2_render(id: &str, options: &Object) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["gapi", "auth2"], js_name = getAuthInstance, catch)]
    fn get_auth_instance() -> Result<Option<GoogleAuth>, JsValue>;

    #[wasm_bindgen(method, js_name = then)]
    fn then(this: &GoogleAuth, on_init: &Closure<dyn FnMut(JsValue)>, on_error: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(method, getter, js_name = currentUser)]
    fn current_user(this: &GoogleAuth) -> CurrentUser;

    #[wasm_bindgen(method, js_name = signOut)]
    fn sign_out(this: &GoogleAuth) -> JsValue;

    #[wasm_bindgen(method, js_name = get, catch)]
    fn get(this: &CurrentUser) -> Result<GoogleUser, JsValue>;

    #[wasm_bindgen(method)]
    fn listen(this: &CurrentUser, listener: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(method, js_name = getAuthResponse, catch)]
    fn get_auth_response(this: &GoogleUser) -> Result<AuthResponse, JsValue>;

    #[wasm_bindgen(method, js_name = getBasicProfile)]
    fn get_basic_profile(this: &GoogleUser) -> Option<BasicProfile>;

    #[wasm_bindgen(method, getter)]
    fn id_token(this: &AuthResponse) -> Option<String>;

    #[wasm_bindgen(method, js_name = getEmail)]
    fn get_email(this: &BasicProfile) -> String;
}

/// Session provider backed by the Google Identity SDK.
#[derive(Clone, Copy, Debug, Default)]
pub struct GoogleSession;

impl GoogleSession {
    /// Load `auth2` (with the `signin2` button module) and initialise it with the page's client id.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the SDK is missing or initialisation fails.
    pub async fn init(client_id: Option<&str>) -> Result<(), SessionError> {
        let (loaded_tx, loaded_rx) = oneshot::channel::<()>();
        let mut loaded_tx = Some(loaded_tx);
        let on_load = Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = loaded_tx.take() {
                let _ = tx.send(());
            }
        });
        gapi_load("auth2:signin2", &on_load).map_err(session_error)?;
        loaded_rx
            .await
            .map_err(|_| SessionError::new("auth2 load callback dropped"))?;

        let params = Object::new();
        if let Some(client_id) = client_id {
            Reflect::set(&params, &JsValue::from_str("client_id"), &JsValue::from_str(client_id))
                .map_err(session_error)?;
        }
        let auth = auth2_init(&params).map_err(session_error)?;

        // GoogleAuth is itself a thenable; resolving a Promise with it recurses,
        // so wait on its callbacks directly.
        let (done_tx, done_rx) = oneshot::channel::<Result<(), JsValue>>();
        let done_tx = Rc::new(RefCell::new(Some(done_tx)));
        let ok_tx = Rc::clone(&done_tx);
        let on_init = Closure::<dyn FnMut(JsValue)>::new(move |_auth: JsValue| {
            if let Some(tx) = ok_tx.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        });
        let on_error = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
            if let Some(tx) = done_tx.borrow_mut().take() {
                let _ = tx.send(Err(err));
            }
        });
        auth.then(&on_init, &on_error);
        let outcome = done_rx
            .await
            .map_err(|_| SessionError::new("auth2 init callback dropped"))?;
        on_load.forget();
        on_init.forget();
        on_error.forget();
        outcome.map_err(session_error)
    }

    /// Render the SDK's sign-in button into the element with `id`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the SDK rejects the call.
    pub fn render_button(id: &str) -> Result<(), SessionError> {
        signin2_render(id, &Object::new()).map_err(session_error)
    }

    /// Invoke `on_change` whenever the signed-in user changes.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the SDK has not been initialised.
    pub fn listen(mut on_change: impl FnMut() + 'static) -> Result<(), SessionError> {
        let auth = auth_instance()?;
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |_user: JsValue| on_change());
        auth.current_user().listen(&listener);
        listener.forget();
        Ok(())
    }
}

#[async_trait(?Send)]
impl SessionProvider for GoogleSession {
    fn current_session(&self) -> Result<Session, SessionError> {
        let user = auth_instance()?.current_user().get().map_err(session_error)?;
        let id_token = user.get_auth_response().map_err(session_error)?.id_token();
        let email = user
            .get_basic_profile()
            .map(|profile| profile.get_email())
            .unwrap_or_default();
        Ok(Session { id_token, email })
    }

    async fn sign_out(&self) {
        let auth = match auth_instance() {
            Ok(auth) => auth,
            Err(e) => {
                log::warn!("sign out skipped: {e}");
                return;
            }
        };
        let thenable = auth.sign_out();
        if let Err(e) = JsFuture::from(js_sys::Promise::resolve(&thenable)).await {
            log::warn!("sign out failed: {}", payload_from_js(&e));
        }
    }
}

fn auth_instance() -> Result<GoogleAuth, SessionError> {
    get_auth_instance()
        .map_err(session_error)?
        .ok_or_else(|| SessionError::new("gapi.auth2 has not been initialized"))
}

fn session_error(value: JsValue) -> SessionError {
    SessionError::new(payload_from_js(&value))
}

/// Normalise a thrown JS value into an `ErrorPayload`.
fn payload_from_js(value: &JsValue) -> ErrorPayload {
    if let Some(text) = value.as_string() {
        return ErrorPayload::Text(text);
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        let mut fields = serde_json::Map::new();
        fields.insert("message".to_owned(), String::from(error.message()).into());
        fields.insert("name".to_owned(), String::from(error.name()).into());
        return ErrorPayload::Fields(fields);
    }
    if value.is_object() {
        if let Some(json) = js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string()) {
            if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&json) {
                return ErrorPayload::from(parsed);
            }
        }
    }
    if value.is_null() || value.is_undefined() {
        return ErrorPayload::Text(String::new());
    }
    ErrorPayload::Text(format!("{value:?}"))
}
