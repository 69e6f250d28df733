use js_sys::{Function, JSON, Reflect};
use serde::de::DeserializeOwned;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::host::HostContext;
use crate::model::{ThemeParams, User};

/// `window.Telegram.WebApp`. Si la página se abre fuera de Telegram queda vacío
/// y el panel termina en "User not found in Telegram context".
pub struct TelegramWebApp {
    web_app: Option<JsValue>,
}

impl TelegramWebApp {
    pub fn from_window() -> Self {
        let web_app = web_sys::window()
            .and_then(|w| Reflect::get(&w, &JsValue::from_str("Telegram")).ok())
            .and_then(|telegram| property(&telegram, "WebApp"));
        if web_app.is_none() {
            log::warn!("window.Telegram.WebApp no existe");
        }
        Self { web_app }
    }

    fn read<T: DeserializeOwned>(&self, path: &[&str]) -> Option<T> {
        let mut value = self.web_app.clone()?;
        for key in path {
            value = property(&value, key)?;
        }
        let json = JSON::stringify(&value).ok()?.as_string()?;
        match serde_json::from_str(&json) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                log::warn!("{} con forma inesperada: {err}", path.join("."));
                None
            }
        }
    }

    fn method(&self, name: &str) -> Option<(JsValue, Function)> {
        let web_app = self.web_app.clone()?;
        let function = property(&web_app, name)?.dyn_into::<Function>().ok()?;
        Some((web_app, function))
    }
}

/// Propiedad JS que no sea `undefined` ni `null`.
fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    let value = Reflect::get(target, &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

impl HostContext for TelegramWebApp {
    fn user(&self) -> Option<User> {
        self.read(&["initDataUnsafe", "user"])
    }

    fn theme_params(&self) -> ThemeParams {
        self.read(&["themeParams"]).unwrap_or_default()
    }

    fn expand(&self) {
        if let Some((web_app, expand)) = self.method("expand") {
            if let Err(err) = expand.call0(&web_app) {
                log::warn!("Telegram.WebApp.expand falló: {err:?}");
            }
        }
    }

    fn on_theme_changed(&self, handler: Box<dyn FnMut()>) {
        let Some((web_app, on_event)) = self.method("onEvent") else {
            log::warn!("Telegram.WebApp.onEvent no disponible; el tema no se sincroniza");
            return;
        };

        let callback = Closure::wrap(handler);
        match on_event.call2(&web_app, &JsValue::from_str("themeChanged"), callback.as_ref()) {
            // Vive tanto como la página
            Ok(_) => callback.forget(),
            Err(err) => log::warn!("no se pudo suscribir a themeChanged: {err:?}"),
        }
    }
}
