use crate::error::DashboardError;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_API_BASE: &str = "http://127.0.0.1:8000";

/// Respuesta HTTP cruda; el controlador decide qué es éxito.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Un único GET sin cuerpo. Sin reintentos ni timeout propio.
#[allow(async_fn_in_trait)]
pub trait ScoreTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, DashboardError>;
}

pub fn normalize_base(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.trim_end_matches('/').to_string())
    }
}

/// Base de la API en el navegador: build env, `?api_base=`, `<meta>`, y por último la config.
#[cfg(target_arch = "wasm32")]
pub fn resolve_api_base(config_base: &str) -> String {
    api_base_from_build_env()
        .or_else(api_base_from_querystring)
        .or_else(api_base_from_meta)
        .or_else(|| normalize_base(config_base))
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn api_base_from_build_env() -> Option<String> {
    option_env!("CLASS_SCORES_API_BASE").and_then(normalize_base)
}

#[cfg(target_arch = "wasm32")]
fn api_base_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "api_base" {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            let decoded = decoded.as_string()?;
            return normalize_base(&decoded);
        }
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn api_base_from_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='class-scores-api-base']")
        .ok()??;

    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_base)
}

/// Base de la API en nativo: argumento CLI, `CLASS_SCORES_API_BASE`, config, y el servidor local.
#[cfg(not(target_arch = "wasm32"))]
pub fn resolve_api_base(cli_base: Option<&str>, config_base: &str) -> String {
    cli_base
        .and_then(normalize_base)
        .or_else(|| {
            std::env::var("CLASS_SCORES_API_BASE")
                .ok()
                .and_then(|v| normalize_base(&v))
        })
        .or_else(|| normalize_base(config_base))
        .unwrap_or_else(|| DEFAULT_NATIVE_API_BASE.to_string())
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserTransport;

#[cfg(target_arch = "wasm32")]
impl ScoreTransport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, DashboardError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, RequestMode, Response};

        let window =
            web_sys::window().ok_or_else(|| DashboardError::Network("No window in WASM".into()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|err| DashboardError::Network(js_error_message(&err)))?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| DashboardError::Network(js_error_message(&err)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| DashboardError::Network("fetch did not return a Response".into()))?;

        let status = response.status();
        let text_promise = response
            .text()
            .map_err(|err| DashboardError::Network(js_error_message(&err)))?;
        let body = JsFuture::from(text_promise)
            .await
            .map_err(|err| DashboardError::Network(js_error_message(&err)))?
            .as_string()
            .unwrap_or_default();

        log::debug!("GET {url} -> {status}");
        Ok(HttpReply { status, body })
    }
}

/// Texto legible de un error JS (`err.message` si es un `Error`).
#[cfg(target_arch = "wasm32")]
pub fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
pub struct BlockingTransport {
    client: reqwest::blocking::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl BlockingTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for BlockingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScoreTransport for BlockingTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, DashboardError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|err| DashboardError::Network(format!("Error connecting to {url}: {err}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| DashboardError::Network(format!("Error reading response body: {err}")))?;

        log::debug!("GET {url} -> {status}");
        Ok(HttpReply { status, body })
    }
}
