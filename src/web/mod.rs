//! Punto de entrada WASM: conecta Telegram, el DOM y `fetch` con el controlador.

pub mod dom;
pub mod telegram;

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::app::{DashboardController, ThemeSync};
use crate::config::DashboardConfig;
use crate::fetch::{BrowserTransport, resolve_api_base};
use crate::logging;
use dom::DomPage;
use telegram::TelegramWebApp;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = DashboardConfig::load_embedded();
    logging::init(config.level_filter());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("sin document: el panel no puede arrancar");
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once(move || launch(config));
        if let Err(err) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            log::error!("no se pudo esperar a DOMContentLoaded: {err:?}");
            return;
        }
        on_ready.forget();
    } else {
        launch(config);
    }
}

fn launch(config: DashboardConfig) {
    let page = match DomPage::from_window() {
        Ok(page) => Rc::new(page),
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };
    let host = Rc::new(TelegramWebApp::from_window());

    ThemeSync::new(page.clone(), config.theme.clone()).register(&host);

    let api_base = resolve_api_base(&config.api_base);
    let controller = DashboardController::new(host, BrowserTransport, page, config, api_base);

    wasm_bindgen_futures::spawn_local(async move {
        controller.run().await;
    });
}
