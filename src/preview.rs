//! Vista previa nativa: mismo controlador, pero con host de variables de entorno
//! y una página en memoria que se vuelca a un HTML autocontenido.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::DashboardError;
use crate::host::HostContext;
use crate::model::{ThemeParams, User};
use crate::page::{PageSurface, Region, SCORES_CONTAINER_ID, StyleSurface};
use crate::ui::helpers::escape_html;

/// Host sin Telegram: el usuario y el tema llegan por la línea de comandos o el entorno.
pub struct EnvHost {
    user: Option<User>,
    theme: ThemeParams,
}

impl EnvHost {
    pub fn new(user: Option<User>, theme: ThemeParams) -> Self {
        Self { user, theme }
    }

    /// Tema desde `CLASS_SCORES_BG_COLOR` / `CLASS_SCORES_TEXT_COLOR`.
    pub fn theme_from_env() -> ThemeParams {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        ThemeParams {
            bg_color: var("CLASS_SCORES_BG_COLOR"),
            text_color: var("CLASS_SCORES_TEXT_COLOR"),
        }
    }
}

impl HostContext for EnvHost {
    fn user(&self) -> Option<User> {
        self.user.clone()
    }

    fn theme_params(&self) -> ThemeParams {
        self.theme.clone()
    }

    fn expand(&self) {
        log::debug!("expand() ignorado fuera de Telegram");
    }

    fn on_theme_changed(&self, _handler: Box<dyn FnMut()>) {
        // En nativo el tema no cambia después de arrancar.
        log::debug!("themeChanged no se emite en la vista previa");
    }
}

#[derive(Default)]
pub struct StaticPage {
    visible: RefCell<BTreeMap<&'static str, bool>>,
    texts: RefCell<BTreeMap<&'static str, String>>,
    markup: RefCell<String>,
    root: RefCell<BTreeMap<String, String>>,
}

impl StaticPage {
    fn display(&self, region: Region) -> &'static str {
        // Estado inicial del HTML: sólo el spinner visible.
        let default = region == Region::Loading;
        let visible = self
            .visible
            .borrow()
            .get(region.element_id())
            .copied()
            .unwrap_or(default);
        if visible { "block" } else { "none" }
    }

    fn panel(&self, region: Region, inner: &str) -> String {
        format!(
            "<div id=\"{}\" style=\"display: {}\">{}</div>",
            region.element_id(),
            self.display(region),
            inner
        )
    }

    /// Documento HTML completo con el estado actual de la página.
    pub fn to_document(&self) -> String {
        let root_style: String = self
            .root
            .borrow()
            .iter()
            .map(|(name, value)| format!("{}: {};", name, escape_html(value)))
            .collect::<Vec<_>>()
            .join(" ");

        let loading_text = self
            .texts
            .borrow()
            .get(Region::Loading.element_id())
            .cloned()
            .unwrap_or_else(|| "Loading...".to_string());
        let error_text = self
            .texts
            .borrow()
            .get(Region::Error.element_id())
            .cloned()
            .unwrap_or_default();
        let content = format!(
            "<div id=\"{}\">{}</div>",
            SCORES_CONTAINER_ID,
            self.markup.borrow()
        );

        format!(
            "<!DOCTYPE html>\n<html style=\"{root_style}\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Scores</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{}\n{}\n{}\n</body>\n</html>\n",
            self.panel(Region::Loading, &escape_html(&loading_text)),
            self.panel(Region::Content, &content),
            self.panel(Region::Error, &escape_html(&error_text)),
        )
    }
}

const STYLE: &str = "body { background: var(--tg-theme-bg-color, #ffffff); \
color: var(--tg-theme-text-color, #000000); font-family: sans-serif; } \
.class-card, .topic-card { border-radius: 8px; padding: 8px; margin: 8px 0; } \
.lesson-item { display: flex; justify-content: space-between; } \
.score-value { font-weight: bold; }";

impl PageSurface for StaticPage {
    fn set_visible(&self, region: Region, visible: bool) -> Result<(), DashboardError> {
        self.visible.borrow_mut().insert(region.element_id(), visible);
        Ok(())
    }

    fn set_text(&self, region: Region, text: &str) -> Result<(), DashboardError> {
        self.texts
            .borrow_mut()
            .insert(region.element_id(), text.to_string());
        Ok(())
    }

    fn set_scores_markup(&self, markup: &str) -> Result<(), DashboardError> {
        *self.markup.borrow_mut() = markup.to_string();
        Ok(())
    }
}

impl StyleSurface for StaticPage {
    fn set_root_property(&self, name: &str, value: &str) -> Result<(), DashboardError> {
        self.root
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
