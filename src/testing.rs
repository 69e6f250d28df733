//! Dobles de prueba compartidos por los tests del crate.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::DashboardError;
use crate::fetch::{HttpReply, ScoreTransport};
use crate::host::HostContext;
use crate::model::{ThemeParams, User};
use crate::page::{PageSurface, Region, StyleSurface};

/// Callbacks y tema viven fuera del host, como en Telegram: el lado JS los
/// conserva aunque el objeto Rust que los registró ya no exista.
#[derive(Clone, Default)]
pub struct HostRegistry {
    theme: Rc<RefCell<ThemeParams>>,
    handlers: Rc<RefCell<Vec<Box<dyn FnMut()>>>>,
}

impl HostRegistry {
    pub fn set_theme(&self, theme: ThemeParams) {
        *self.theme.borrow_mut() = theme;
    }

    pub fn emit_theme_changed(&self) {
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler();
        }
    }
}

#[derive(Default)]
pub struct FakeHost {
    user: Option<User>,
    registry: HostRegistry,
    expanded: Cell<bool>,
}

impl FakeHost {
    pub fn without_user() -> Self {
        Self::default()
    }

    pub fn with_user(user: User) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }

    pub fn registry(&self) -> HostRegistry {
        self.registry.clone()
    }

    pub fn set_theme(&self, theme: ThemeParams) {
        self.registry.set_theme(theme);
    }

    pub fn expanded(&self) -> bool {
        self.expanded.get()
    }

    pub fn emit_theme_changed(&self) {
        self.registry.emit_theme_changed();
    }
}

impl HostContext for FakeHost {
    fn user(&self) -> Option<User> {
        self.user.clone()
    }

    fn theme_params(&self) -> ThemeParams {
        self.registry.theme.borrow().clone()
    }

    fn expand(&self) {
        self.expanded.set(true);
    }

    fn on_theme_changed(&self, handler: Box<dyn FnMut()>) {
        self.registry.handlers.borrow_mut().push(handler);
    }
}

pub struct FakeTransport {
    reply: Result<HttpReply, DashboardError>,
    requested: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpReply {
                status,
                body: body.to_string(),
            }),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(DashboardError::Network(message.to_string())),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl ScoreTransport for FakeTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, DashboardError> {
        self.requested.borrow_mut().push(url.to_string());
        self.reply.clone()
    }
}

/// Página en memoria que recuerda la última operación sobre cada región.
#[derive(Default)]
pub struct RecordingPage {
    visible: RefCell<BTreeMap<&'static str, bool>>,
    texts: RefCell<BTreeMap<&'static str, String>>,
    markup: RefCell<Option<String>>,
    markup_error: RefCell<Option<String>>,
    root: RefCell<BTreeMap<String, String>>,
}

impl RecordingPage {
    pub fn visible(&self, region: Region) -> Option<bool> {
        self.visible.borrow().get(region.element_id()).copied()
    }

    pub fn text(&self, region: Region) -> Option<String> {
        self.texts.borrow().get(region.element_id()).cloned()
    }

    pub fn scores_markup(&self) -> Option<String> {
        self.markup.borrow().clone()
    }

    pub fn fail_markup_with(&self, message: &str) {
        *self.markup_error.borrow_mut() = Some(message.to_string());
    }

    pub fn root_property(&self, name: &str) -> Option<String> {
        self.root.borrow().get(name).cloned()
    }

    pub fn root_properties(&self) -> BTreeMap<String, String> {
        self.root.borrow().clone()
    }
}

impl PageSurface for RecordingPage {
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
        if let Some(message) = self.markup_error.borrow().clone() {
            return Err(DashboardError::Page(message));
        }
        *self.markup.borrow_mut() = Some(markup.to_string());
        Ok(())
    }
}

impl StyleSurface for RecordingPage {
    fn set_root_property(&self, name: &str, value: &str) -> Result<(), DashboardError> {
        self.root
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
