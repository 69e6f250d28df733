use std::rc::Rc;

use crate::model::{ThemeParams, User};

/// Lo que el panel necesita del host (Telegram WebApp en el navegador).
/// Se inyecta en vez de leer un global, así los tests usan uno falso.
pub trait HostContext {
    fn user(&self) -> Option<User>;
    fn theme_params(&self) -> ThemeParams;
    /// Pide al host que despliegue la vista a pantalla completa.
    fn expand(&self);
    /// Registra un callback para `themeChanged`. Nunca se desregistra.
    fn on_theme_changed(&self, handler: Box<dyn FnMut()>);
}

impl<H: HostContext + ?Sized> HostContext for Rc<H> {
    fn user(&self) -> Option<User> {
        (**self).user()
    }

    fn theme_params(&self) -> ThemeParams {
        (**self).theme_params()
    }

    fn expand(&self) {
        (**self).expand()
    }

    fn on_theme_changed(&self, handler: Box<dyn FnMut()>) {
        (**self).on_theme_changed(handler)
    }
}
