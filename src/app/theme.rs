use std::rc::Rc;

use crate::config::ThemeProperties;
use crate::error::DashboardError;
use crate::host::HostContext;
use crate::model::ThemeParams;
use crate::page::StyleSurface;

/// Copia los colores del tema del host a las variables CSS del documento.
pub struct ThemeSync<S> {
    style: S,
    properties: ThemeProperties,
}

impl<S: StyleSurface> ThemeSync<S> {
    pub fn new(style: S, properties: ThemeProperties) -> Self {
        Self { style, properties }
    }

    /// Escribe ambas propiedades. Un color ausente se salta.
    pub fn apply(&self, theme: &ThemeParams) -> Result<(), DashboardError> {
        let pairs = [
            (&self.properties.bg_property, &theme.bg_color),
            (&self.properties.text_property, &theme.text_color),
        ];

        for (property, value) in pairs {
            match value {
                Some(color) => self.style.set_root_property(property, color)?,
                None => log::debug!("el tema no trae valor para {property}"),
            }
        }
        Ok(())
    }

    /// Aplica el tema actual y se suscribe a `themeChanged` para el resto de la vida de la página.
    /// El callback guarda su propio `Rc` al host: el controlador puede soltarlo al terminar la carga.
    pub fn register<H>(self, host: &Rc<H>)
    where
        H: HostContext + 'static,
        S: 'static,
    {
        if let Err(err) = self.apply(&host.theme_params()) {
            log::warn!("no se pudo aplicar el tema inicial: {err}");
        }

        let theme_host = Rc::clone(host);
        host.on_theme_changed(Box::new(move || {
            if let Err(err) = self.apply(&theme_host.theme_params()) {
                log::warn!("no se pudo aplicar el tema: {err}");
            }
        }));
    }
}
