use std::rc::Rc;

use crate::error::DashboardError;

pub const SCORES_CONTAINER_ID: &str = "scores-container";

/// Paneles que se muestran u ocultan por id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Loading,
    Content,
    Error,
}

impl Region {
    pub fn element_id(self) -> &'static str {
        match self {
            Region::Loading => "loading",
            Region::Content => "content",
            Region::Error => "error",
        }
    }
}

/// Superficie de la página que toca el controlador.
pub trait PageSurface {
    fn set_visible(&self, region: Region, visible: bool) -> Result<(), DashboardError>;
    fn set_text(&self, region: Region, text: &str) -> Result<(), DashboardError>;
    fn set_scores_markup(&self, markup: &str) -> Result<(), DashboardError>;
}

/// Propiedades CSS del elemento raíz (las que escribe ThemeSync).
pub trait StyleSurface {
    fn set_root_property(&self, name: &str, value: &str) -> Result<(), DashboardError>;
}

impl<P: PageSurface + ?Sized> PageSurface for Rc<P> {
    fn set_visible(&self, region: Region, visible: bool) -> Result<(), DashboardError> {
        (**self).set_visible(region, visible)
    }

    fn set_text(&self, region: Region, text: &str) -> Result<(), DashboardError> {
        (**self).set_text(region, text)
    }

    fn set_scores_markup(&self, markup: &str) -> Result<(), DashboardError> {
        (**self).set_scores_markup(markup)
    }
}

impl<S: StyleSurface + ?Sized> StyleSurface for Rc<S> {
    fn set_root_property(&self, name: &str, value: &str) -> Result<(), DashboardError> {
        (**self).set_root_property(name, value)
    }
}
