use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::DashboardError;
use crate::fetch::js_error_message;
use crate::page::{PageSurface, Region, SCORES_CONTAINER_ID, StyleSurface};

pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn from_window() -> Result<Self, DashboardError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DashboardError::Page("No document in WASM".into()))?;
        Ok(Self { document })
    }

    fn element(&self, id: &str) -> Result<HtmlElement, DashboardError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| DashboardError::Page(format!("#{id} not found")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DashboardError::Page(format!("#{id} is not an HTML element")))
    }
}

impl PageSurface for DomPage {
    fn set_visible(&self, region: Region, visible: bool) -> Result<(), DashboardError> {
        let display = if visible { "block" } else { "none" };
        self.element(region.element_id())?
            .style()
            .set_property("display", display)
            .map_err(|err| DashboardError::Page(js_error_message(&err)))
    }

    fn set_text(&self, region: Region, text: &str) -> Result<(), DashboardError> {
        self.element(region.element_id())?.set_text_content(Some(text));
        Ok(())
    }

    fn set_scores_markup(&self, markup: &str) -> Result<(), DashboardError> {
        self.element(SCORES_CONTAINER_ID)?.set_inner_html(markup);
        Ok(())
    }
}

impl StyleSurface for DomPage {
    fn set_root_property(&self, name: &str, value: &str) -> Result<(), DashboardError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| DashboardError::Page("No root element".into()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DashboardError::Page("Root is not an HTML element".into()))?;

        root.style()
            .set_property(name, value)
            .map_err(|err| DashboardError::Page(js_error_message(&err)))
    }
}
