use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::ui::ScoreRenderer;

// Submódulos
pub mod actions;
pub mod theme;

pub use theme::ThemeSync;

/// Resultado de una carga completa del panel.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Rendered { classes: usize },
    Failed(DashboardError),
}

impl LoadOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, LoadOutcome::Rendered { .. })
    }
}

/// Lee el usuario del host, pide sus notas y las pinta (o pinta el error).
pub struct DashboardController<H, T, P> {
    host: H,
    transport: T,
    page: P,
    config: DashboardConfig,
    api_base: String,
    renderer: ScoreRenderer,
}

impl<H, T, P> DashboardController<H, T, P> {
    pub fn new(host: H, transport: T, page: P, config: DashboardConfig, api_base: String) -> Self {
        let renderer = ScoreRenderer::from_config(&config);
        Self {
            host,
            transport,
            page,
            config,
            api_base,
            renderer,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }
}
