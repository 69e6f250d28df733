use super::*;
use crate::fetch::ScoreTransport;
use crate::host::HostContext;
use crate::model::ScoreResponse;
use crate::page::{PageSurface, Region};

impl<H, T, P> DashboardController<H, T, P>
where
    H: HostContext,
    T: ScoreTransport,
    P: PageSurface,
{
    /// Flujo completo de una carga de página. Cualquier fallo acaba en el panel de error.
    pub async fn run(&self) -> LoadOutcome {
        self.host.expand();

        match self.load_and_render().await {
            Ok(classes) => {
                log::info!("notas pintadas: {classes} clases");
                LoadOutcome::Rendered { classes }
            }
            Err(err) => {
                log::error!("no se pudo cargar el panel: {err:?}");
                self.show_error(&err);
                LoadOutcome::Failed(err)
            }
        }
    }

    pub fn resolve_student(&self) -> Result<i64, DashboardError> {
        self.host
            .user()
            .and_then(|user| user.student_id())
            .ok_or(DashboardError::UserNotFound)
    }

    pub async fn fetch_scores(&self, student_id: i64) -> Result<ScoreResponse, DashboardError> {
        let url = self.config.scores_url(&self.api_base, student_id);
        log::debug!("pidiendo notas en {url}");

        let reply = self.transport.get(&url).await?;
        if !reply.is_success() {
            log::warn!("{url} devolvió HTTP {}", reply.status);
            return Err(DashboardError::FetchFailed {
                status: reply.status,
            });
        }

        Ok(serde_json::from_str(&reply.body)?)
    }

    async fn load_and_render(&self) -> Result<usize, DashboardError> {
        let student_id = self.resolve_student()?;
        let data = self.fetch_scores(student_id).await?;

        self.page.set_visible(Region::Loading, false)?;
        self.page.set_visible(Region::Content, true)?;

        let markup = self.renderer.render(&data);
        self.page.set_scores_markup(&markup)?;

        Ok(data.classes.len())
    }

    fn show_error(&self, err: &DashboardError) {
        let text = format!("{}{}", self.config.labels.error_prefix, err);
        let steps = [
            self.page.set_visible(Region::Loading, false),
            self.page.set_visible(Region::Error, true),
            self.page.set_text(Region::Error, &text),
        ];
        for result in steps {
            if let Err(page_err) = result {
                log::error!("no se pudo mostrar el error en la página: {page_err}");
            }
        }
    }
}
