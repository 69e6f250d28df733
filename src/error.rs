/// Todo lo que puede fallar entre leer el usuario y pintar las notas.
/// El `Display` es exactamente el texto que ve el alumno tras "Error: ".
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("User not found in Telegram context")]
    UserNotFound,
    #[error("Failed to fetch scores")]
    FetchFailed { status: u16 },
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Parse(String),
    #[error("{0}")]
    Page(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Parse(err.to_string())
    }
}
