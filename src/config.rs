// src/config.rs

use log::LevelFilter;
use serde::Deserialize;

const EMBEDDED_CONFIG: &str = include_str!("data/dashboard.yaml");

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Ruta relativa al `api_base`; `{id}` se sustituye por el id del alumno.
    pub scores_path: String,
    pub api_base: String,
    /// Si es `false` los títulos se insertan tal cual llegan del backend.
    pub escape_markup: bool,
    pub log_level: String,
    pub labels: Labels,
    pub theme: ThemeProperties,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Labels {
    pub class_heading: String,
    pub quiz_heading: String,
    pub error_prefix: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeProperties {
    pub bg_property: String,
    pub text_property: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            scores_path: "/students/{id}/scores".into(),
            api_base: String::new(),
            escape_markup: true,
            log_level: "info".into(),
            labels: Labels::default(),
            theme: ThemeProperties::default(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            class_heading: "Клас".into(),
            quiz_heading: "Тест по темі:".into(),
            error_prefix: "Error: ".into(),
        }
    }
}

impl Default for ThemeProperties {
    fn default() -> Self {
        Self {
            bg_property: "--tg-theme-bg-color".into(),
            text_property: "--tg-theme-text-color".into(),
        }
    }
}

impl DashboardConfig {
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Carga la configuración embebida; si el YAML no parsea se usan los valores por defecto.
    pub fn load_embedded() -> Self {
        match Self::from_yaml(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("configuración embebida inválida, usando valores por defecto: {err}");
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn scores_url(&self, api_base: &str, student_id: i64) -> String {
        let path = self.scores_path.replace("{id}", &student_id.to_string());
        format!("{}{}", api_base.trim_end_matches('/'), path)
    }
}
