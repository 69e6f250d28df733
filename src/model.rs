use std::fmt;

use serde::Deserialize;

/// Usuario inyectado por Telegram en `initDataUnsafe.user`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
}

impl User {
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            username: None,
            first_name: None,
        }
    }

    /// Id usable para pedir notas. Un id 0 cuenta como ausente.
    pub fn student_id(&self) -> Option<i64> {
        self.id.filter(|id| *id != 0)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScoreResponse {
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    pub classes: Vec<Class>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Class {
    pub class_number: ClassNumber,
    pub topics: Vec<Topic>,
}

/// El backend manda el número de clase como entero, pero también se aceptan textos ("5-A").
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ClassNumber {
    Number(i64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for ClassNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassNumber::Number(n) => write!(f, "{n}"),
            ClassNumber::Decimal(n) => write!(f, "{n}"),
            ClassNumber::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Topic {
    #[serde(default)]
    pub topic_id: Option<i64>,
    pub title: String,
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub quiz_score: Option<Score>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Lesson {
    #[serde(default)]
    pub lesson_id: Option<i64>,
    pub title: String,
    pub score: Score,
}

/// Porcentaje tal cual llega del backend, sin validar rango.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Score {
    #[serde(default)]
    pub id: Option<i64>,
    pub score: f64,
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl Score {
    pub fn new(score: f64) -> Self {
        Self {
            id: None,
            score,
            completed_at: None,
        }
    }
}

/// Colores del tema del host (`Telegram.WebApp.themeParams`).
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeParams {
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_payload_with_extra_fields() {
        let json = r#"{
            "student_id": 42,
            "name": "Oksana",
            "username": "oksana",
            "classes": [{
                "class_number": 5,
                "topics": [{
                    "topic_id": 3,
                    "title": "Fractions",
                    "lessons": [{
                        "lesson_id": 9,
                        "title": "Intro",
                        "score": {"id": 1, "score": 90, "completed_at": "2024-05-01T10:00:00"}
                    }],
                    "quiz_score": null
                }]
            }]
        }"#;

        let data: ScoreResponse = serde_json::from_str(json).unwrap();
        assert_eq!(data.student_id, Some(42));
        assert_eq!(data.classes[0].class_number, ClassNumber::Number(5));
        let topic = &data.classes[0].topics[0];
        assert_eq!(topic.lessons[0].score.score, 90.0);
        assert!(topic.quiz_score.is_none());
    }

    #[test]
    fn missing_quiz_score_is_treated_as_null() {
        let json = r#"{"title": "T", "lessons": []}"#;
        let topic: Topic = serde_json::from_str(json).unwrap();
        assert!(topic.quiz_score.is_none());
    }

    #[test]
    fn class_number_accepts_text() {
        let json = r#"{"class_number": "5-A", "topics": []}"#;
        let class: Class = serde_json::from_str(json).unwrap();
        assert_eq!(class.class_number.to_string(), "5-A");
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        assert!(serde_json::from_str::<ScoreResponse>(r#"{"items": []}"#).is_err());
        assert!(
            serde_json::from_str::<ScoreResponse>(
                r#"{"classes": [{"class_number": 1, "topics": [{"title": 7, "lessons": []}]}]}"#
            )
            .is_err()
        );
    }

    #[test]
    fn zero_id_is_not_a_student() {
        assert_eq!(User::with_id(0).student_id(), None);
        assert_eq!(User::with_id(17).student_id(), Some(17));
        let anonymous: User = serde_json::from_str(r#"{"first_name": "Ann"}"#).unwrap();
        assert_eq!(anonymous.student_id(), None);
    }
}
