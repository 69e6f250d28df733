// src/ui/scores.rs

use crate::config::{DashboardConfig, Labels};
use crate::model::{Class, Lesson, Score, ScoreResponse, Topic};
use crate::ui::helpers::{escape_html, format_percent};

/// Convierte el árbol de notas en el HTML de `#scores-container`.
/// Función pura: misma entrada, mismo HTML.
#[derive(Debug, Clone)]
pub struct ScoreRenderer {
    labels: Labels,
    escape: bool,
}

impl ScoreRenderer {
    pub fn new(labels: Labels, escape: bool) -> Self {
        Self { labels, escape }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.labels.clone(), config.escape_markup)
    }

    pub fn render(&self, data: &ScoreResponse) -> String {
        data.classes.iter().map(|class| self.class_card(class)).collect()
    }

    fn text(&self, value: &str) -> String {
        if self.escape {
            escape_html(value)
        } else {
            value.to_string()
        }
    }

    fn class_card(&self, class: &Class) -> String {
        let topics: String = class.topics.iter().map(|t| self.topic_card(t)).collect();
        format!(
            "<div class=\"class-card\"><h2 class=\"class-title\">{} {}</h2>{}</div>",
            self.text(&self.labels.class_heading),
            self.text(&class.class_number.to_string()),
            topics
        )
    }

    fn topic_card(&self, topic: &Topic) -> String {
        let lessons: String = topic.lessons.iter().map(|l| self.lesson_row(l)).collect();
        let quiz = topic
            .quiz_score
            .as_ref()
            .map(|score| self.quiz_line(score))
            .unwrap_or_default();
        format!(
            "<div class=\"topic-card\"><h3 class=\"topic-title\">{}</h3>\
             <div class=\"lessons-list\">{}</div>{}</div>",
            self.text(&topic.title),
            lessons,
            quiz
        )
    }

    fn lesson_row(&self, lesson: &Lesson) -> String {
        format!(
            "<div class=\"lesson-item\"><span>{}</span><span class=\"score-value\">{}</span></div>",
            self.text(&lesson.title),
            format_percent(lesson.score.score)
        )
    }

    fn quiz_line(&self, score: &Score) -> String {
        format!(
            "<div class=\"quiz-score\">{} <span class=\"score-value\">{}</span></div>",
            self.text(&self.labels.quiz_heading),
            format_percent(score.score)
        )
    }
}
