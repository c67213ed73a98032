use serde::Serialize;
use tera::{Context, Tera};

use tonal_core::models::record::SentimentRecord;
use tonal_core::models::sentiment::Sentiment;

use crate::error::RenderError;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const HISTORY_TEMPLATE: &str = "history.html";

/// Outcome shown under the form after a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResult {
    pub text: String,
    pub sentiment: Sentiment,
    /// Already rounded for display.
    pub confidence: f64,
}

#[derive(Debug, Default, Serialize)]
pub struct IndexView {
    pub result: Option<SubmissionResult>,
}

/// One history row, with the confidence already rounded for display.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub timestamp: String,
}

impl From<SentimentRecord> for HistoryEntry {
    fn from(record: SentimentRecord) -> Self {
        let confidence = record.display_confidence();
        Self {
            id: record.id,
            text: record.text,
            sentiment: record.sentiment,
            confidence,
            timestamp: record.timestamp.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryView {
    pub results: Vec<HistoryEntry>,
}

/// Compiled page templates.
///
/// Templates end in `.html`, so Tera autoescapes every interpolated value.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (INDEX_TEMPLATE, include_str!("../templates/index.html")),
            (HISTORY_TEMPLATE, include_str!("../templates/history.html")),
        ])
        .map_err(|e| RenderError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    pub fn index(&self, view: &IndexView) -> Result<String, RenderError> {
        self.render(INDEX_TEMPLATE, view)
    }

    pub fn history(&self, view: &HistoryView) -> Result<String, RenderError> {
        self.render(HISTORY_TEMPLATE, view)
    }

    fn render<T: Serialize>(&self, name: &str, view: &T) -> Result<String, RenderError> {
        // Convert the view to a Tera context via serde_json
        let value = serde_json::to_value(view)?;
        let context =
            Context::from_value(value).map_err(|e| RenderError::TemplateRender(e.to_string()))?;

        Ok(self.tera.render(name, &context)?)
    }
}
