use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use gauchorecords_core::{Entity, RecordId};

/// A bookmarked article submitted by a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Option<RecordId>,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    pub date_added: NaiveDateTime,
}

impl Article {
    /// Build a fresh article; the store assigns `id` on first save.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        explanation: impl Into<String>,
        email: impl Into<String>,
        date_added: NaiveDateTime,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            url: url.into(),
            explanation: explanation.into(),
            email: email.into(),
            date_added,
        }
    }
}

impl Entity for Article {
    const NAME: &'static str = "Article";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
