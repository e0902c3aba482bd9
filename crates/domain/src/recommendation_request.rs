use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use gauchorecords_core::{Entity, RecordId};

/// A request for a letter of recommendation from a professor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub id: Option<RecordId>,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl RecommendationRequest {
    pub fn new(
        requester_email: impl Into<String>,
        professor_email: impl Into<String>,
        explanation: impl Into<String>,
        date_requested: NaiveDateTime,
        date_needed: NaiveDateTime,
        done: bool,
    ) -> Self {
        Self {
            id: None,
            requester_email: requester_email.into(),
            professor_email: professor_email.into(),
            explanation: explanation.into(),
            date_requested,
            date_needed,
            done,
        }
    }
}

impl Entity for RecommendationRequest {
    const NAME: &'static str = "RecommendationRequest";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
