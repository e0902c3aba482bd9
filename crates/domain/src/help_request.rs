use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use gauchorecords_core::{Entity, RecordId};

/// A request for staff help at a table or breakout room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    pub id: Option<RecordId>,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

impl HelpRequest {
    pub fn new(
        requester_email: impl Into<String>,
        team_id: impl Into<String>,
        table_or_breakout_room: impl Into<String>,
        request_time: NaiveDateTime,
        explanation: impl Into<String>,
        solved: bool,
    ) -> Self {
        Self {
            id: None,
            requester_email: requester_email.into(),
            team_id: team_id.into(),
            table_or_breakout_room: table_or_breakout_room.into(),
            request_time,
            explanation: explanation.into(),
            solved,
        }
    }
}

impl Entity for HelpRequest {
    const NAME: &'static str = "HelpRequest";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
