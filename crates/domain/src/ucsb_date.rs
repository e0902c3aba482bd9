use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use gauchorecords_core::{Entity, RecordId};

/// A date of significance on the UCSB academic calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDate {
    pub id: Option<RecordId>,
    #[serde(rename = "quarterYYYYQ")]
    pub quarter_yyyyq: String,
    pub name: String,
    pub local_date_time: NaiveDateTime,
}

impl UcsbDate {
    pub fn new(
        quarter_yyyyq: impl Into<String>,
        name: impl Into<String>,
        local_date_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: None,
            quarter_yyyyq: quarter_yyyyq.into(),
            name: name.into(),
            local_date_time,
        }
    }
}

impl Entity for UcsbDate {
    const NAME: &'static str = "UCSBDate";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
