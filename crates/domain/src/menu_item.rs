use serde::{Deserialize, Serialize};

use gauchorecords_core::{Entity, RecordId};

/// A menu item served at one of the UCSB dining commons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDiningCommonsMenuItem {
    pub id: Option<RecordId>,
    pub name: String,
    pub dining_commons_code: String,
    pub station: String,
}

impl UcsbDiningCommonsMenuItem {
    pub fn new(
        name: impl Into<String>,
        dining_commons_code: impl Into<String>,
        station: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            dining_commons_code: dining_commons_code.into(),
            station: station.into(),
        }
    }
}

impl Entity for UcsbDiningCommonsMenuItem {
    const NAME: &'static str = "UCSBDiningCommonsMenuItem";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
