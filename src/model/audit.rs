use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation and modification stamps shared by every persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub last_modified_by: Option<String>,
    pub last_modified_at: NaiveDateTime,
}

impl Audit {
    pub fn now(actor: Option<&str>) -> Self {
        let at = Utc::now().naive_utc();
        Self {
            created_by: actor.map(str::to_string),
            created_at: at,
            last_modified_by: actor.map(str::to_string),
            last_modified_at: at,
        }
    }

    pub fn touch(&mut self, actor: Option<&str>) {
        self.last_modified_by = actor.map(str::to_string);
        self.last_modified_at = Utc::now().naive_utc();
    }
}

impl Default for Audit {
    fn default() -> Self {
        Self::now(None)
    }
}
