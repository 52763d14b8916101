use chrono::{DateTime, NaiveDate, Utc};
use query::Queryable;
use serde::{Deserialize, Serialize};

use crate::{Record, RecordKind};

/// A scheduled church event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl Record for Event {
    const KIND: RecordKind = RecordKind::Events;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Queryable for Event {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.location.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }

    fn sort_key(&self) -> DateTime<Utc> {
        self.event_date
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.event_date.date_naive())
    }
}
