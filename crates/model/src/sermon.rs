use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use query::Queryable;
use serde::{Deserialize, Serialize};

use crate::{Record, RecordKind};

/// A recorded sermon with its external video link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sermon {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub preacher: Option<String>,
    pub date_preached: NaiveDate,
    pub video_url: String,
    pub description: Option<String>,
}

impl Record for Sermon {
    const KIND: RecordKind = RecordKind::Sermons;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Queryable for Sermon {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(preacher) = &self.preacher {
            fields.push(preacher);
        }
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }

    fn sort_key(&self) -> DateTime<Utc> {
        self.date_preached.and_time(NaiveTime::MIN).and_utc()
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date_preached)
    }
}
