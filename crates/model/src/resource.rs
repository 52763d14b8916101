use chrono::{DateTime, NaiveDate, Utc};
use query::Queryable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::{Record, RecordKind};

/// Fixed category set for resources.
///
/// The admin form is the sole producer of this field and constrains input
/// to this list; anything else is rejected before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceCategory {
    #[serde(rename = "Sunday School")]
    SundaySchool,
    #[serde(rename = "Sermon Archive")]
    SermonArchive,
    Discipleship,
    #[serde(rename = "Bible Reading Guide")]
    BibleReadingGuide,
}

#[derive(Debug, Error)]
#[error("unknown resource category: {0}")]
pub struct UnknownCategory(pub String);

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::SundaySchool,
        ResourceCategory::SermonArchive,
        ResourceCategory::Discipleship,
        ResourceCategory::BibleReadingGuide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::SundaySchool => "Sunday School",
            ResourceCategory::SermonArchive => "Sermon Archive",
            ResourceCategory::Discipleship => "Discipleship",
            ResourceCategory::BibleReadingGuide => "Bible Reading Guide",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A downloadable study resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub category: ResourceCategory,
    pub file_url: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl Record for Resource {
    const KIND: RecordKind = RecordKind::Resources;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Queryable for Resource {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }

    fn sort_key(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.created_at.date_naive())
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }
}
