use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The three record kinds managed by the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Events,
    Sermons,
    Resources,
}

#[derive(Debug, Error)]
#[error("unknown record kind: {0}")]
pub struct UnknownKind(String);

/// Sort hint a listing passes to the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortHint {
    pub column: &'static str,
    pub ascending: bool,
}

impl SortHint {
    pub fn ascending(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub fn descending(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::Events,
        RecordKind::Sermons,
        RecordKind::Resources,
    ];

    /// Table name in the remote store.
    pub fn table(&self) -> &'static str {
        match self {
            RecordKind::Events => "events",
            RecordKind::Sermons => "sermons",
            RecordKind::Resources => "resources",
        }
    }

    /// Column and direction the listing pages request from the store:
    /// upcoming events first, latest sermons and resources first.
    pub fn default_order(&self) -> SortHint {
        match self {
            RecordKind::Events => SortHint::ascending("event_date"),
            RecordKind::Sermons => SortHint::descending("date_preached"),
            RecordKind::Resources => SortHint::descending("created_at"),
        }
    }

    /// Field names scanned by free-text search for this kind.
    pub fn searchable_fields(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Events => &["title", "location", "description"],
            RecordKind::Sermons => &["title", "preacher", "description"],
            RecordKind::Resources => &["title", "description"],
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

impl FromStr for RecordKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "events" => Ok(RecordKind::Events),
            "sermons" => Ok(RecordKind::Sermons),
            "resources" => Ok(RecordKind::Resources),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("events".parse::<RecordKind>().unwrap(), RecordKind::Events);
        assert_eq!(
            "Sermons".parse::<RecordKind>().unwrap(),
            RecordKind::Sermons
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!("newsletters".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_default_order() {
        assert!(RecordKind::Events.default_order().ascending);
        assert!(!RecordKind::Sermons.default_order().ascending);
        assert_eq!(RecordKind::Resources.default_order().column, "created_at");
    }
}
