//! Alias entities: write input, persisted record and the outcome of a save.

use serde::{Serialize, Serializer};

/// Langcode stored when no language was specified for an alias.
pub const LANGCODE_NOT_SPECIFIED: &str = "und";

/// Input of a single save call.
///
/// `pid` selects the path: `None` inserts a new alias, `Some` updates the
/// existing row with that primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasInput {
    pub source: String,
    pub alias: String,
    pub langcode: String,
    pub pid: Option<i32>,
}

impl AliasInput {
    /// Creates an insert input with the unspecified langcode.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let input = AliasInput::new("/node/1", "/about-us").with_langcode("en");
    /// ```
    pub fn new(source: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alias: alias.into(),
            langcode: LANGCODE_NOT_SPECIFIED.to_string(),
            pid: None,
        }
    }

    pub fn with_langcode(mut self, langcode: impl Into<String>) -> Self {
        self.langcode = langcode.into();
        self
    }

    pub fn with_pid(mut self, pid: i32) -> Self {
        self.pid = Some(pid);
        self
    }
}

/// Column values written by an insert or update.
///
/// `domain_id` is `None` only when neither the caller nor the negotiator could
/// produce a domain; the NOT NULL constraint then rejects the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasFields {
    pub source: String,
    pub alias: String,
    pub langcode: String,
    pub domain_id: Option<i32>,
    pub entity_type: Option<String>,
    pub entity_id: Option<i32>,
}

/// Values of an alias row before an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OriginalAlias {
    pub source: String,
    pub alias: String,
    pub langcode: String,
}

/// Snapshot of the prior values attached to an updated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorValues {
    Captured(OriginalAlias),
    /// The prior row could not be read, or did not exist.
    Unavailable,
}

impl PriorValues {
    pub fn captured(&self) -> Option<&OriginalAlias> {
        match self {
            Self::Captured(original) => Some(original),
            Self::Unavailable => None,
        }
    }
}

// Listeners receive `false` when the prior values are unavailable.
impl Serialize for PriorValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Captured(original) => original.serialize(serializer),
            Self::Unavailable => serializer.serialize_bool(false),
        }
    }
}

/// A persisted row of the `domain_path` table.
///
/// `original` is only populated on records returned from an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasRecord {
    pub pid: i32,
    pub domain_id: i32,
    pub source: String,
    pub alias: String,
    pub langcode: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<PriorValues>,
}

/// The kind of write a save performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathOperation {
    Insert,
    Update,
}

impl PathOperation {
    /// Name of the notification broadcast after a write of this kind.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Insert => "path_insert",
            Self::Update => "path_update",
        }
    }
}

/// Result of a save that did not fail.
///
/// `NoRowAffected` is returned when an update targets a `pid` that matches no
/// row. It is not an error and callers must handle it separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Written(AliasRecord),
    NoRowAffected,
}

impl SaveOutcome {
    pub fn record(&self) -> Option<&AliasRecord> {
        match self {
            Self::Written(record) => Some(record),
            Self::NoRowAffected => None,
        }
    }

    pub fn into_record(self) -> Option<AliasRecord> {
        match self {
            Self::Written(record) => Some(record),
            Self::NoRowAffected => None,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }
}
