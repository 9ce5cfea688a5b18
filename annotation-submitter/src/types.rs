//! Wire model for `POST /api/projects/:id/annotations/`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Attachment level of an annotation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationScope {
    Project,
    Dashboard,
}

/// How the annotation was created. This step only ever reports `GIT`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CreationType {
    Git,
}

/// Dashboard reference taken from the `dashboard-id` input.
///
/// Parsed like a lenient integer read: optional whitespace and sign, then the
/// longest run of base-10 digits (`"42abc"` is 42). Input with no leading
/// digits, or one that overflows `i64`, keeps the dashboard scope but
/// serializes as `null`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DashboardId(Option<i64>);

impl DashboardId {
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let (sign, rest) = match s.as_bytes().first() {
            Some(b'-') => ("-", &s[1..]),
            Some(b'+') => ("", &s[1..]),
            _ => ("", s),
        };
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Self(None);
        }
        Self(format!("{sign}{}", &rest[..digits]).parse::<i64>().ok())
    }

    /// The numeric id, if the input had one.
    pub fn value(&self) -> Option<i64> {
        self.0
    }
}

impl From<i64> for DashboardId {
    fn from(id: i64) -> Self {
        Self(Some(id))
    }
}

/// Request body for annotation creation.
///
/// `scope` is derived from `dashboard_id`, so `dashboard_id` is serialized
/// if and only if `scope == Dashboard`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnnotationRequest {
    pub content: String,
    scope: AnnotationScope,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub date_marker: DateTime<Utc>,
    creation_type: CreationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    dashboard_id: Option<DashboardId>,
}

impl AnnotationRequest {
    /// Builds a request marked at `date_marker`.
    pub fn new(
        content: impl Into<String>,
        dashboard_id: Option<DashboardId>,
        date_marker: DateTime<Utc>,
    ) -> Self {
        let scope = match dashboard_id {
            Some(_) => AnnotationScope::Dashboard,
            None => AnnotationScope::Project,
        };
        Self {
            content: content.into(),
            scope,
            date_marker,
            creation_type: CreationType::Git,
            dashboard_id,
        }
    }

    /// Builds a request marked at the current wall-clock time.
    pub fn now(content: impl Into<String>, dashboard_id: Option<DashboardId>) -> Self {
        Self::new(content, dashboard_id, Utc::now())
    }

    pub fn scope(&self) -> AnnotationScope {
        self.scope
    }

    pub fn creation_type(&self) -> CreationType {
        self.creation_type
    }

    pub fn dashboard_id(&self) -> Option<DashboardId> {
        self.dashboard_id
    }
}

/// `2025-01-31T09:15:00.123Z`: UTC, millisecond precision, `Z` suffix.
fn serialize_iso_millis<S>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
