use chrono::NaiveDate;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Posting identifier as issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostingId(String);

impl PostingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PostingId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PostingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for PostingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A job posting as returned by a posting source.
///
/// Field aliases accept the platform export names (`Job_Title__c`, ...) so
/// that raw exports can be loaded without a conversion step. Text fields are
/// optional: sources are allowed to omit them and the engine treats a missing
/// field as "does not match" rather than as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    #[serde(alias = "Id")]
    pub id: PostingId,

    #[serde(default, alias = "Job_Title__c")]
    pub title: Option<String>,

    #[serde(default, alias = "Department__c")]
    pub department: Option<String>,

    #[serde(default, alias = "Location__c")]
    pub location: Option<String>,

    /// Whole-number decimals (`12.0`) are accepted: platform exports write
    /// every number field as a double.
    #[serde(
        default,
        alias = "Total_Open_Positions__c",
        deserialize_with = "deserialize_count"
    )]
    pub open_positions: Option<i64>,

    #[serde(default, alias = "Posting_Date__c")]
    pub posting_date: Option<NaiveDate>,

    /// Long-form description, usually only present on detail records
    #[serde(default, alias = "Description__c", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default = "default_active", alias = "Is_Active__c")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a whole number of open positions")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(self)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v)
                .map(Some)
                .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            // Bounds are exclusive at the top: i64::MAX is not representable as f64
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(Some(v as i64))
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_option(CountVisitor)
}

impl Posting {
    pub fn new(id: impl Into<PostingId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            department: None,
            location: None,
            open_positions: None,
            posting_date: None,
            description: None,
            active: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn open_positions(mut self, count: i64) -> Self {
        self.open_positions = Some(count);
        self
    }

    pub fn posting_date(mut self, date: NaiveDate) -> Self {
        self.posting_date = Some(date);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Display-only urgency bucket derived from the open-position count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriorityClass {
    #[serde(rename = "low-priority")]
    Low,
    #[serde(rename = "medium-priority")]
    Medium,
    #[serde(rename = "high-priority")]
    High,
}

impl PriorityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityClass::High => "high-priority",
            PriorityClass::Medium => "medium-priority",
            PriorityClass::Low => "low-priority",
        }
    }
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A posting annotated with its derived priority class.
///
/// The priority class is computed once at ingestion and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingRow {
    #[serde(flatten)]
    pub posting: Posting,
    pub priority_class: PriorityClass,
}

impl PostingRow {
    pub fn id(&self) -> &PostingId {
        &self.posting.id
    }
}
