use serde::{Deserialize, Serialize};

/// Label shown in place of a missing end date.
pub const PRESENT: &str = "Present";

/// An education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Education {
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// `"<start> - <end>"`, with `Present` for an ongoing entry.
    pub fn period(&self) -> String {
        period(&self.start_date, self.end_date.as_deref())
    }
}

/// A work history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl WorkExperience {
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// `"<start> - <end>"`, with `Present` for an ongoing entry.
    pub fn period(&self) -> String {
        period(&self.start_date, self.end_date.as_deref())
    }
}

// Dates are opaque strings from the backend; an empty end date counts as absent.
fn period(start: &str, end: Option<&str>) -> String {
    let end = end.filter(|e| !e.is_empty()).unwrap_or(PRESENT);
    format!("{} - {}", start, end)
}
