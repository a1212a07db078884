use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Filter fields of the dashboard search bar.
///
/// Empty fields are left out of the query. A field counts as empty only when
/// it has no characters at all; whitespace is sent as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub artist: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_from: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Name,
    Artist,
    Location,
    DateFrom,
    DateTo,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.artist.is_empty()
            && self.location.is_empty()
            && self.date_from.is_empty()
            && self.date_to.is_empty()
    }

    pub fn with_field(&self, field: FilterField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            FilterField::Name => next.name = value,
            FilterField::Artist => next.artist = value,
            FilterField::Location => next.location = value,
            FilterField::DateFrom => next.date_from = value,
            FilterField::DateTo => next.date_to = value,
        }
        next
    }

    pub fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Artist => &self.artist,
            FilterField::Location => &self.location,
            FilterField::DateFrom => &self.date_from,
            FilterField::DateTo => &self.date_to,
        }
    }

    /// Form-encoded query fragment including the leading `?`, or an empty
    /// string when no field is set.
    pub fn to_query_string(&self) -> Result<String> {
        let encoded = serde_urlencoded::to_string(self)?;
        if encoded.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("?{}", encoded))
        }
    }
}
