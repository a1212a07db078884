use crate::dates::{display_date, to_input_date};
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Identifier carried by a draft that has not been persisted yet
pub const NEW_EVENT_ID: i64 = 0;

/// Data Transfer Object for an Event as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDto {
    /// Server-assigned ID, `NEW_EVENT_ID` while creating
    pub id: i64,
    pub name: String,
    pub artist: String,
    pub location: String,
    /// ISO-8601 date exactly as transmitted
    pub date: String,
}

/// The editable fields of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Name,
    Artist,
    Location,
    Date,
}

/// Request body for `POST /events` and `PUT /events/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EventPayload {
    #[validate(length(min = 1, message = "Event name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Artist is required"))]
    pub artist: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
}

impl EventDto {
    /// Empty draft used when opening the editor for creation
    pub fn blank() -> Self {
        Self {
            id: NEW_EVENT_ID,
            name: String::new(),
            artist: String::new(),
            location: String::new(),
            date: String::new(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == NEW_EVENT_ID
    }

    /// Owned copy for the editor, with the date in `YYYY-MM-DD` form
    pub fn to_draft(&self) -> Self {
        Self {
            date: to_input_date(&self.date),
            ..self.clone()
        }
    }

    /// Returns a new record with one field replaced
    pub fn with_field(&self, field: EventField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            EventField::Name => next.name = value,
            EventField::Artist => next.artist = value,
            EventField::Location => next.location = value,
            EventField::Date => next.date = value,
        }
        next
    }

    pub fn field(&self, field: EventField) -> &str {
        match field {
            EventField::Name => &self.name,
            EventField::Artist => &self.artist,
            EventField::Location => &self.location,
            EventField::Date => &self.date,
        }
    }

    pub fn payload(&self) -> EventPayload {
        EventPayload {
            name: self.name.clone(),
            artist: self.artist.clone(),
            location: self.location.clone(),
            date: self.date.clone(),
        }
    }

    /// Validates the editable fields and returns the request body
    pub fn try_into_payload(&self) -> std::result::Result<EventPayload, validator::ValidationErrors> {
        let payload = self.payload();
        payload.validate()?;
        Ok(payload)
    }

    pub fn display_date(&self) -> String {
        display_date(&self.date)
    }
}

/// Normalizes a `GET /events` body into the event collection.
///
/// A non-null `data` field on an object body wins; any other body is taken
/// to be the collection itself.
pub fn extract_event_list(body: &str) -> Result<Vec<EventDto>> {
    let value: Value = serde_json::from_str(body)?;
    let collection = match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if !data.is_null() => data,
            _ => {
                debug!("Event list body has no data envelope, using it as is");
                Value::Object(map)
            }
        },
        other => other,
    };
    let events: Vec<EventDto> = serde_json::from_value(collection)?;
    debug!("Normalized {} events", events.len());
    Ok(events)
}
