pub mod dto {
    pub mod common;
    pub mod event;
    pub mod filter;
}

pub mod dates;
pub mod error;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export DTOs
pub use dto::{
    common::{ErrorResponse, LoginRequest, LoginResponse},
    event::{extract_event_list, EventDto, EventField, EventPayload, NEW_EVENT_ID},
    filter::{EventFilter, FilterField},
};
