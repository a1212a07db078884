use crate::api::api_url;
use crate::api::utils::{
    authenticated_delete, authenticated_get, authenticated_post, authenticated_put, error_from_response,
};
use async_trait::async_trait;
use log::debug;
use shared::{extract_event_list, EventDto, EventPayload, SharedError};

/// REST operations on the `/events` collection
#[async_trait(?Send)]
pub trait EventsApi {
    /// `query` is an encoded fragment with its leading `?`, or empty
    async fn list_events(&self, query: &str) -> shared::Result<Vec<EventDto>>;
    async fn create_event(&self, payload: &EventPayload) -> shared::Result<()>;
    async fn update_event(&self, id: i64, payload: &EventPayload) -> shared::Result<()>;
    async fn delete_event(&self, id: i64) -> shared::Result<()>;
}

/// `EventsApi` over `gloo-net` against the configured base URL
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpEventsApi;

fn event_url(id: i64) -> String {
    format!("{}/{}", api_url("/events"), id)
}

#[async_trait(?Send)]
impl EventsApi for HttpEventsApi {
    async fn list_events(&self, query: &str) -> shared::Result<Vec<EventDto>> {
        let url = format!("{}{}", api_url("/events"), query);
        debug!("Fetching events from {}", url);

        let response = authenticated_get(&url)
            .send()
            .await
            .map_err(|e| SharedError::Network(format!("Failed to fetch events: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| SharedError::Network(format!("Failed to read events response: {}", e)))?;

        let events = extract_event_list(&body)?;
        debug!("Successfully fetched {} events", events.len());
        Ok(events)
    }

    async fn create_event(&self, payload: &EventPayload) -> shared::Result<()> {
        debug!("Creating event: {}", payload.name);

        let response = authenticated_post(&api_url("/events"))
            .json(payload)
            .map_err(|e| SharedError::Conversion(format!("Failed to serialize event: {}", e)))?
            .send()
            .await
            .map_err(|e| SharedError::Network(format!("Failed to create event: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        debug!("Successfully created event: {}", payload.name);
        Ok(())
    }

    async fn update_event(&self, id: i64, payload: &EventPayload) -> shared::Result<()> {
        debug!("Updating event with ID: {}", id);

        let response = authenticated_put(&event_url(id))
            .json(payload)
            .map_err(|e| SharedError::Conversion(format!("Failed to serialize event: {}", e)))?
            .send()
            .await
            .map_err(|e| SharedError::Network(format!("Failed to update event: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        debug!("Successfully updated event {}", id);
        Ok(())
    }

    async fn delete_event(&self, id: i64) -> shared::Result<()> {
        debug!("Deleting event with ID: {}", id);

        let response = authenticated_delete(&event_url(id))
            .send()
            .await
            .map_err(|e| SharedError::Network(format!("Failed to delete event: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        debug!("Successfully deleted event {}", id);
        Ok(())
    }
}
