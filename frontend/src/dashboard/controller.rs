use crate::api::events::EventsApi;
use crate::dashboard::prompt::UserPrompt;
use crate::dashboard::state::{DashboardAction, LOAD_ERROR_MESSAGE};
use crate::session::{check_session, SessionGate, SessionProvider};
use crate::Route;
use log::{debug, error, info, warn};
use shared::{EventDto, EventFilter, SharedError};
use std::cell::Cell;
use validator::ValidationErrors;

pub const SAVE_ERROR_MESSAGE: &str = "Failed to save event.";
pub const DELETE_ERROR_MESSAGE: &str = "Failed to delete event.";
pub const DELETE_CONFIRMATION: &str = "Do you really want to delete this event?";

/// Field order used when reporting the first missing value
const EDITABLE_FIELDS: [&str; 4] = ["name", "artist", "location", "date"];

/// Drives the dashboard's network flows and reports progress as
/// `DashboardAction`s.
///
/// The controller owns no view state. Every method takes the dispatcher of
/// the reducer it should update, so the same flows run against a Yew
/// `use_reducer` handle or a plain closure.
pub struct DashboardController<A, S, P> {
    api: A,
    session: S,
    prompt: P,
    generation: Cell<u64>,
}

impl<A, S, P> DashboardController<A, S, P>
where
    A: EventsApi,
    S: SessionProvider,
    P: UserPrompt,
{
    pub fn new(api: A, session: S, prompt: P) -> Self {
        Self {
            api,
            session,
            prompt,
            generation: Cell::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    fn next_generation(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }

    pub fn guard(&self) -> SessionGate {
        check_session(&self.session)
    }

    /// Runs the session guard and, when authorized, the initial load
    pub async fn mount<D>(&self, dispatch: &D) -> SessionGate
    where
        D: Fn(DashboardAction),
    {
        let gate = self.guard();
        if gate == SessionGate::Authorized {
            info!("Session present, loading dashboard");
            self.load_events("", dispatch).await;
        }
        gate
    }

    /// Replaces the list with the server's answer to `query`
    pub async fn load_events<D>(&self, query: &str, dispatch: &D)
    where
        D: Fn(DashboardAction),
    {
        let generation = self.next_generation();
        dispatch(DashboardAction::LoadStarted { generation });

        match self.api.list_events(query).await {
            Ok(events) => {
                debug!("Load {} returned {} events", generation, events.len());
                dispatch(DashboardAction::LoadSucceeded { generation, events });
            }
            Err(e) => {
                error!("Failed to load events: {}", e);
                dispatch(DashboardAction::LoadFailed {
                    generation,
                    message: LOAD_ERROR_MESSAGE.to_string(),
                });
            }
        }
    }

    pub async fn apply_filter<D>(&self, filter: &EventFilter, dispatch: &D)
    where
        D: Fn(DashboardAction),
    {
        match filter.to_query_string() {
            Ok(query) => self.load_events(&query, dispatch).await,
            Err(e) => {
                error!("Failed to encode filter: {}", e);
                let generation = self.next_generation();
                dispatch(DashboardAction::LoadStarted { generation });
                dispatch(DashboardAction::LoadFailed {
                    generation,
                    message: LOAD_ERROR_MESSAGE.to_string(),
                });
            }
        }
    }

    /// Clears every filter field and reloads the unfiltered list
    pub async fn reset_filter<D>(&self, dispatch: &D)
    where
        D: Fn(DashboardAction),
    {
        dispatch(DashboardAction::ResetFilter);
        self.load_events("", dispatch).await;
    }

    /// Creates or updates `draft`, then reloads and closes the editor.
    ///
    /// Nothing is sent when a field is empty. On failure the user is alerted
    /// and the editor stays open.
    pub async fn save_event<D>(&self, draft: &EventDto, dispatch: &D) -> shared::Result<()>
    where
        D: Fn(DashboardAction),
    {
        let payload = match draft.try_into_payload() {
            Ok(payload) => payload,
            Err(errors) => {
                let message = first_validation_message(&errors);
                warn!("Rejected event draft: {}", message);
                self.prompt.alert(&message);
                return Err(SharedError::from(errors));
            }
        };

        let result = if draft.is_new() {
            self.api.create_event(&payload).await
        } else {
            self.api.update_event(draft.id, &payload).await
        };

        if let Err(e) = result {
            error!("Failed to save event: {}", e);
            self.prompt.alert(SAVE_ERROR_MESSAGE);
            return Err(e);
        }

        info!("Saved event \"{}\"", payload.name);
        self.load_events("", dispatch).await;
        dispatch(DashboardAction::CloseEditor);
        Ok(())
    }

    /// Deletes a persisted `draft` after confirmation.
    ///
    /// Returns `Ok(false)` when nothing was sent: the draft is new, or the
    /// user declined.
    pub async fn delete_event<D>(&self, draft: &EventDto, dispatch: &D) -> shared::Result<bool>
    where
        D: Fn(DashboardAction),
    {
        if draft.is_new() {
            debug!("Ignoring delete for an unsaved draft");
            return Ok(false);
        }
        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            debug!("Delete of event {} declined", draft.id);
            return Ok(false);
        }

        if let Err(e) = self.api.delete_event(draft.id).await {
            error!("Failed to delete event {}: {}", draft.id, e);
            self.prompt.alert(DELETE_ERROR_MESSAGE);
            return Err(e);
        }

        info!("Deleted event {}", draft.id);
        self.load_events("", dispatch).await;
        dispatch(DashboardAction::CloseEditor);
        Ok(true)
    }

    /// Drops the persisted session and returns the route to navigate to
    pub fn logout(&self) -> Route {
        self.session.clear();
        info!("Logged out");
        Route::Login
    }
}

fn first_validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    EDITABLE_FIELDS
        .iter()
        .filter_map(|field| field_errors.get(field))
        .filter_map(|errors| errors.first())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
