use log::debug;
use shared::{EventDto, EventField, EventFilter, FilterField};
use std::rc::Rc;
use yew::prelude::*;

/// User-visible message when the event list cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load events.";

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    /// Last successfully loaded server snapshot, in server order
    pub events: Vec<EventDto>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: EventFilter,
    /// Draft held by the editor; `None` while it is closed
    pub selected: Option<EventDto>,
    /// Generation of the most recently started load
    pub generation: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            // The first load starts on mount
            loading: true,
            error: None,
            filter: EventFilter::default(),
            selected: None,
            generation: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Closed,
    Creating,
    Editing,
}

/// What the list area shows, checked in declaration order
#[derive(Clone, Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Populated(&'a [EventDto]),
}

impl DashboardState {
    pub fn editor_mode(&self) -> EditorMode {
        match &self.selected {
            None => EditorMode::Closed,
            Some(draft) if draft.is_new() => EditorMode::Creating,
            Some(_) => EditorMode::Editing,
        }
    }

    pub fn list_view(&self) -> ListView<'_> {
        if self.loading {
            ListView::Loading
        } else if let Some(error) = &self.error {
            ListView::Failed(error)
        } else if self.events.is_empty() {
            ListView::Empty
        } else {
            ListView::Populated(&self.events)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardAction {
    LoadStarted { generation: u64 },
    LoadSucceeded { generation: u64, events: Vec<EventDto> },
    LoadFailed { generation: u64, message: String },
    SetFilterField(FilterField, String),
    ResetFilter,
    OpenCreate,
    OpenEdit(EventDto),
    EditDraft(EventField, String),
    CloseEditor,
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DashboardAction::LoadStarted { generation } => Rc::new(Self {
                loading: true,
                generation,
                ..(*self).clone()
            }),
            DashboardAction::LoadSucceeded { generation, events } => {
                if generation != self.generation {
                    debug!("Discarding stale event list from load {}", generation);
                    return self;
                }
                Rc::new(Self {
                    events,
                    loading: false,
                    error: None,
                    ..(*self).clone()
                })
            }
            DashboardAction::LoadFailed { generation, message } => {
                if generation != self.generation {
                    debug!("Discarding stale failure from load {}", generation);
                    return self;
                }
                // Keep the previous snapshot
                Rc::new(Self {
                    loading: false,
                    error: Some(message),
                    ..(*self).clone()
                })
            }
            DashboardAction::SetFilterField(field, value) => Rc::new(Self {
                filter: self.filter.with_field(field, value),
                ..(*self).clone()
            }),
            DashboardAction::ResetFilter => Rc::new(Self {
                filter: EventFilter::default(),
                ..(*self).clone()
            }),
            DashboardAction::OpenCreate => Rc::new(Self {
                selected: Some(EventDto::blank()),
                ..(*self).clone()
            }),
            DashboardAction::OpenEdit(event) => Rc::new(Self {
                selected: Some(event.to_draft()),
                ..(*self).clone()
            }),
            DashboardAction::EditDraft(field, value) => match &self.selected {
                Some(draft) => Rc::new(Self {
                    selected: Some(draft.with_field(field, value)),
                    ..(*self).clone()
                }),
                None => self,
            },
            DashboardAction::CloseEditor => {
                if self.selected.is_none() {
                    return self;
                }
                Rc::new(Self {
                    selected: None,
                    ..(*self).clone()
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(id: i64, name: &str) -> EventDto {
        EventDto {
            id,
            name: name.to_string(),
            artist: "Pitty".to_string(),
            location: "Curitiba".to_string(),
            date: "2024-05-01".to_string(),
        }
    }

    fn reduce_all(actions: Vec<DashboardAction>) -> Rc<DashboardState> {
        actions
            .into_iter()
            .fold(Rc::new(DashboardState::default()), |state, action| state.reduce(action))
    }

    #[test]
    fn test_initial_state_shows_loading() {
        let state = DashboardState::default();
        assert_eq!(state.list_view(), ListView::Loading);
        assert_eq!(state.editor_mode(), EditorMode::Closed);
    }

    #[test]
    fn test_successful_load_populates_list() {
        let state = reduce_all(vec![
            DashboardAction::LoadStarted { generation: 1 },
            DashboardAction::LoadSucceeded {
                generation: 1,
                events: vec![event(1, "A"), event(2, "B")],
            },
        ]);
        assert!(!state.loading);
        assert_eq!(
            state.list_view(),
            ListView::Populated(&[event(1, "A"), event(2, "B")])
        );
    }

    #[test]
    fn test_empty_result_has_its_own_view() {
        let state = reduce_all(vec![
            DashboardAction::LoadStarted { generation: 1 },
            DashboardAction::LoadSucceeded { generation: 1, events: vec![] },
        ]);
        assert_eq!(state.list_view(), ListView::Empty);
    }

    #[test]
    fn test_failed_load_keeps_previous_list() {
        let state = reduce_all(vec![
            DashboardAction::LoadStarted { generation: 1 },
            DashboardAction::LoadSucceeded { generation: 1, events: vec![event(1, "A")] },
            DashboardAction::LoadStarted { generation: 2 },
            DashboardAction::LoadFailed {
                generation: 2,
                message: LOAD_ERROR_MESSAGE.to_string(),
            },
        ]);
        assert!(!state.loading);
        assert_eq!(state.events, vec![event(1, "A")]);
        assert_eq!(state.list_view(), ListView::Failed(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn test_success_after_failure_clears_error() {
        let state = reduce_all(vec![
            DashboardAction::LoadStarted { generation: 1 },
            DashboardAction::LoadFailed { generation: 1, message: LOAD_ERROR_MESSAGE.to_string() },
            DashboardAction::LoadStarted { generation: 2 },
            DashboardAction::LoadSucceeded { generation: 2, events: vec![event(3, "C")] },
        ]);
        assert_eq!(state.error, None);
        assert_eq!(state.events, vec![event(3, "C")]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let state = reduce_all(vec![
            DashboardAction::LoadStarted { generation: 1 },
            DashboardAction::LoadStarted { generation: 2 },
            DashboardAction::LoadSucceeded { generation: 2, events: vec![event(2, "filtered")] },
            DashboardAction::LoadSucceeded { generation: 1, events: vec![event(1, "unfiltered")] },
        ]);
        assert_eq!(state.events, vec![event(2, "filtered")]);
    }

    #[test]
    fn test_superseded_load_keeps_loading_flag() {
        let state = reduce_all(vec![
            DashboardAction::LoadStarted { generation: 1 },
            DashboardAction::LoadStarted { generation: 2 },
            DashboardAction::LoadFailed { generation: 1, message: LOAD_ERROR_MESSAGE.to_string() },
        ]);
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_open_create_yields_blank_draft() {
        let state = reduce_all(vec![DashboardAction::OpenCreate]);
        assert_eq!(state.selected, Some(EventDto::blank()));
        assert_eq!(state.editor_mode(), EditorMode::Creating);
    }

    #[test]
    fn test_draft_edits_do_not_touch_list_entry() {
        let listed = event(5, "Original");
        let state = reduce_all(vec![
            DashboardAction::LoadStarted { generation: 1 },
            DashboardAction::LoadSucceeded { generation: 1, events: vec![listed.clone()] },
            DashboardAction::OpenEdit(listed.clone()),
            DashboardAction::EditDraft(EventField::Name, "Changed".to_string()),
        ]);
        assert_eq!(state.editor_mode(), EditorMode::Editing);
        assert_eq!(state.selected.as_ref().map(|d| d.name.as_str()), Some("Changed"));
        assert_eq!(state.events, vec![listed]);
    }

    #[test]
    fn test_close_discards_draft() {
        let state = reduce_all(vec![
            DashboardAction::OpenEdit(event(5, "Original")),
            DashboardAction::EditDraft(EventField::Location, "Recife".to_string()),
            DashboardAction::CloseEditor,
        ]);
        assert_eq!(state.selected, None);
        assert_eq!(state.editor_mode(), EditorMode::Closed);
    }

    #[test]
    fn test_edit_without_open_editor_is_ignored() {
        let state = reduce_all(vec![DashboardAction::EditDraft(EventField::Name, "x".to_string())]);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_filter_fields_and_reset() {
        let state = reduce_all(vec![
            DashboardAction::SetFilterField(FilterField::Name, "Rock in Rio".to_string()),
            DashboardAction::SetFilterField(FilterField::DateFrom, "2024-01-01".to_string()),
        ]);
        assert_eq!(state.filter.name, "Rock in Rio");
        assert_eq!(state.filter.date_from, "2024-01-01");

        let state = state.reduce(DashboardAction::ResetFilter);
        assert!(state.filter.is_empty());
    }
}
