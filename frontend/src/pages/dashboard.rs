use crate::api::events::HttpEventsApi;
use crate::components::event_card::EventCard;
use crate::components::event_editor::EventEditor;
use crate::components::filter_bar::FilterBar;
use crate::components::footer::Footer;
use crate::dashboard::{BrowserPrompt, DashboardAction, DashboardController, DashboardState, ListView};
use crate::session::{LocalStorageSession, SessionGate};
use log::debug;
use shared::{EventDto, EventField, FilterField};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

type WebController = DashboardController<HttpEventsApi, LocalStorageSession, BrowserPrompt>;

fn dispatch_fn(dispatcher: UseReducerDispatcher<DashboardState>) -> impl Fn(DashboardAction) {
    move |action: DashboardAction| dispatcher.dispatch(action)
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let navigator = use_navigator();
    let state = use_reducer(DashboardState::default);
    let controller: Rc<WebController> = use_memo((), |_| {
        DashboardController::new(HttpEventsApi, LocalStorageSession, BrowserPrompt)
    });

    // Session guard and initial load
    {
        let controller = controller.clone();
        let dispatch = dispatch_fn(state.dispatcher());
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let SessionGate::Redirect(route) = controller.mount(&dispatch).await {
                    match navigator {
                        Some(navigator) => navigator.push(&route),
                        None => debug!("No navigator available for redirect"),
                    }
                }
            });
            || ()
        });
    }

    let on_filter_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (FilterField, String)| {
            dispatcher.dispatch(DashboardAction::SetFilterField(field, value));
        })
    };

    let on_filter_submit = {
        let controller = controller.clone();
        let filter = state.filter.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let filter = filter.clone();
            let dispatch = dispatch_fn(dispatcher.clone());
            spawn_local(async move {
                controller.apply_filter(&filter, &dispatch).await;
            });
        })
    };

    let on_filter_reset = {
        let controller = controller.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let dispatch = dispatch_fn(dispatcher.clone());
            spawn_local(async move {
                controller.reset_filter(&dispatch).await;
            });
        })
    };

    let on_new_event = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DashboardAction::OpenCreate))
    };

    let on_select = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: EventDto| dispatcher.dispatch(DashboardAction::OpenEdit(event)))
    };

    let on_draft_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (EventField, String)| {
            dispatcher.dispatch(DashboardAction::EditDraft(field, value));
        })
    };

    let on_save = {
        let controller = controller.clone();
        let selected = state.selected.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            let Some(draft) = selected.clone() else {
                return;
            };
            let controller = controller.clone();
            let dispatch = dispatch_fn(dispatcher.clone());
            spawn_local(async move {
                // Failures are alerted and logged by the controller
                let _ = controller.save_event(&draft, &dispatch).await;
            });
        })
    };

    let on_delete = {
        let controller = controller.clone();
        let selected = state.selected.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            let Some(draft) = selected.clone() else {
                return;
            };
            let controller = controller.clone();
            let dispatch = dispatch_fn(dispatcher.clone());
            spawn_local(async move {
                let _ = controller.delete_event(&draft, &dispatch).await;
            });
        })
    };

    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::CloseEditor))
    };

    let on_logout = {
        let controller = controller.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let route = controller.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    if controller.guard() != SessionGate::Authorized {
        return html! {};
    }

    let content = match state.list_view() {
        ListView::Loading => html! {
            <div class="flex justify-center py-10">
                <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
            </div>
        },
        ListView::Failed(message) => html! {
            <p class="text-center text-red-500">{message}</p>
        },
        ListView::Empty => html! {
            <p class="text-center text-gray-500">{"No events found."}</p>
        },
        ListView::Populated(events) => html! {
            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {for events.iter().map(|event| html! {
                    <EventCard key={event.id.to_string()} event={event.clone()} on_select={on_select.clone()} />
                })}
            </div>
        },
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-indigo-50 via-white to-blue-100">
            <header class="bg-gradient-to-r from-indigo-600 to-purple-600 text-white py-4 shadow-md sticky top-0 z-10">
                <div class="max-w-6xl mx-auto flex justify-between items-center px-4">
                    <h1 class="text-2xl font-bold tracking-wide">{"ShowTime - Event Dashboard"}</h1>
                    <div class="flex gap-2">
                        <button
                            onclick={on_new_event}
                            class="bg-indigo-800 hover:bg-indigo-700 text-sm px-4 py-2 rounded-md font-medium transition-all"
                        >
                            {"+ New event"}
                        </button>
                        <button
                            onclick={on_logout}
                            class="bg-indigo-800 hover:bg-indigo-700 text-sm px-4 py-2 rounded-md font-medium transition-all"
                        >
                            {"Log out"}
                        </button>
                    </div>
                </div>
            </header>

            if let Some(draft) = state.selected.clone() {
                <EventEditor
                    draft={draft}
                    on_change={on_draft_change}
                    on_submit={on_save}
                    on_delete={on_delete}
                    on_close={on_close}
                />
            }

            <main class="max-w-6xl mx-auto py-8 px-4">
                <FilterBar
                    filter={state.filter.clone()}
                    on_change={on_filter_change}
                    on_submit={on_filter_submit}
                    on_reset={on_filter_reset}
                />

                {content}

                <Footer />
            </main>
        </div>
    }
}
