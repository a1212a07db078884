use shared::{EventDto, EventField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct EventEditorProps {
    /// Draft being edited; a new draft carries the creation sentinel ID
    pub draft: EventDto,
    pub on_change: Callback<(EventField, String)>,
    pub on_submit: Callback<()>,
    pub on_delete: Callback<()>,
    pub on_close: Callback<()>,
}

const EDITOR_INPUTS: [(EventField, &str, &str); 4] = [
    (EventField::Name, "text", "Event name"),
    (EventField::Artist, "text", "Artist"),
    (EventField::Location, "text", "Location"),
    (EventField::Date, "date", "Date"),
];

#[function_component(EventEditor)]
pub fn event_editor(props: &EventEditorProps) -> Html {
    let is_new = props.draft.is_new();

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_delete = props.on_delete.reform(|_: MouseEvent| ());
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            onclick={on_overlay_click}
            class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 px-4"
        >
            <div
                onclick={on_modal_click}
                class="bg-white rounded-xl shadow-xl max-w-md w-full overflow-hidden animate-fadeIn"
            >
                <div class="p-6">
                    <h2 class="text-2xl font-bold text-gray-800 mb-4">
                        {if is_new { "New event".to_string() } else { props.draft.name.clone() }}
                    </h2>

                    <form onsubmit={onsubmit} class="flex flex-col gap-3">
                        {for EDITOR_INPUTS.iter().map(|(field, input_type, placeholder)| {
                            let field = *field;
                            let on_change = props.on_change.clone();
                            let oninput = Callback::from(move |e: InputEvent| {
                                let target: HtmlInputElement = e.target_unchecked_into();
                                on_change.emit((field, target.value()));
                            });
                            html! {
                                <input
                                    type={*input_type}
                                    placeholder={*placeholder}
                                    value={props.draft.field(field).to_string()}
                                    oninput={oninput}
                                    required=true
                                    class="border rounded-lg px-3 py-2"
                                />
                            }
                        })}

                        <div class="flex justify-between mt-4">
                            if !is_new {
                                <button
                                    type="button"
                                    onclick={on_delete}
                                    class="bg-red-500 hover:bg-red-600 text-white px-4 py-2 rounded-lg"
                                >
                                    {"Delete"}
                                </button>
                            }
                            <button
                                type="submit"
                                class="bg-indigo-600 hover:bg-indigo-700 text-white px-5 py-2 rounded-lg font-medium"
                            >
                                {if is_new { "Create" } else { "Save" }}
                            </button>
                        </div>
                    </form>

                    <button
                        onclick={on_close}
                        class="text-gray-500 text-sm mt-4 hover:underline"
                    >
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
