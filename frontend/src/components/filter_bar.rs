use shared::{EventFilter, FilterField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FilterBarProps {
    pub filter: EventFilter,
    pub on_change: Callback<(FilterField, String)>,
    pub on_submit: Callback<()>,
    pub on_reset: Callback<()>,
}

struct FilterInput {
    field: FilterField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
}

const FILTER_INPUTS: [FilterInput; 5] = [
    FilterInput { field: FilterField::Name, label: "Name", input_type: "text", placeholder: "e.g. Rock in Rio" },
    FilterInput { field: FilterField::Artist, label: "Artist", input_type: "text", placeholder: "e.g. Pitty" },
    FilterInput { field: FilterField::Location, label: "Location", input_type: "text", placeholder: "e.g. São Paulo" },
    FilterInput { field: FilterField::DateFrom, label: "From", input_type: "date", placeholder: "" },
    FilterInput { field: FilterField::DateTo, label: "To", input_type: "date", placeholder: "" },
];

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_reset = props.on_reset.reform(|_: MouseEvent| ());

    html! {
        <form
            onsubmit={onsubmit}
            class="bg-white rounded-lg shadow p-4 mb-8 flex flex-wrap gap-3 items-end"
        >
            {for FILTER_INPUTS.iter().map(|input| {
                let field = input.field;
                let on_change = props.on_change.clone();
                let oninput = Callback::from(move |e: InputEvent| {
                    let target: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit((field, target.value()));
                });
                html! {
                    <div class="flex flex-col">
                        <label class="text-sm text-gray-600">{input.label}</label>
                        <input
                            type={input.input_type}
                            value={props.filter.field(field).to_string()}
                            placeholder={input.placeholder}
                            oninput={oninput}
                            class="border border-gray-300 rounded-md px-3 py-1 focus:ring-indigo-400 focus:border-indigo-400"
                        />
                    </div>
                }
            })}

            <div class="flex gap-2">
                <button
                    type="submit"
                    class="bg-indigo-600 text-white px-4 py-2 rounded-md hover:bg-indigo-700 transition-all"
                >
                    {"Filter"}
                </button>
                <button
                    type="button"
                    onclick={on_reset}
                    class="bg-gray-300 text-gray-800 px-4 py-2 rounded-md hover:bg-gray-400 transition-all"
                >
                    {"Clear"}
                </button>
            </div>
        </form>
    }
}
