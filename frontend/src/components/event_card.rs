use shared::EventDto;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct EventCardProps {
    pub event: EventDto,
    pub on_select: Callback<EventDto>,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let onclick = {
        let event = props.event.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(event.clone()))
    };

    let event = &props.event;
    html! {
        <div
            onclick={onclick}
            class="bg-white shadow-lg rounded-xl overflow-hidden animate-card cursor-pointer"
        >
            <img
                src={format!("https://picsum.photos/800/400?random={}", event.id)}
                alt={event.name.clone()}
                class="h-40 w-full object-cover"
            />
            <div class="p-4">
                <h3 class="text-lg font-semibold text-gray-800">{&event.name}</h3>
                <p class="text-gray-600 text-sm">{&event.artist}</p>
                <div class="flex justify-between mt-3 text-sm text-gray-500">
                    <span>{&event.location}</span>
                    <span class="text-indigo-600 font-medium">{event.display_date()}</span>
                </div>
            </div>
        </div>
    }
}
