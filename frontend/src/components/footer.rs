use chrono::{Datelike, Utc};
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="text-center text-sm text-gray-500 mt-10 pb-6">
            {format!("© {} ShowTime", year)}
        </footer>
    }
}
