use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50 gap-4">
            <h1 class="text-2xl font-bold text-gray-800">{"404 - Page Not Found"}</h1>
            <p class="text-gray-600">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Dashboard} classes={classes!("text-indigo-600", "hover:underline")}>
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
