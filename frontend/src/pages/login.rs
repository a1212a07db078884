use crate::api::auth;
use crate::session::{LocalStorageSession, SessionProvider};
use crate::Route;
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    // Skip the form when a session already exists
    {
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            if LocalStorageSession.token().is_some() {
                debug!("Session already present, redirecting to dashboard");
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Dashboard);
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email.to_string();
            let password = password.to_string();

            if email.is_empty() || password.is_empty() {
                error.set("Please enter both email and password".to_string());
                return;
            }

            loading.set(true);
            error.set(String::new());

            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let stored = match auth::login(&email, &password).await {
                    Ok(response) => LocalStorageSession::store(&response.token, &response.user.to_string()),
                    Err(e) => Err(e),
                };
                loading.set(false);
                match stored {
                    Ok(()) => {
                        debug!("Login successful, redirecting to dashboard");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        error!("Login failed: {}", e);
                        error.set(e.to_string());
                    }
                }
            });
        })
    };

    let onemailchange = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-indigo-50 via-white to-blue-100 py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                    {"ShowTime"}
                </h2>
                <form class="mt-8 space-y-6" onsubmit={onsubmit}>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="email" class="sr-only">{"Email address"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required=true
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-t-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm"
                                placeholder="Email address"
                                onchange={onemailchange}
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">{"Password"}</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required=true
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-b-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm"
                                placeholder="Password"
                                onchange={onpasswordchange}
                            />
                        </div>
                    </div>

                    if !error.is_empty() {
                        <div class="text-red-500 text-sm text-center">
                            {error.to_string()}
                        </div>
                    }

                    <button
                        type="submit"
                        disabled={*loading}
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50"
                    >
                        {if *loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
