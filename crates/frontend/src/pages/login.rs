//! Login screen: register a new player or reuse an existing API key

use crate::auth::{use_auth, AuthAction};
use crate::components::ErrorList;
use crate::services::PlayerApiService;
use morpion_http::DEFAULT_ERROR_MESSAGE;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let name = use_state(String::new);
    let api_key = use_state(String::new);
    let errors = use_state(Vec::<String>::new);
    let is_submitting = use_state(|| false);

    let service = use_memo((), |_| PlayerApiService::new());

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_key_input = {
        let api_key = api_key.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            api_key.set(input.value());
        })
    };

    // Register a new player, then log in with the returned key
    let on_register = {
        let auth = auth.clone();
        let name = name.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let service = service.clone();

        Callback::from(move |_| {
            let name_value = (*name).clone();
            if name_value.is_empty() {
                return;
            }

            let auth = auth.clone();
            let errors = errors.clone();
            let is_submitting = is_submitting.clone();
            let service = service.clone();

            is_submitting.set(true);
            errors.set(Vec::new());

            spawn_local(async move {
                match service.register(name_value).await {
                    Ok(player) => match player.api_key {
                        Some(key) => auth.dispatch(AuthAction::Login(key)),
                        None => {
                            log::error!("Registration response carried no API key");
                            errors.set(vec![DEFAULT_ERROR_MESSAGE.to_string()]);
                        }
                    },
                    Err(error) => {
                        log::error!("Registration failed: {error}");
                        errors.set(error.messages(DEFAULT_ERROR_MESSAGE));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    // Validate a pasted key before adopting it as the session credential
    let on_use_key = {
        let auth = auth.clone();
        let api_key = api_key.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let service = service.clone();

        Callback::from(move |_| {
            let key_value = (*api_key).clone();
            if key_value.is_empty() {
                return;
            }

            let auth = auth.clone();
            let errors = errors.clone();
            let is_submitting = is_submitting.clone();
            let service = service.clone();

            is_submitting.set(true);
            errors.set(Vec::new());

            spawn_local(async move {
                match service.verify_key(&key_value).await {
                    Ok(_) => auth.dispatch(AuthAction::Login(key_value)),
                    Err(error) => {
                        log::error!("API key check failed: {error}");
                        errors.set(error.messages(DEFAULT_ERROR_MESSAGE));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-xl shadow p-8">
                <h1 class="text-2xl font-bold text-gray-900 text-center mb-1">{"Morpion"}</h1>
                <p class="text-sm text-gray-500 text-center mb-6">{"Online tic-tac-toe"}</p>

                <ErrorList errors={(*errors).clone()} />

                <div class="space-y-3">
                    <label class="block text-sm font-medium text-gray-700">{"New player"}</label>
                    <input
                        type="text"
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-emerald-500"
                        placeholder="Your name"
                        value={(*name).clone()}
                        oninput={on_name_input}
                    />
                    <button
                        class="w-full px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg font-medium disabled:opacity-50"
                        onclick={on_register}
                        disabled={(*name).is_empty() || *is_submitting}
                    >
                        {"Register"}
                    </button>
                </div>

                <div class="flex items-center gap-3 my-6 text-xs text-gray-400">
                    <div class="flex-1 border-t border-gray-200"></div>
                    {"or"}
                    <div class="flex-1 border-t border-gray-200"></div>
                </div>

                <div class="space-y-3">
                    <label class="block text-sm font-medium text-gray-700">{"Existing API key"}</label>
                    <input
                        type="password"
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-emerald-500"
                        placeholder="Paste your key"
                        value={(*api_key).clone()}
                        oninput={on_key_input}
                    />
                    <button
                        class="w-full px-4 py-2 bg-gray-100 hover:bg-gray-200 text-gray-700 rounded-lg font-medium disabled:opacity-50"
                        onclick={on_use_key}
                        disabled={(*api_key).is_empty() || *is_submitting}
                    >
                        {"Continue"}
                    </button>
                </div>
            </div>
        </div>
    }
}
