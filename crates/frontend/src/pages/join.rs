//! Join an existing game by id

use crate::components::ErrorList;
use crate::routes::Route;
use crate::services::GameApiService;
use morpion_http::DEFAULT_ERROR_MESSAGE;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(JoinPage)]
pub fn join_page() -> Html {
    let navigator = use_navigator().expect("JoinPage rendered outside a Router");
    let game_id = use_state(String::new);
    let errors = use_state(Vec::<String>::new);
    let is_joining = use_state(|| false);

    let service = use_memo((), |_| GameApiService::new());

    let on_id_input = {
        let game_id = game_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            game_id.set(input.value());
        })
    };

    let on_join = {
        let navigator = navigator.clone();
        let game_id = game_id.clone();
        let errors = errors.clone();
        let is_joining = is_joining.clone();
        let service = service.clone();

        Callback::from(move |_| {
            let id_value = (*game_id).clone();
            if id_value.is_empty() {
                return;
            }

            let navigator = navigator.clone();
            let errors = errors.clone();
            let is_joining = is_joining.clone();
            let service = service.clone();

            is_joining.set(true);
            errors.set(Vec::new());

            spawn_local(async move {
                match service.join(&id_value).await {
                    Ok(game) => navigator.push(&Route::Game { id: game.id }),
                    Err(error) => {
                        log::error!("Failed to join game {id_value}: {error}");
                        errors.set(error.messages(DEFAULT_ERROR_MESSAGE));
                    }
                }
                is_joining.set(false);
            });
        })
    };

    html! {
        <div class="max-w-md space-y-4">
            <h2 class="text-lg font-semibold text-gray-900">{"Join a game"}</h2>
            <p class="text-sm text-gray-500">
                {"Paste the id your opponent shared with you."}
            </p>

            <ErrorList errors={(*errors).clone()} />

            <input
                type="text"
                class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-emerald-500"
                placeholder="Game id"
                value={(*game_id).clone()}
                oninput={on_id_input}
            />
            <button
                class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg text-sm font-medium disabled:opacity-50"
                onclick={on_join}
                disabled={(*game_id).is_empty() || *is_joining}
            >
                {"Join"}
            </button>
        </div>
    }
}
