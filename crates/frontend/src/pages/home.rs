//! Game list and creation

use crate::components::{ErrorList, LoadingSpinner};
use crate::routes::Route;
use crate::services::GameApiService;
use morpion_http::types::Game;
use morpion_http::DEFAULT_ERROR_MESSAGE;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigator = use_navigator().expect("HomePage rendered outside a Router");
    let games = use_state(|| Option::<Vec<Game>>::None);
    let errors = use_state(Vec::<String>::new);
    let is_creating = use_state(|| false);

    let service = use_memo((), |_| GameApiService::new());

    // Fetch the game list on mount
    {
        let games = games.clone();
        let errors = errors.clone();
        let service = service.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match service.list().await {
                    Ok(list) => games.set(Some(list)),
                    Err(error) => {
                        log::error!("Failed to fetch games: {error}");
                        errors.set(error.messages(DEFAULT_ERROR_MESSAGE));
                        games.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    // Create a game and jump straight to it
    let on_create = {
        let navigator = navigator.clone();
        let errors = errors.clone();
        let is_creating = is_creating.clone();
        let service = service.clone();

        Callback::from(move |_| {
            let navigator = navigator.clone();
            let errors = errors.clone();
            let is_creating = is_creating.clone();
            let service = service.clone();

            is_creating.set(true);
            errors.set(Vec::new());

            spawn_local(async move {
                match service.create().await {
                    Ok(game) => navigator.push(&Route::Game { id: game.id }),
                    Err(error) => {
                        log::error!("Failed to create game: {error}");
                        errors.set(error.messages(DEFAULT_ERROR_MESSAGE));
                    }
                }
                is_creating.set(false);
            });
        })
    };

    let list = match games.as_ref() {
        None => return html! { <LoadingSpinner text={Some("Loading games...".to_string())} /> },
        Some(list) => list,
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-gray-900">{"Your games"}</h2>
                <button
                    class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg text-sm font-medium disabled:opacity-50"
                    onclick={on_create}
                    disabled={*is_creating}
                >
                    {"New game"}
                </button>
            </div>

            <ErrorList errors={(*errors).clone()} />

            if list.is_empty() {
                <p class="text-sm text-gray-500">
                    {"No games yet. Create one, or join a friend's game from the Join page."}
                </p>
            } else {
                <ul class="bg-white rounded-lg shadow divide-y divide-gray-100 list-none m-0 p-0">
                    { for list.iter().map(|game| {
                        let opponents = game
                            .players
                            .iter()
                            .map(|p| p.name.as_str())
                            .collect::<Vec<_>>()
                            .join(" vs ");
                        html! {
                            <li>
                                <Link<Route>
                                    to={Route::Game { id: game.id.clone() }}
                                    classes="flex items-center justify-between px-4 py-3 hover:bg-gray-50"
                                >
                                    <span class="text-sm text-gray-900">
                                        { if opponents.is_empty() { game.id.clone() } else { opponents } }
                                    </span>
                                    <span class="text-xs text-gray-500">{game.status.to_string()}</span>
                                </Link<Route>>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
