//! Single game view
//!
//! The server owns all rules: this page renders the returned state verbatim
//! and posts chosen positions.

use crate::components::{ErrorList, LoadingSpinner};
use crate::services::GameApiService;
use morpion_http::types::{Game, GameStatus};
use morpion_http::DEFAULT_ERROR_MESSAGE;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GamePageProps {
    pub id: String,
}

#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let game = use_state(|| Option::<Game>::None);
    let errors = use_state(Vec::<String>::new);
    let is_playing = use_state(|| false);

    let service = use_memo((), |_| GameApiService::new());

    // Fetch the game on mount and whenever the id changes
    {
        let game = game.clone();
        let errors = errors.clone();
        let service = service.clone();

        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            game.set(None);
            spawn_local(async move {
                match service.get(&id).await {
                    Ok(state) => game.set(Some(state)),
                    Err(error) => {
                        log::error!("Failed to fetch game {id}: {error}");
                        errors.set(error.messages(DEFAULT_ERROR_MESSAGE));
                    }
                }
            });
            || ()
        });
    }

    let on_refresh = {
        let id = props.id.clone();
        let game = game.clone();
        let errors = errors.clone();
        let service = service.clone();

        Callback::from(move |_| {
            let id = id.clone();
            let game = game.clone();
            let errors = errors.clone();
            let service = service.clone();

            errors.set(Vec::new());
            spawn_local(async move {
                match service.get(&id).await {
                    Ok(state) => game.set(Some(state)),
                    Err(error) => {
                        log::error!("Failed to refresh game {id}: {error}");
                        errors.set(error.messages(DEFAULT_ERROR_MESSAGE));
                    }
                }
            });
        })
    };

    // Post a position; the response replaces the displayed state
    let on_play = {
        let id = props.id.clone();
        let game = game.clone();
        let errors = errors.clone();
        let is_playing = is_playing.clone();
        let service = service.clone();

        Callback::from(move |position: usize| {
            let id = id.clone();
            let game = game.clone();
            let errors = errors.clone();
            let is_playing = is_playing.clone();
            let service = service.clone();

            is_playing.set(true);
            errors.set(Vec::new());

            spawn_local(async move {
                match service.play(&id, position).await {
                    Ok(state) => game.set(Some(state)),
                    Err(error) => {
                        log::error!("Move rejected on game {id}: {error}");
                        errors.set(error.messages(DEFAULT_ERROR_MESSAGE));
                    }
                }
                is_playing.set(false);
            });
        })
    };

    let state = match game.as_ref() {
        Some(state) => state,
        None if errors.is_empty() => {
            return html! { <LoadingSpinner text={Some("Loading game...".to_string())} /> };
        }
        None => return html! { <ErrorList errors={(*errors).clone()} /> },
    };

    let turn = state
        .current_player_id
        .as_ref()
        .and_then(|id| state.players.iter().find(|p| &p.id == id))
        .map(|p| p.name.clone());
    let winner = state
        .winner_id
        .as_ref()
        .and_then(|id| state.players.iter().find(|p| &p.id == id))
        .map(|p| p.name.clone());

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-lg font-semibold text-gray-900">{"Game "}{&state.id}</h2>
                    <p class="text-sm text-gray-500">
                        { match (&winner, &turn) {
                            (Some(winner), _) => format!("{winner} won"),
                            (None, Some(turn)) if state.status == GameStatus::InProgress =>
                                format!("{turn} to play"),
                            _ => state.status.to_string(),
                        }}
                    </p>
                </div>
                <button
                    class="px-4 py-2 bg-gray-100 hover:bg-gray-200 text-gray-700 rounded-lg text-sm font-medium"
                    onclick={on_refresh}
                >
                    {"Refresh"}
                </button>
            </div>

            <ErrorList errors={(*errors).clone()} />

            <div class="grid grid-cols-3 gap-2 w-56">
                { for (0..9).map(|position| {
                    let mark = state.cells.get(position).cloned().flatten();
                    let taken = mark.is_some();
                    let playable =
                        state.status == GameStatus::InProgress && !taken && !*is_playing;
                    let onclick = on_play.reform(move |_| position);
                    html! {
                        <button
                            class="h-16 bg-white rounded-lg shadow text-2xl font-bold text-gray-900 disabled:text-gray-400"
                            disabled={!playable}
                            {onclick}
                        >
                            { mark.unwrap_or_default() }
                        </button>
                    }
                })}
            </div>

            if state.status == GameStatus::Waiting {
                <p class="text-sm text-gray-500">
                    {"Share this game id with your opponent so they can join: "}
                    <span class="font-mono">{&state.id}</span>
                </p>
            }
        </div>
    }
}
