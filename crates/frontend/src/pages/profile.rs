//! Current player profile

use crate::components::{ErrorList, LoadingSpinner};
use crate::services::PlayerApiService;
use morpion_http::types::Player;
use morpion_http::DEFAULT_ERROR_MESSAGE;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let player = use_state(|| Option::<Player>::None);
    let errors = use_state(Vec::<String>::new);

    let service = use_memo((), |_| PlayerApiService::new());

    {
        let player = player.clone();
        let errors = errors.clone();
        let service = service.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match service.profile().await {
                    Ok(profile) => player.set(Some(profile)),
                    Err(error) => {
                        log::error!("Failed to fetch profile: {error}");
                        errors.set(error.messages(DEFAULT_ERROR_MESSAGE));
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="max-w-md space-y-4">
            <h2 class="text-lg font-semibold text-gray-900">{"Profile"}</h2>

            <ErrorList errors={(*errors).clone()} />

            { match player.as_ref() {
                Some(player) => html! {
                    <div class="bg-white rounded-lg shadow p-6 space-y-2">
                        <p class="text-sm text-gray-500">{"Name"}</p>
                        <p class="text-gray-900 font-medium">{&player.name}</p>
                        <p class="text-sm text-gray-500 mt-4">{"Player id"}</p>
                        <p class="text-gray-900 font-mono text-sm">{&player.id}</p>
                    </div>
                },
                None if errors.is_empty() => html! {
                    <LoadingSpinner text={Some("Loading profile...".to_string())} />
                },
                None => html! {},
            }}
        </div>
    }
}
