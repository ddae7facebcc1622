//! Top navigation bar for authenticated pages

use crate::auth::{use_auth, AuthAction};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_auth();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| {
            auth.dispatch(AuthAction::Logout);
        })
    };

    html! {
        <header class="flex items-center justify-between px-6 py-4 bg-white border-b border-gray-200">
            <div class="flex items-center gap-6">
                <h1 class="text-xl font-bold text-gray-900">{"Morpion"}</h1>
                <nav class="flex gap-4 text-sm text-gray-600">
                    <Link<Route> to={Route::Home} classes="hover:text-gray-900">{"Games"}</Link<Route>>
                    <Link<Route> to={Route::Join} classes="hover:text-gray-900">{"Join"}</Link<Route>>
                    <Link<Route> to={Route::Profile} classes="hover:text-gray-900">{"Profile"}</Link<Route>>
                </nav>
            </div>
            <button
                onclick={on_logout}
                class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-lg"
            >
                {"Logout"}
            </button>
        </header>
    }
}
