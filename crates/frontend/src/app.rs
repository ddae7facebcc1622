use crate::auth::{use_auth, AuthProvider};
use crate::components::{LoadingSpinner, Nav};
use crate::pages::{GamePage, HomePage, JoinPage, LoginPage, ProfilePage};
use crate::routes::{redirect_for, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </AuthProvider>
    }
}

fn switch(route: Route) -> Html {
    html! { <Guarded {route} /> }
}

#[derive(Properties, PartialEq)]
struct GuardedProps {
    route: Route,
}

/// Applies the navigation guard before rendering the matched route
#[function_component(Guarded)]
fn guarded(props: &GuardedProps) -> Html {
    let auth = use_auth();

    // Hold rendering until the stored key has been restored
    if auth.is_loading {
        return html! { <LoadingSpinner text={Some("Loading...".to_string())} /> };
    }

    if let Some(target) = redirect_for(&props.route, auth.api_key.is_some()) {
        return html! { <Redirect<Route> to={target} /> };
    }

    match props.route.clone() {
        // `/` and an unauthenticated `/login` both end up on the login
        // screen; the guard above already bounced every other case
        Route::Root | Route::Login => html! { <LoginPage /> },
        Route::Home => html! { <Layout><HomePage /></Layout> },
        Route::Profile => html! { <Layout><ProfilePage /></Layout> },
        Route::Join => html! { <Layout><JoinPage /></Layout> },
        Route::Game { id } => html! { <Layout><GamePage {id} /></Layout> },
        Route::NotFound => html! {
            <div class="p-10 text-center text-gray-600">{"Page not found."}</div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Children,
}

/// Shared chrome for the authenticated pages
#[function_component(Layout)]
fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <Nav />
            <main class="max-w-3xl mx-auto p-6">
                {props.children.clone()}
            </main>
        </div>
    }
}
