//! Global authentication context and provider

use crate::client::set_api_key;
use crate::config::AuthConfig;
use std::rc::Rc;
use web_sys::Storage;
use yew::prelude::*;

/// Authentication context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    /// Session credential, present when logged in
    pub api_key: Option<String>,
    /// True until the stored key has been considered on startup
    pub is_loading: bool,
}

/// Authentication context actions
pub enum AuthAction {
    Login(String),
    Logout,
    SetLoading(bool),
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            api_key: None,
            is_loading: true, // Start with loading to check sessionStorage
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Login(api_key) => {
                // Apply the key to the API client
                let _ = set_api_key(Some(&api_key));

                // Save to sessionStorage
                if let Some(storage) = get_session_storage() {
                    let _ = storage.set_item(AuthConfig::API_KEY_STORAGE_KEY, &api_key);
                }

                Rc::new(Self {
                    api_key: Some(api_key),
                    is_loading: false,
                })
            }
            AuthAction::Logout => {
                // Clear the credential from the client and sessionStorage
                let _ = set_api_key(None);

                if let Some(storage) = get_session_storage() {
                    let _ = storage.remove_item(AuthConfig::API_KEY_STORAGE_KEY);
                }

                Rc::new(Self {
                    api_key: None,
                    is_loading: false,
                })
            }
            AuthAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
        }
    }
}

/// Get sessionStorage
fn get_session_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Log out when the server rejects the stored key
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            let auth_state = auth_state.clone();
            super::error_handler::set_auth_error_callback(Rc::new(move || {
                auth_state.dispatch(AuthAction::Logout);
            }));

            // Cleanup on unmount
            move || {
                super::error_handler::clear_auth_error_callback();
            }
        });
    }

    // Restore the stored key on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            if let Some(storage) = get_session_storage() {
                if let Ok(Some(api_key)) = storage.get_item(AuthConfig::API_KEY_STORAGE_KEY) {
                    if !api_key.is_empty() {
                        auth_state.dispatch(AuthAction::Login(api_key));
                        return;
                    }
                }
            }
            // No stored credential
            auth_state.dispatch(AuthAction::SetLoading(false));
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}
