//! Client configuration and initialization

use crate::client_wrapper::WrappedAuthClient;
use crate::config::ApiConfig;
use morpion_http::{ClientError, PublicMorpionClient, TypedClientBuilder};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicMorpionClient>>> = Lazy::new(|| Mutex::new(None));
static AUTH_CLIENT: Lazy<Mutex<Option<WrappedAuthClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the public client instance (for unauthenticated endpoints)
pub fn create_public_client() -> Result<PublicMorpionClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = TypedClientBuilder::new()
        .base_url(ApiConfig::BASE_URL)
        .build_public()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Get the authenticated client instance (returns None if not authenticated)
pub fn create_authenticated_client() -> Result<Option<WrappedAuthClient>, ClientError> {
    let client_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");
    Ok(client_lock.clone())
}

/// Get the authenticated client, failing when no API key has been applied
pub fn require_authenticated_client() -> Result<WrappedAuthClient, ClientError> {
    create_authenticated_client()?
        .ok_or_else(|| ClientError::Configuration("no API key applied".into()))
}

/// Update the clients with a session API key
pub fn set_api_key(api_key: Option<&str>) -> Result<(), ClientError> {
    let mut auth_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");

    if let Some(api_key) = api_key {
        let auth_client = TypedClientBuilder::new()
            .base_url(ApiConfig::BASE_URL)
            .build_authenticated(api_key)?;
        *auth_lock = Some(WrappedAuthClient::new(auth_client));
    } else {
        *auth_lock = None;
    }

    Ok(())
}
