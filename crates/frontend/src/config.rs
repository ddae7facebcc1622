//! Frontend configuration

/// Remote API configuration
pub struct ApiConfig;

impl ApiConfig {
    /// Base address of the morpion API
    pub const BASE_URL: &'static str = "https://morpion-api.edu.netlor.fr";
}

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Session storage key for the API key
    pub const API_KEY_STORAGE_KEY: &'static str = "morpion_api_key";
}
