pub mod context;
pub mod error_handler;

pub use context::{use_auth, AuthAction, AuthContext, AuthProvider};
