pub mod error_list;
pub mod nav;
pub mod spinner;

pub use error_list::ErrorList;
pub use nav::Nav;
pub use spinner::LoadingSpinner;
