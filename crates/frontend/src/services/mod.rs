pub mod game;
pub mod player;

pub use game::GameApiService;
pub use player::PlayerApiService;
