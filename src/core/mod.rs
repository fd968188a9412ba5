pub mod game;
pub mod game_store;

pub use game::{Game, GameData};
pub use game_store::{GameStore, Upsert};
