use std::collections::HashMap;

use super::{Game, GameData};

/// Outcome of an upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// No game existed under the id; a new one was stored
    Created,
    /// The existing game's data was merged with the update
    Updated,
}

/// In-memory table of every game, keyed by id
///
/// Games are never evicted and live for the lifetime of the process.
#[derive(Debug)]
pub struct GameStore {
    /// Map of game_id to Game
    games: HashMap<String, Game>,
}

impl GameStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    /// Retrieve a game by ID
    ///
    /// # Arguments
    ///
    /// * `game_id` - The game's identifier, used verbatim
    ///
    /// # Returns
    ///
    /// Reference to the Game if found, None otherwise
    pub fn get(&self, game_id: &str) -> Option<&Game> {
        self.games.get(game_id)
    }

    /// Merge a partial update into a game, creating it if needed
    ///
    /// An existing game keeps its id and creation time; only the non-null
    /// fields of `partial` are written. An unknown id creates a new game
    /// holding `partial` as-is.
    ///
    /// # Arguments
    ///
    /// * `game_id` - The game's identifier
    /// * `partial` - Fields to write
    pub fn upsert(&mut self, game_id: &str, partial: GameData) -> Upsert {
        match self.games.get_mut(game_id) {
            Some(game) => {
                game.data_mut().merge(partial);
                Upsert::Updated
            }
            None => {
                self.games
                    .insert(game_id.to_string(), Game::new(game_id.to_string(), partial));
                Upsert::Created
            }
        }
    }

    /// Store a new game only if the id is free
    ///
    /// # Returns
    ///
    /// True if a game was created, false if one already existed
    pub fn create(&mut self, game_id: &str, data: GameData) -> bool {
        if self.games.contains_key(game_id) {
            return false;
        }

        self.games
            .insert(game_id.to_string(), Game::new(game_id.to_string(), data));
        true
    }

    /// Number of stored games
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
