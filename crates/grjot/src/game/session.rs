//! The shared game session: state machine position and run clock.
//!
//! Exactly one [`Session`] exists per app, owned by [`App`](crate::app::App)
//! and lent to every hook through [`Cx`](crate::context::Cx). The
//! [`GameManager`](super::GameManager) drives it; the UI reads it.

/// Where the game is in its MainMenu → Game → GameOver → Game cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    MainMenu,
    Game,
    GameOver,
}

#[derive(Debug, Default)]
pub struct Session {
    pub state: GameState,
    /// Seconds survived in the current (or just-ended) run. Accumulates only
    /// while in [`GameState::Game`].
    pub time_alive: f32,
}
