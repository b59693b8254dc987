//! Simulation core for a two-player Pong match.
//!
//! Everything here is window- and GPU-agnostic: the client feeds an
//! [`InputState`] and a frame delta into [`Match::update`], then asks
//! [`Match::render`] to emit draw calls into its own [`DrawSink`].

pub mod ball;
pub mod collision;
pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod input;
pub mod paddle;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use ball::*;
pub use collision::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use input::*;
pub use paddle::*;
pub use params::*;
pub use render::*;
pub use resources::*;
