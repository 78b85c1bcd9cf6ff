pub use coord::Coord;
mod coord;

pub use world::{Cell, World, ALIVE_MARKER, DEAD_MARKER};
pub mod world;

pub use error::{Error, Result};
mod error;

pub use presets::Preset;
pub mod presets;

pub use config::{Config, Source};
pub mod config;

pub use sim::{Sim, SimHandle, Status};
pub mod sim;

pub use view::View;
pub mod view;
