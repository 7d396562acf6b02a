//! Scenes: several named typewriters run side by side on one host.

pub mod builder;
pub mod model;
pub mod stage;

pub use builder::SceneBuilder;
pub use model::{LineSpec, Scene};
pub use stage::Stage;
