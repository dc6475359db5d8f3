//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One fixed step per `World::update`
//! - Seeded RNG only, and only during scenario setup
//! - Stable pair order (ascending index)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod scenario;
pub mod transform;
pub mod world;

pub use body::Ball;
pub use collision::{overlapping, pair_mut, resolve};
pub use scenario::{BodyConfig, Scenario, ScenarioConfig};
pub use transform::{FrameTransform, FrameView, Rotation};
pub use world::{World, total_kinetic_energy, total_momentum};
