//! ECS components for entities.
//!
//! Coins are not entities; they live in
//! [`CoinSet`](crate::resources::coinset::CoinSet). Entities make up the
//! decorative backdrop.
//!
//! Submodules overview:
//! - [`decoration`] – primitive shapes and time-driven animation drivers
//! - [`mapposition`] – world-space position of an entity
//! - [`persistent`] – marker for entities that survive scene teardown
//! - [`tint`] – base colour of a primitive

pub mod decoration;
pub mod mapposition;
pub mod persistent;
pub mod tint;
