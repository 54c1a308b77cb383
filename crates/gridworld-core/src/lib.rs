//! Cellular-grid ecological simulation engine.
//!
//! A 2-D toroidal grid of cells, each optionally hosting a plant and one
//! animal (herbivore or carnivore), advanced one tick at a time under local
//! rules: growth, foraging, predation, reproduction with gene mutation, and
//! random accidents. The grid is partitioned into blocks so that most cells
//! take a wraparound-free fast path during the per-tick traversal.
//!
//! The engine is single-threaded and deterministic: all randomness comes
//! from one seeded `ChaCha12Rng` stream, so a fixed seed replays the exact
//! same run. Rendering is a collaborator's concern; it consumes the
//! read-only [`world::World::snapshot`] between ticks.

pub mod block;
pub mod cell;
pub mod config;
pub mod grid;
pub mod position;
pub mod world;

pub use cell::{Animal, Carnivore, Cell, Genes, Herbivore, Plant};
pub use config::{ConfigError, WorldConfig};
pub use grid::Grid;
pub use position::{Position, PositionOffset};
pub use world::{KindStats, TickStats, World};
