use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::{error::Error, fmt};

/// Uniform range for each of a starting plant's energy stats.
pub const INITIAL_PLANT_STAT_RANGE: RangeInclusive<i32> = 1..=10;
/// Uniform range for each of a starting animal's energy stats.
pub const INITIAL_ANIMAL_STAT_RANGE: RangeInclusive<i32> = 10..=100;
/// Every founder starts with equal gene-walk weights.
pub const INITIAL_GENE_FACTOR: i32 = 1;
/// Founder herbivores eat at most this much plant energy per tick.
pub const INITIAL_FEAST_SIZE: i32 = 1;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorldConfig {
    /// Deterministic seed for reproducible runs.
    pub seed: u64,
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub columns: usize,
    /// Nominal block height for the partitioned traversal.
    pub block_rows: usize,
    /// Nominal block width for the partitioned traversal.
    pub block_columns: usize,
    /// Plants placed at initialization (re-rolled onto plant-free cells).
    pub initial_plants: usize,
    /// Herbivores placed at initialization (re-rolled onto animal-free cells).
    pub initial_herbivores: usize,
    /// Carnivores placed at initialization (re-rolled onto animal-free cells).
    pub initial_carnivores: usize,
    /// Random positions cleared of plants and herbivores at the end of each tick.
    pub accidents_per_tick: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            rows: 128,
            columns: 128,
            block_rows: 128,
            block_columns: 128,
            initial_plants: 128 * 128 / 4,
            initial_herbivores: 1000,
            initial_carnivores: 500,
            accidents_per_tick: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDimension,
    DimensionTooLarge { max: usize, actual: usize },
    ZeroBlockDimension,
    TooManyPlants { cells: usize, requested: usize },
    TooManyAnimals { cells: usize, requested: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDimension => write!(f, "rows and columns must be positive"),
            ConfigError::DimensionTooLarge { max, actual } => {
                write!(f, "grid dimension ({actual}) exceeds supported maximum ({max})")
            }
            ConfigError::ZeroBlockDimension => {
                write!(f, "block dimensions must be positive")
            }
            ConfigError::TooManyPlants { cells, requested } => {
                write!(f, "initial plants ({requested}) exceed cell count ({cells})")
            }
            ConfigError::TooManyAnimals { cells, requested } => write!(
                f,
                "initial herbivores + carnivores ({requested}) exceed cell count ({cells})"
            ),
        }
    }
}

impl Error for ConfigError {}

impl WorldConfig {
    pub const MAX_DIM: usize = 4096;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        for actual in [self.rows, self.columns] {
            if actual > Self::MAX_DIM {
                return Err(ConfigError::DimensionTooLarge {
                    max: Self::MAX_DIM,
                    actual,
                });
            }
        }
        if self.block_rows == 0 || self.block_columns == 0 {
            return Err(ConfigError::ZeroBlockDimension);
        }
        let cells = self.rows * self.columns;
        if self.initial_plants > cells {
            return Err(ConfigError::TooManyPlants {
                cells,
                requested: self.initial_plants,
            });
        }
        let animals = self.initial_herbivores + self.initial_carnivores;
        if animals > cells {
            return Err(ConfigError::TooManyAnimals {
                cells,
                requested: animals,
            });
        }
        Ok(())
    }
}
