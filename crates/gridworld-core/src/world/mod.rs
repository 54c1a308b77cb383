pub mod stats;
mod update;

pub use stats::*;

use crate::block::BlockMap;
use crate::cell::{Carnivore, Cell, Genes, Herbivore, Plant};
use crate::config::{
    ConfigError, WorldConfig, INITIAL_ANIMAL_STAT_RANGE, INITIAL_FEAST_SIZE, INITIAL_GENE_FACTOR,
    INITIAL_PLANT_STAT_RANGE,
};
use crate::grid::Grid;
use crate::position::Position;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::ops::RangeInclusive;

/// The simulation state: all cells, the single shared RNG stream, and
/// per-tick bookkeeping. Exclusively owned; nothing here is thread-safe
/// with respect to a concurrently running renderer, so render between ticks.
pub struct World {
    pub(crate) config: WorldConfig,
    pub(crate) cells: BlockMap<Cell>,
    pub(crate) rng: ChaCha12Rng,
    pub(crate) tick_index: usize,
    pub(crate) births_last_tick: usize,
    pub(crate) deaths_last_tick: usize,
    pub(crate) total_births: usize,
    pub(crate) total_deaths: usize,
}

impl World {
    pub fn new(config: WorldConfig) -> Self {
        Self::try_new(config).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let cells = BlockMap::new(
            config.rows,
            config.columns,
            config.block_rows,
            config.block_columns,
        );
        let rng = ChaCha12Rng::seed_from_u64(config.seed);
        let mut world = Self {
            config,
            cells,
            rng,
            tick_index: 0,
            births_last_tick: 0,
            deaths_last_tick: 0,
            total_births: 0,
            total_deaths: 0,
        };
        world.populate();
        Ok(world)
    }

    /// Seed the founder populations at random free positions. Plants re-roll
    /// until the cell has no plant; animals re-roll until the cell has
    /// neither animal kind (both loops terminate because `validate` caps the
    /// populations at the cell count).
    fn populate(&mut self) {
        for _ in 0..self.config.initial_plants {
            let pos = self.random_free_position(|cell| !cell.has_plant());
            let plant = Plant {
                energy: self.rng.random_range(INITIAL_PLANT_STAT_RANGE),
                genes: Self::founder_genes(&mut self.rng, INITIAL_PLANT_STAT_RANGE),
            };
            self.cells.cell_mut(pos).set_plant(plant);
        }
        for _ in 0..self.config.initial_herbivores {
            let pos = self.random_free_position(|cell| !cell.has_animal());
            let herbivore = Herbivore {
                energy: self.rng.random_range(INITIAL_ANIMAL_STAT_RANGE),
                genes: Self::founder_genes(&mut self.rng, INITIAL_ANIMAL_STAT_RANGE),
                feast_size: INITIAL_FEAST_SIZE,
            };
            self.cells.cell_mut(pos).set_herbivore(herbivore);
        }
        for _ in 0..self.config.initial_carnivores {
            let pos = self.random_free_position(|cell| !cell.has_animal());
            let carnivore = Carnivore {
                energy: self.rng.random_range(INITIAL_ANIMAL_STAT_RANGE),
                genes: Self::founder_genes(&mut self.rng, INITIAL_ANIMAL_STAT_RANGE),
            };
            self.cells.cell_mut(pos).set_carnivore(carnivore);
        }
    }

    fn founder_genes(rng: &mut ChaCha12Rng, stat_range: RangeInclusive<i32>) -> Genes {
        Genes {
            reproduction_energy: rng.random_range(stat_range.clone()),
            offspring_energy: rng.random_range(stat_range),
            decrement_factor: INITIAL_GENE_FACTOR,
            stabilize_factor: INITIAL_GENE_FACTOR,
            increment_factor: INITIAL_GENE_FACTOR,
        }
    }

    fn random_free_position(&mut self, free: impl Fn(&Cell) -> bool) -> Position {
        loop {
            let pos = self.random_position();
            if free(self.cells.cell(pos)) {
                return pos;
            }
        }
    }

    /// Uniform grid position; row drawn before column.
    pub(crate) fn random_position(&mut self) -> Position {
        Position::new(
            self.rng.random_range(0..self.config.rows as i32),
            self.rng.random_range(0..self.config.columns as i32),
        )
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn columns(&self) -> usize {
        self.config.columns
    }

    pub fn tick_index(&self) -> usize {
        self.tick_index
    }

    pub fn cell(&self, pos: Position) -> &Cell {
        self.cells.cell(pos)
    }

    #[cfg(test)]
    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        self.cells.cell_mut(pos)
    }

    /// Read-only copy of the grid for the render/statistics collaborator.
    pub fn snapshot(&self) -> Grid<Cell> {
        let mut grid = Grid::new(self.config.rows, self.config.columns);
        for row in 0..self.config.rows {
            for col in 0..self.config.columns {
                let pos = Position::new(row as i32, col as i32);
                *grid.get_mut(row, col) = *self.cells.cell(pos);
            }
        }
        grid
    }
}
