use super::World;
use crate::position::{wrap, Position, PositionOffset};
use rand::Rng;

/// Moore neighborhood, row-major, center excluded. Indexed by one uniform
/// draw in 0..8.
const NEIGHBOR_OFFSETS: [PositionOffset; 8] = [
    PositionOffset::new(-1, -1),
    PositionOffset::new(-1, 0),
    PositionOffset::new(-1, 1),
    PositionOffset::new(0, -1),
    PositionOffset::new(0, 1),
    PositionOffset::new(1, -1),
    PositionOffset::new(1, 0),
    PositionOffset::new(1, 1),
];

/// How a cell resolves its random neighbor.
///
/// `Direct` is the hot path for cells strictly inside a block: the whole
/// neighborhood lies in the same block, so no toroidal check is needed.
/// `Wrapping` folds each coordinate through the world edge once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NeighborMode {
    Direct,
    Wrapping,
}

impl World {
    /// Advance the simulation one tick: one block-partitioned pass applying
    /// the organism rules to every cell, then the accident pass.
    ///
    /// Cells mutate in place as the pass visits them, so a later cell sees
    /// the effects of earlier cells in the same tick. Scan order is part of
    /// the behavioral contract; there is no double buffering.
    pub fn update(&mut self) {
        self.tick_index += 1;
        self.births_last_tick = 0;
        self.deaths_last_tick = 0;

        for block_row in 0..self.cells.block_rows() {
            for block_col in 0..self.cells.block_cols() {
                self.update_block(block_row, block_col);
            }
        }

        self.apply_accidents();
    }

    /// Visit one block: top peripheral row, then each middle row as left
    /// peripheral cell / interior run / right peripheral cell, then the
    /// bottom peripheral row. Interior cells skip the wraparound resolver.
    fn update_block(&mut self, block_row: usize, block_col: usize) {
        let origin = self.cells.block_origin(block_row, block_col);
        let (rows, cols) = {
            let block = self.cells.block(block_row, block_col);
            (block.rows(), block.cols())
        };
        let global = |row: usize, col: usize| {
            Position::new(origin.row + row as i32, origin.col + col as i32)
        };

        for col in 0..cols {
            self.update_cell(global(0, col), NeighborMode::Wrapping);
        }
        for row in 1..rows.saturating_sub(1) {
            self.update_cell(global(row, 0), NeighborMode::Wrapping);
            for col in 1..cols.saturating_sub(1) {
                self.update_cell(global(row, col), NeighborMode::Direct);
            }
            if cols > 1 {
                self.update_cell(global(row, cols - 1), NeighborMode::Wrapping);
            }
        }
        if rows > 1 {
            for col in 0..cols {
                self.update_cell(global(rows - 1, col), NeighborMode::Wrapping);
            }
        }
    }

    /// Run every organism currently in the cell, re-checking presence in
    /// sequence: a herbivore that just moved away must not be updated here
    /// a second time.
    fn update_cell(&mut self, pos: Position, mode: NeighborMode) {
        if self.cells.cell(pos).has_plant() {
            self.update_plant(pos, mode);
        }
        if self.cells.cell(pos).has_herbivore() {
            self.update_herbivore(pos, mode);
        }
        if self.cells.cell(pos).has_carnivore() {
            self.update_carnivore(pos, mode);
        }
    }

    fn update_plant(&mut self, pos: Position, mode: NeighborMode) {
        let Some(mut plant) = self.cells.cell(pos).plant().copied() else {
            return;
        };

        if plant.energy >= plant.genes.reproduction_energy {
            let neighbor = self.random_neighbor(pos, mode);
            if !self.cells.cell(neighbor).has_plant() {
                let child = plant.reproduce(&mut self.rng);
                self.cells.cell_mut(neighbor).set_plant(child);
                self.record_birth();
            }
        }

        // Grazed/trampled under an animal, photosynthesis otherwise.
        if self.cells.cell(pos).has_animal() {
            plant.energy -= 1;
        } else {
            plant.energy += 1;
        }
        if plant.energy <= 0 {
            self.cells.cell_mut(pos).remove_plant();
            self.record_death();
        } else {
            self.cells.cell_mut(pos).set_plant(plant);
        }
    }

    fn update_herbivore(&mut self, pos: Position, mode: NeighborMode) {
        let Some(mut herbivore) = self.cells.cell(pos).herbivore().copied() else {
            return;
        };
        let mut current = pos;
        let neighbor = self.random_neighbor(pos, mode);

        if herbivore.energy >= herbivore.genes.reproduction_energy {
            if !self.cells.cell(neighbor).has_animal() {
                let child = herbivore.reproduce(&mut self.rng);
                self.cells.cell_mut(neighbor).set_herbivore(child);
                self.record_birth();
            }
        } else {
            if !self.cells.cell(neighbor).has_animal() {
                self.cells.cell_mut(current).remove_herbivore();
                self.cells.cell_mut(neighbor).set_herbivore(herbivore);
                current = neighbor;
            }
            let mut plant_eaten = false;
            let cell = self.cells.cell_mut(current);
            if let Some(plant) = cell.plant_mut() {
                let feast = herbivore.feast_size.min(plant.energy);
                herbivore.energy += feast * 2 / 3;
                plant.energy -= feast;
                if plant.energy == 0 {
                    cell.remove_plant();
                    plant_eaten = true;
                }
            }
            if plant_eaten {
                self.record_death();
            }
        }

        // Upkeep is paid wherever the herbivore now resides.
        herbivore.energy -= 1;
        if herbivore.energy <= 0 {
            self.cells.cell_mut(current).remove_herbivore();
            self.record_death();
        } else {
            self.cells.cell_mut(current).set_herbivore(herbivore);
        }
    }

    fn update_carnivore(&mut self, pos: Position, mode: NeighborMode) {
        let Some(mut carnivore) = self.cells.cell(pos).carnivore().copied() else {
            return;
        };
        let mut current = pos;
        let mut neighbor = self.random_neighbor(pos, mode);

        let ready = carnivore.energy >= carnivore.genes.reproduction_energy;
        if ready && !self.cells.cell(neighbor).has_animal() {
            let child = carnivore.reproduce(&mut self.rng);
            self.cells.cell_mut(neighbor).set_carnivore(child);
            self.record_birth();
        } else {
            // One retry if the first draw found no prey; not a search.
            if !self.cells.cell(neighbor).has_herbivore() {
                neighbor = self.random_neighbor(pos, mode);
            }
            if !self.cells.cell(neighbor).has_carnivore() {
                if let Some(prey) = self.cells.cell(neighbor).herbivore().copied() {
                    carnivore.energy += prey.energy * 2 / 3;
                    self.cells.cell_mut(neighbor).remove_herbivore();
                    self.record_death();
                }
                self.cells.cell_mut(current).remove_carnivore();
                self.cells.cell_mut(neighbor).set_carnivore(carnivore);
                current = neighbor;
            }
        }

        carnivore.energy -= 1;
        if carnivore.energy <= 0 {
            self.cells.cell_mut(current).remove_carnivore();
            self.record_death();
        } else {
            self.cells.cell_mut(current).set_carnivore(carnivore);
        }
    }

    /// End-of-tick cull: a handful of uniform positions lose their plant and
    /// herbivore unconditionally. Carnivores are never culled here.
    fn apply_accidents(&mut self) {
        for _ in 0..self.config.accidents_per_tick {
            let pos = self.random_position();
            let cell = self.cells.cell_mut(pos);
            let mut casualties = 0;
            if cell.has_plant() {
                cell.remove_plant();
                casualties += 1;
            }
            if cell.has_herbivore() {
                cell.remove_herbivore();
                casualties += 1;
            }
            for _ in 0..casualties {
                self.record_death();
            }
        }
    }

    fn random_neighbor(&mut self, pos: Position, mode: NeighborMode) -> Position {
        let offset = NEIGHBOR_OFFSETS[self.rng.random_range(0..NEIGHBOR_OFFSETS.len())];
        let candidate = pos + offset;
        match mode {
            NeighborMode::Direct => candidate,
            NeighborMode::Wrapping => Position::new(
                wrap(candidate.row, self.config.rows as i32),
                wrap(candidate.col, self.config.columns as i32),
            ),
        }
    }

    fn record_birth(&mut self) {
        self.births_last_tick += 1;
        self.total_births += 1;
    }

    fn record_death(&mut self) {
        self.deaths_last_tick += 1;
        self.total_deaths += 1;
    }
}
