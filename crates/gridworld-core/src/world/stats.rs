use super::World;
use crate::cell::{Carnivore, Herbivore, Plant};
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Live-population summary for one organism kind: count plus the median of
/// each heritable field. Medians are `None` when no instance is alive.
///
/// The median is the upper-middle element of the ascending sort; even counts
/// get no special handling.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KindStats {
    pub count: usize,
    pub energy: Option<i32>,
    pub reproduction_energy: Option<i32>,
    pub offspring_energy: Option<i32>,
    pub decrement_factor: Option<i32>,
    pub stabilize_factor: Option<i32>,
    pub increment_factor: Option<i32>,
    /// Herbivores only; `None` for other kinds.
    pub feast_size: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TickStats {
    pub tick: usize,
    pub plants: KindStats,
    pub herbivores: KindStats,
    pub carnivores: KindStats,
    pub births_last_tick: usize,
    pub deaths_last_tick: usize,
    pub total_births: usize,
    pub total_deaths: usize,
}

/// Field-value accumulator for one kind, mirroring the per-field vectors the
/// display layer summarizes.
#[derive(Default)]
struct KindAccumulator {
    energies: Vec<i32>,
    reproduction_energies: Vec<i32>,
    offspring_energies: Vec<i32>,
    decrement_factors: Vec<i32>,
    stabilize_factors: Vec<i32>,
    increment_factors: Vec<i32>,
    feast_sizes: Vec<i32>,
}

impl KindAccumulator {
    fn record_plant(&mut self, plant: &Plant) {
        self.energies.push(plant.energy);
        self.record_genes(plant.genes);
    }

    fn record_herbivore(&mut self, herbivore: &Herbivore) {
        self.energies.push(herbivore.energy);
        self.record_genes(herbivore.genes);
        self.feast_sizes.push(herbivore.feast_size);
    }

    fn record_carnivore(&mut self, carnivore: &Carnivore) {
        self.energies.push(carnivore.energy);
        self.record_genes(carnivore.genes);
    }

    fn record_genes(&mut self, genes: crate::cell::Genes) {
        self.reproduction_energies.push(genes.reproduction_energy);
        self.offspring_energies.push(genes.offspring_energy);
        self.decrement_factors.push(genes.decrement_factor);
        self.stabilize_factors.push(genes.stabilize_factor);
        self.increment_factors.push(genes.increment_factor);
    }

    fn finish(mut self) -> KindStats {
        KindStats {
            count: self.energies.len(),
            energy: median(&mut self.energies),
            reproduction_energy: median(&mut self.reproduction_energies),
            offspring_energy: median(&mut self.offspring_energies),
            decrement_factor: median(&mut self.decrement_factors),
            stabilize_factor: median(&mut self.stabilize_factors),
            increment_factor: median(&mut self.increment_factors),
            feast_size: median(&mut self.feast_sizes),
        }
    }
}

/// Upper-middle element of the ascending sort, `None` for an empty slice.
pub fn median(values: &mut [i32]) -> Option<i32> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    Some(values[values.len() / 2])
}

impl World {
    /// One pass over all cells collecting the per-kind statistics the
    /// renderer displays alongside the grid.
    pub fn tick_stats(&self) -> TickStats {
        let mut plants = KindAccumulator::default();
        let mut herbivores = KindAccumulator::default();
        let mut carnivores = KindAccumulator::default();

        for row in 0..self.config.rows {
            for col in 0..self.config.columns {
                let cell = self.cells.cell(Position::new(row as i32, col as i32));
                if let Some(plant) = cell.plant() {
                    plants.record_plant(plant);
                }
                if let Some(herbivore) = cell.herbivore() {
                    herbivores.record_herbivore(herbivore);
                }
                if let Some(carnivore) = cell.carnivore() {
                    carnivores.record_carnivore(carnivore);
                }
            }
        }

        TickStats {
            tick: self.tick_index,
            plants: plants.finish(),
            herbivores: herbivores.finish(),
            carnivores: carnivores.finish(),
            births_last_tick: self.births_last_tick,
            deaths_last_tick: self.deaths_last_tick,
            total_births: self.total_births,
            total_deaths: self.total_deaths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_empty_slice_is_none() {
        assert_eq!(median(&mut []), None);
    }

    #[test]
    fn median_picks_middle_of_odd_count() {
        assert_eq!(median(&mut [5, 1, 9]), Some(5));
    }

    #[test]
    fn median_picks_upper_middle_of_even_count() {
        assert_eq!(median(&mut [4, 1, 3, 2]), Some(3));
    }

    #[test]
    fn median_sorts_before_selecting() {
        assert_eq!(median(&mut [10, -3, 7, 7, 0]), Some(7));
    }
}
