use rand::Rng;

/// Heritable numeric parameters shared by every organism kind.
///
/// The three factors weight the -1/0/+1 offset drawn for each gene on
/// reproduction, and are themselves genes subject to the same walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Genes {
    pub reproduction_energy: i32,
    pub offspring_energy: i32,
    pub decrement_factor: i32,
    pub stabilize_factor: i32,
    pub increment_factor: i32,
}

/// Draw -1, 0, or +1 from the categorical distribution weighted by
/// (`decrement`, `stabilize`, `increment`). One RNG draw.
pub fn gene_offset<R: Rng + ?Sized>(
    rng: &mut R,
    decrement: i32,
    stabilize: i32,
    increment: i32,
) -> i32 {
    debug_assert!(decrement >= 0 && stabilize >= 0 && increment >= 0);
    let total = decrement + stabilize + increment;
    debug_assert!(total > 0, "gene offset weights must not all be zero");
    let n = rng.random_range(0..total);
    if n < decrement {
        -1
    } else if n < decrement + stabilize {
        0
    } else {
        1
    }
}

impl Genes {
    /// Child genes: each field takes one biased random-walk step weighted by
    /// the parent's own factors, floored at 1. Draw order is fixed
    /// (reproduction energy, offspring energy, decrement, stabilize,
    /// increment) so a seeded stream replays identically.
    pub fn mutated<R: Rng + ?Sized>(&self, rng: &mut R) -> Genes {
        let mut step =
            |value: i32| (value + gene_offset(rng, self.decrement_factor, self.stabilize_factor, self.increment_factor)).max(1);
        Genes {
            reproduction_energy: step(self.reproduction_energy),
            offspring_energy: step(self.offspring_energy),
            decrement_factor: step(self.decrement_factor),
            stabilize_factor: step(self.stabilize_factor),
            increment_factor: step(self.increment_factor),
        }
    }

    fn offset<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        gene_offset(rng, self.decrement_factor, self.stabilize_factor, self.increment_factor)
    }

    /// Energy the parent pays for a placed child: floor(1.5 × offspring).
    fn reproduction_cost(&self) -> i32 {
        self.offspring_energy * 3 / 2
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plant {
    pub energy: i32,
    pub genes: Genes,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Herbivore {
    pub energy: i32,
    pub genes: Genes,
    /// Maximum plant energy consumed per tick.
    pub feast_size: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carnivore {
    pub energy: i32,
    pub genes: Genes,
}

impl Plant {
    /// Spawn a child and debit this parent unconditionally. The parent's
    /// energy may go negative; cleanup happens on its next update.
    pub fn reproduce<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Plant {
        let child = Plant {
            energy: self.genes.offspring_energy,
            genes: self.genes.mutated(rng),
        };
        self.energy -= self.genes.reproduction_cost();
        child
    }
}

impl Herbivore {
    pub fn reproduce<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Herbivore {
        let genes = self.genes.mutated(rng);
        // Feast size mutates after the shared genes and floors at 0, not 1.
        let feast_size = (self.feast_size + self.genes.offset(rng)).max(0);
        let child = Herbivore {
            energy: self.genes.offspring_energy,
            genes,
            feast_size,
        };
        self.energy -= self.genes.reproduction_cost();
        child
    }
}

impl Carnivore {
    pub fn reproduce<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Carnivore {
        let child = Carnivore {
            energy: self.genes.offspring_energy,
            genes: self.genes.mutated(rng),
        };
        self.energy -= self.genes.reproduction_cost();
        child
    }
}

/// The animal slot of a cell. One slot, two kinds: a cell can never hold a
/// herbivore and a carnivore at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animal {
    Herbivore(Herbivore),
    Carnivore(Carnivore),
}

/// One grid cell: at most one plant, and independently at most one animal.
/// Plain values behind presence flags (`Option`), no heap allocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    plant: Option<Plant>,
    animal: Option<Animal>,
}

impl Cell {
    // plant

    pub fn has_plant(&self) -> bool {
        self.plant.is_some()
    }

    pub fn plant(&self) -> Option<&Plant> {
        self.plant.as_ref()
    }

    pub fn plant_mut(&mut self) -> Option<&mut Plant> {
        self.plant.as_mut()
    }

    pub fn set_plant(&mut self, plant: Plant) {
        self.plant = Some(plant);
    }

    pub fn remove_plant(&mut self) {
        self.plant = None;
    }

    // animal slot

    pub fn has_animal(&self) -> bool {
        self.animal.is_some()
    }

    pub fn animal(&self) -> Option<&Animal> {
        self.animal.as_ref()
    }

    // herbivore

    pub fn has_herbivore(&self) -> bool {
        matches!(self.animal, Some(Animal::Herbivore(_)))
    }

    pub fn herbivore(&self) -> Option<&Herbivore> {
        match &self.animal {
            Some(Animal::Herbivore(h)) => Some(h),
            _ => None,
        }
    }

    pub fn set_herbivore(&mut self, herbivore: Herbivore) {
        debug_assert!(!self.has_carnivore(), "cell already holds a carnivore");
        self.animal = Some(Animal::Herbivore(herbivore));
    }

    pub fn remove_herbivore(&mut self) {
        if self.has_herbivore() {
            self.animal = None;
        }
    }

    // carnivore

    pub fn has_carnivore(&self) -> bool {
        matches!(self.animal, Some(Animal::Carnivore(_)))
    }

    pub fn carnivore(&self) -> Option<&Carnivore> {
        match &self.animal {
            Some(Animal::Carnivore(c)) => Some(c),
            _ => None,
        }
    }

    pub fn set_carnivore(&mut self, carnivore: Carnivore) {
        debug_assert!(!self.has_herbivore(), "cell already holds a herbivore");
        self.animal = Some(Animal::Carnivore(carnivore));
    }

    pub fn remove_carnivore(&mut self) {
        if self.has_carnivore() {
            self.animal = None;
        }
    }
}
