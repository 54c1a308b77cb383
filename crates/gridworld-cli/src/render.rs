use gridworld_core::{Cell, Grid, KindStats, TickStats};
use std::fmt::Write;

/// One character per cell, carnivore > herbivore > plant > empty precedence.
fn cell_glyph(cell: &Cell) -> char {
    if cell.has_carnivore() {
        'C'
    } else if cell.has_herbivore() {
        'H'
    } else if cell.has_plant() {
        '*'
    } else {
        '.'
    }
}

/// Render the grid snapshot as ASCII rows.
pub fn render_grid(snapshot: &Grid<Cell>) -> String {
    let mut out = String::with_capacity((snapshot.cols() + 1) * snapshot.rows());
    for row in 0..snapshot.rows() {
        for col in 0..snapshot.cols() {
            out.push(cell_glyph(snapshot.get(row, col)));
        }
        out.push('\n');
    }
    out
}

fn fmt_median(value: Option<i32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

fn stats_row(name: &str, stats: &KindStats) -> String {
    format!(
        "{name:<10} {count:>6} {energy:>7} {reproduction:>7} {offspring:>7} {dec:>5} {stab:>5} {inc:>5} {feast:>6}",
        count = stats.count,
        energy = fmt_median(stats.energy),
        reproduction = fmt_median(stats.reproduction_energy),
        offspring = fmt_median(stats.offspring_energy),
        dec = fmt_median(stats.decrement_factor),
        stab = fmt_median(stats.stabilize_factor),
        inc = fmt_median(stats.increment_factor),
        feast = fmt_median(stats.feast_size),
    )
}

/// Per-kind median table for one tick.
pub fn render_stats(stats: &TickStats) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "tick {} | births {} deaths {} (total {}/{})",
        stats.tick,
        stats.births_last_tick,
        stats.deaths_last_tick,
        stats.total_births,
        stats.total_deaths
    );
    let _ = writeln!(
        out,
        "{:<10} {:>6} {:>7} {:>7} {:>7} {:>5} {:>5} {:>5} {:>6}",
        "kind", "count", "energy", "repro", "offspr", "dec", "stab", "inc", "feast"
    );
    let _ = writeln!(out, "{}", stats_row("plant", &stats.plants));
    let _ = writeln!(out, "{}", stats_row("herbivore", &stats.herbivores));
    let _ = writeln!(out, "{}", stats_row("carnivore", &stats.carnivores));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridworld_core::{Position, World, WorldConfig};

    #[test]
    fn empty_grid_renders_dots() {
        let world = World::new(WorldConfig {
            rows: 2,
            columns: 3,
            initial_plants: 0,
            initial_herbivores: 0,
            initial_carnivores: 0,
            ..WorldConfig::default()
        });
        assert_eq!(render_grid(&world.snapshot()), "...\n...\n");
    }

    #[test]
    fn plants_render_as_asterisks() {
        let world = World::new(WorldConfig {
            seed: 1,
            rows: 1,
            columns: 3,
            initial_plants: 3,
            initial_herbivores: 0,
            initial_carnivores: 0,
            ..WorldConfig::default()
        });
        assert_eq!(render_grid(&world.snapshot()), "***\n");
    }

    #[test]
    fn animal_glyph_hides_the_plant_underneath() {
        // A 1x1 world stacks the lone plant and the lone animal in one cell.
        let sharing_herbivore = World::new(WorldConfig {
            rows: 1,
            columns: 1,
            initial_plants: 1,
            initial_herbivores: 1,
            initial_carnivores: 0,
            ..WorldConfig::default()
        });
        assert!(sharing_herbivore.cell(Position::new(0, 0)).has_plant());
        assert_eq!(render_grid(&sharing_herbivore.snapshot()), "H\n");

        let sharing_carnivore = World::new(WorldConfig {
            rows: 1,
            columns: 1,
            initial_plants: 1,
            initial_herbivores: 0,
            initial_carnivores: 1,
            ..WorldConfig::default()
        });
        assert_eq!(render_grid(&sharing_carnivore.snapshot()), "C\n");
    }

    #[test]
    fn stats_table_shows_dash_for_empty_kinds() {
        let world = World::new(WorldConfig {
            rows: 4,
            columns: 4,
            initial_plants: 0,
            initial_herbivores: 0,
            initial_carnivores: 0,
            ..WorldConfig::default()
        });
        let table = render_stats(&world.tick_stats());
        assert!(table.contains('-'));
        assert!(table.contains("plant"));
        assert!(table.contains("carnivore"));
    }
}
