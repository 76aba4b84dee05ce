//! Serial vs. parallel generation advance across board sizes.

use std::time::Instant;

use lifeboard::LifeGrid;

fn seeded(size: i32) -> LifeGrid {
    let mut grid = LifeGrid::new(size, size).expect("benchmark sizes are positive");
    grid.randomize((size as usize * size as usize) / 4);
    grid
}

fn bench(mut grid: LifeGrid, iterations: u32, step: fn(&mut LifeGrid)) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        step(&mut grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Generation advance benchmark ===\n");

    let iterations = 20;
    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for size in [100, 250, 500, 1000, 2000] {
        let serial_ms = bench(seeded(size), iterations, LifeGrid::advance);
        let parallel_ms = bench(seeded(size), iterations, LifeGrid::advance_parallel);

        println!(
            "{:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
