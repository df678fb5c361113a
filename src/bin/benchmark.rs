//! Performance benchmark comparing the serial and parallel steppers

use std::time::Instant;

use life_cli::{Algorithm, Generation};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark(algorithm: Algorithm, seed: &Generation, iterations: u32) -> (f64, usize) {
    let mut generation = seed.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        generation = algorithm.step(&generation);
    }
    let per_step = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (per_step, generation.population())
}

fn main() {
    println!("=== Game of Life Stepper Benchmark ===\n");

    let sizes = [16, 32, 64, 128, 256];
    let iterations = 20;
    let mut rng = StdRng::seed_from_u64(0x5eed);

    println!("{:>10} {:>12} {:>12} {:>10} {:>12}",
        "Soup", "Serial", "Parallel", "Speedup", "Population");
    println!("{:-<62}", "");

    for size in sizes {
        let soup = Generation::random(size, size, 0.3, &mut rng);

        let (serial_ms, serial_pop) = benchmark(Algorithm::Serial, &soup, iterations);
        let (parallel_ms, parallel_pop) = benchmark(Algorithm::Parallel, &soup, iterations);
        assert_eq!(serial_pop, parallel_pop, "steppers diverged on {size}x{size} soup");

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x {:>12}",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            serial_pop
        );
    }
}
