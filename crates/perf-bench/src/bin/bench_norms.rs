use std::hint::black_box;
use std::time::{Duration, Instant};

use common::float_bits::relative_error;
use perf_bench::*;
use stable_math_core::norms::norm2;

fn time_norm(data: &[f64], norm: impl Fn(&[f64]) -> f64) -> (f64, Duration) {
    let start_time = Instant::now();
    let mut result = 0.0;
    for _ in 0..NUM_REPEATS {
        result = norm(black_box(data));
    }
    (black_box(result), start_time.elapsed() / NUM_REPEATS as u32)
}

fn report(label: &str, data: &[f64]) {
    let (naive, naive_time) = time_norm(data, naive_norm2);
    let (scaled, scaled_time) = time_norm(data, norm2);

    println!("--- 2-Norm Benchmark: {} ({} Values) ---", label, NUM_VALUES);
    println!("Naive:  {:e} in {:?}", naive, naive_time);
    println!("Scaled: {:e} in {:?}", scaled, scaled_time);
    println!("Relative difference: {:e}", relative_error(scaled, naive));
    println!(
        "Slowdown: {:.2}x",
        scaled_time.as_secs_f64() / naive_time.as_secs_f64().max(f64::MIN_POSITIVE)
    );
}

fn main() {
    report("moderate magnitudes", &generate_moderate_values());
    report("wide magnitudes", &generate_wide_values());
}
