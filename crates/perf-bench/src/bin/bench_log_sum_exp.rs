use std::hint::black_box;
use std::time::Instant;

use common::float_bits::relative_error;
use perf_bench::*;
use stable_math_core::log_domain::{LogSumExpAccumulator, log_sum_exp};

fn main() {
    let data = generate_log_values();

    let start_time = Instant::now();
    let mut two_pass = 0.0;
    for _ in 0..NUM_REPEATS {
        two_pass = log_sum_exp(black_box(&data));
    }
    let two_pass_time = start_time.elapsed() / NUM_REPEATS as u32;

    let start_time = Instant::now();
    let mut streaming = 0.0;
    for _ in 0..NUM_REPEATS {
        streaming = black_box(&data)
            .iter()
            .copied()
            .collect::<LogSumExpAccumulator>()
            .value();
    }
    let streaming_time = start_time.elapsed() / NUM_REPEATS as u32;

    let two_pass = black_box(two_pass);
    let streaming = black_box(streaming);

    println!("--- Log-Sum-Exp Benchmark Results ({} Values) ---", NUM_VALUES);
    println!("Two-pass:  {:.15} in {:?}", two_pass, two_pass_time);
    println!("Streaming: {:.15} in {:?}", streaming, streaming_time);
    println!("Relative difference: {:e}", relative_error(two_pass, streaming));
}
