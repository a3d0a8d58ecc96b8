// secure_memzero: erasure is observable and independent of buffer contents

use std::hint::black_box;

use hygiene_common::{secure_memzero, secure_memzero_raw};

use super::{TestConfig, TimingTester};

#[test]
fn test_memzero_timing_independent_of_content() {
    let config = TestConfig::for_memzero();
    let mut zeros = vec![0x00u8; 4096];
    let mut ones = vec![0xFFu8; 4096];

    for _ in 0..config.num_warmup {
        secure_memzero(black_box(&mut zeros));
        secure_memzero(black_box(&mut ones));
    }

    let tester = TimingTester::new(config.num_samples, config.num_iterations);
    let (t1, t2) = tester.measure_pair(
        || {
            zeros.fill(0x00);
            secure_memzero(black_box(&mut zeros));
        },
        || {
            ones.fill(0xFF);
            secure_memzero(black_box(&mut ones));
        },
    );

    let analysis = tester
        .analyze_constant_time(&t1, &t2, config.mean_ratio_max, config.combined_score_threshold)
        .unwrap_or_else(|e| panic!("analysis error: {e}"));
    println!("{}", analysis.summary("secure_memzero"));

    assert!(
        analysis.is_constant_time,
        "secure_memzero timing depends on content: ratio={:.3}, score={:.3}",
        analysis.mean_ratio, analysis.combined_score
    );
}

#[test]
fn test_memzero_heap_region_before_free() {
    let mut key = vec![0x5Au8; 256].into_boxed_slice();
    let ptr = key.as_mut_ptr();
    let len = key.len();

    unsafe {
        secure_memzero_raw(ptr, len);
        for i in 0..len {
            assert_eq!(std::ptr::read_volatile(ptr.add(i)), 0, "byte {i}");
        }
    }
    drop(key);
}
