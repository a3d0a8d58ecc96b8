// Chi-squared uniformity of the bounded samplers and the shuffle

use hygiene_rand::{Csprng, RngSource};
use hygiene_tests::suites::distribution::{histogram, permutation_index, ChiSquaredTest};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const TRIALS: usize = 1_000_000;
const ALPHA: f64 = 1e-4;

fn seeded(seed: u64) -> Csprng<RngSource<ChaCha20Rng>> {
    Csprng::new(RngSource(ChaCha20Rng::seed_from_u64(seed)))
}

fn assert_uniform(label: &str, counts: Vec<u64>) {
    let report = ChiSquaredTest::new(counts)
        .run()
        .unwrap_or_else(|e| panic!("{label}: {e}"));
    println!(
        "{label}: chi2={:.2} df={} p={:.4} counts {}..{}",
        report.statistic,
        report.degrees_of_freedom,
        report.p_value,
        report.min_count,
        report.max_count
    );
    assert!(report.is_uniform(ALPHA), "{label} is not uniform: p={}", report.p_value);
}

#[test]
fn test_bound_one_only_yields_zero() {
    let mut rng = seeded(1);
    assert!((0..10_000).all(|_| rng.uniform_bounded_u32(1) == 0));
}

#[test]
fn test_small_bounds_are_uniform() {
    for (seed, bound) in [(2u64, 2u32), (3, 3), (7, 7), (255, 255)] {
        let mut rng = seeded(seed);
        let counts = histogram(bound as usize, TRIALS, || {
            rng.uniform_bounded_u32(bound) as usize
        });
        assert_uniform(&format!("uniform_bounded_u32({bound})"), counts);
    }
}

#[test]
fn test_half_range_bound_is_uniform() {
    // 2^31 values folded into 16 bins by their top four bits.
    let mut rng = seeded(31);
    let counts = histogram(16, TRIALS, || (rng.uniform_bounded_u32(1 << 31) >> 27) as usize);
    assert_uniform("uniform_bounded_u32(2^31)", counts);
}

#[test]
fn test_bound_with_large_incomplete_group() {
    // For 3 * 2^30 a plain modulo would put twice the weight on [0, 2^30).
    let bound = 3u32 << 30;
    let mut rng = seeded(330);
    let counts = histogram(3, TRIALS, || (rng.uniform_bounded_u32(bound) >> 30) as usize);
    assert_uniform("uniform_bounded_u32(3 * 2^30)", counts);
}

#[test]
fn test_u64_bound_with_rejections() {
    // 2^64 mod (6 * 2^60) = 4 * 2^60, so a quarter of all draws are rejected.
    let bound = 6u64 << 60;
    let mut rng = seeded(660);
    let counts = histogram(6, TRIALS / 4, || (rng.uniform_bounded_u64(bound) >> 60) as usize);
    assert_uniform("uniform_bounded_u64(6 * 2^60)", counts);
}

#[test]
fn test_six_sided_die_from_os() {
    let mut rng = Csprng::os();
    let counts = histogram(6, 6000, || rng.uniform_bounded_u32(6) as usize);
    for (face, &count) in counts.iter().enumerate() {
        // Standard deviation per face is about 29.
        assert!((800..=1200).contains(&count), "face {face} seen {count} times");
    }
}

#[test]
fn test_shuffle_permutations_are_uniform() {
    let mut rng = seeded(4);
    let counts = histogram(24, 240_000, || {
        let mut perm = [0usize, 1, 2, 3];
        rng.shuffle(&mut perm);
        permutation_index(&perm)
    });
    assert!(counts.iter().all(|&c| c > 0), "some permutation never appeared");
    assert_uniform("shuffle(k = 4)", counts);
}

#[test]
fn test_shuffle_position_uniform_for_longer_sequences() {
    // Where element 0 ends up in a 10-element shuffle.
    let mut rng = seeded(10);
    let counts = histogram(10, 100_000, || {
        let mut items: Vec<usize> = (0..10).collect();
        rng.shuffle(&mut items);
        items.iter().position(|&x| x == 0).unwrap_or(usize::MAX)
    });
    assert_uniform("shuffle(k = 10) position of first element", counts);
}

#[test]
fn test_trivial_shuffles_leave_input_alone() {
    let mut rng = Csprng::os();

    let mut empty: Vec<u32> = Vec::new();
    rng.shuffle(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![42];
    rng.shuffle(&mut one);
    assert_eq!(one, vec![42]);
}
