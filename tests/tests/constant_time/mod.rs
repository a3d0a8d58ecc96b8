// Constant-time tests, one module per primitive

pub mod memzero_tests;

pub use hygiene_tests::suites::constant_time::{TestConfig, TimingTester};
