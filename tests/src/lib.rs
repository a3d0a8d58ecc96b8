//! Statistical test suites for the hygiene library
//!
//! Timing analysis for the constant-time comparison and chi-squared
//! uniformity checks for the samplers. The integration tests under `tests/`
//! drive these suites.


pub use suites::SuiteError;
