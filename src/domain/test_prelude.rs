// Shared proptest configuration for the domain property suites.

use proptest::test_runner::Config;

/// Keep the suites fast enough for every-commit runs while still covering a
/// useful slice of the input space.
pub fn proptest_config() -> Config {
    Config {
        cases: 128,
        ..Config::default()
    }
}
