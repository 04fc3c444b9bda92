/*!
 * Environment Configuration Tests
 * Exercise overrides through the real process environment
 */

use lockperf::core::config::{ITERATIONS_ENV, RUN_SECS_ENV, WRITERS_ENV};
use lockperf::{BenchError, RunConfig, RunMode};
use serial_test::serial;
use std::env;

fn clear() {
    for key in [WRITERS_ENV, ITERATIONS_ENV, RUN_SECS_ENV] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear();
    let config = RunConfig::from_env(6, RunMode::fixed_default()).unwrap();

    assert_eq!(config.writers, 3);
    assert_eq!(config.readers(), 3);
    assert_eq!(config.mode, RunMode::fixed_default());
}

#[test]
#[serial]
fn test_lock_writers_from_environment() {
    clear();
    env::set_var(WRITERS_ENV, "1");
    let config = RunConfig::from_env(6, RunMode::timed_default());
    clear();

    let config = config.unwrap();
    assert_eq!(config.writers, 1);
    assert_eq!(config.readers(), 5);
}

#[test]
#[serial]
fn test_too_many_writers_from_environment() {
    clear();
    env::set_var(WRITERS_ENV, "7");
    let result = RunConfig::from_env(6, RunMode::timed_default());
    clear();

    assert!(matches!(
        result,
        Err(BenchError::InvalidWriterCount {
            writers: 7,
            threads: 6
        })
    ));
}

#[test]
#[serial]
fn test_iterations_from_environment() {
    clear();
    env::set_var(ITERATIONS_ENV, "42");
    let config = RunConfig::from_env(2, RunMode::timed_default());
    clear();

    assert_eq!(config.unwrap().mode, RunMode::Fixed { iterations: 42 });
}
