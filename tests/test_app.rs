use closest_pair::app::{format_error_report, solve_input, Config, ExitPolicy, FORMAT_ERROR_MESSAGE};
use closest_pair::error::FormatError;

#[test]
fn test_solve_five_points() {
    let input = b"5\n3 4\n3 5\n4 6\n5 5\n6 6\n";
    assert_eq!(solve_input(input, &Config::default()).unwrap(), "1");
}

#[test]
fn test_solve_rounds_to_nine_significant_figures() {
    let input = b"2\n0 0\n1 1\n";
    assert_eq!(solve_input(input, &Config::default()).unwrap(), "1.41421356");
}

#[test]
fn test_solve_respects_configured_digits() {
    let config = Config { significant_digits: 3, ..Config::default() };
    assert_eq!(solve_input(b"2\n0 0\n1 1\n", &config).unwrap(), "1.41");
}

#[test]
fn test_solve_duplicate_points() {
    assert_eq!(solve_input(b"3\n2 2\n2 2\n9 9\n", &Config::default()).unwrap(), "0");
}

#[test]
fn test_solve_rejects_single_point() {
    assert_eq!(
        solve_input(b"1\n0 0\n", &Config::default()),
        Err(FormatError::TooFewPoints { declared: 1 })
    );
}

#[test]
fn test_default_exit_policy_reports_success() {
    let config = Config::default();
    assert_eq!(config.format_error_exit, ExitPolicy::Success);
    assert_eq!(config.format_error_exit.code(), 0);
}

#[test]
fn test_failure_exit_policy_is_nonzero() {
    assert_eq!(ExitPolicy::Failure.code(), 1);
}

#[test]
fn test_format_error_report() {
    assert_eq!(FORMAT_ERROR_MESSAGE, "Incorrectly formatted input");
    assert_eq!(format_error_report(), "Incorrectly formatted input\n");
}
