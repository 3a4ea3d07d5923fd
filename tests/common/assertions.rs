//! Assertion macros for CLI output.

/// Assert that the command succeeded, printing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Command failed with exit code {:?}\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that the command failed.
#[macro_export]
macro_rules! assert_failure {
    ($result:expr) => {
        assert!(
            !$result.success,
            "Command unexpectedly succeeded\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that stdout or stderr contains a pattern.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that neither stdout nor stderr contains a pattern.
#[macro_export]
macro_rules! assert_output_not_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            !$result.stdout.contains($pattern) && !$result.stderr.contains($pattern),
            "Expected output to NOT contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}
