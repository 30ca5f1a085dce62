//! Exit codes for the dupescan application.

/// Exit codes.
///
/// - 0: Success (completed normally, duplicates found)
/// - 1: General error (configuration error or unexpected failure)
/// - 2: No duplicates found (completed normally, nothing to remove)
///
/// Per-file stat and read warnings never alter the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Scan completed and duplicates were found.
    Success = 0,
    /// Fatal configuration error or unexpected failure.
    GeneralError = 1,
    /// Scan completed but no duplicates were found.
    NoDuplicates = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NoDuplicates.as_i32(), 2);
    }
}
