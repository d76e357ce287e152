use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to launch test runner '{program}': {source}")]
    RunnerLaunchError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Test runner exited with status {code}")]
    RunnerFailed { code: i32 },

    #[error("Test runner was terminated before reporting an exit status")]
    RunnerTerminated,

    #[error("Expected artifact not found: {}", path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("Failed to publish '{}': {source}", path.display())]
    PublishError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Runner,
    Publishing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RunError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RunError::ConfigParseError { .. } | RunError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            RunError::RunnerLaunchError { .. }
            | RunError::RunnerFailed { .. }
            | RunError::RunnerTerminated => ErrorCategory::Runner,
            RunError::ArtifactMissing { .. } | RunError::PublishError { .. } => {
                ErrorCategory::Publishing
            }
            RunError::IoError(_) | RunError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Runner => ErrorSeverity::High,
            ErrorCategory::Publishing | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. A failed runner hands back its own code.
    pub fn exit_code(&self) -> i32 {
        if let RunError::RunnerFailed { code } = self {
            return *code;
        }
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RunError::ConfigParseError { .. } => {
                "Check that the config file exists and is valid TOML"
            }
            RunError::InvalidConfigValueError { .. } => {
                "Fix the reported value on the command line or in the config file"
            }
            RunError::RunnerLaunchError { .. } => {
                "Make sure the test runner is installed and on PATH, or pass --runner"
            }
            RunError::RunnerFailed { .. } => {
                "Open the log in the results directory to see which tests failed"
            }
            RunError::RunnerTerminated => "Re-run the suite; the runner was killed by a signal",
            RunError::ArtifactMissing { .. } => {
                "Check that the runner writes report, log and output files to --outputdir"
            }
            RunError::PublishError { .. } => {
                "Check permissions on the publishing directory"
            }
            RunError::IoError(_) | RunError::SerializationError(_) => {
                "Check disk space and permissions on the working directory"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RunError::RunnerFailed { code } => {
                format!("Acceptance tests failed (runner exit code {code}); report not published")
            }
            RunError::RunnerLaunchError { program, .. } => {
                format!("Could not start test runner '{program}'")
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_failure_propagates_its_exit_code() {
        let err = RunError::RunnerFailed { code: 4 };
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.category(), ErrorCategory::Runner);
    }

    #[test]
    fn test_exit_codes_by_severity() {
        let config = RunError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: "nope".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 2);
        assert_eq!(RunError::RunnerTerminated.exit_code(), 1);

        let missing = RunError::ArtifactMissing {
            path: PathBuf::from("results/report.html"),
        };
        assert_eq!(missing.exit_code(), 3);
        assert_eq!(missing.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = vec![
            RunError::IoError(std::io::Error::other("disk full")),
            RunError::ConfigParseError {
                path: "runner.toml".to_string(),
                message: "expected `=`".to_string(),
            },
            RunError::RunnerTerminated,
            RunError::PublishError {
                path: PathBuf::from("docs/log.html"),
                source: std::io::Error::other("read-only"),
            },
        ];
        for err in errors {
            assert_ne!(err.exit_code(), 0, "{err} exited with success");
        }
    }
}
