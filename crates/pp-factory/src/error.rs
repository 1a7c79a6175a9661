use thiserror::Error;

/// Failures of a single packaging run. All of them end the current run only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("'{tool}' was not found. Install it first, e.g. `pip install {tool}`.")]
    ToolNotFound { tool: String },

    #[error("Packaging failed with exit code {exit_code}. See the log for details.")]
    PackagingFailure { exit_code: i32 },

    #[error("Unexpected error while running the packager: {0}")]
    Unexpected(String),
}

impl PackError {
    /// Short caption for the dialog shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "Invalid input",
            Self::ToolNotFound { .. } => "Packager not found",
            Self::PackagingFailure { .. } => "Packaging failed",
            Self::Unexpected(_) => "Unexpected error",
        }
    }

    /// Every packaging failure interrupts the user with a dialog.
    pub fn is_blocking(&self) -> bool {
        true
    }
}

/// Failures of the release check. Never shown as a blocking dialog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("Update check failed (network): {0}")]
    Network(String),

    #[error("Update check failed (bad response): {0}")]
    Parse(String),
}

impl UpdateError {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Network(_) => "Update check unavailable",
            Self::Parse(_) => "Unexpected release data",
        }
    }

    pub fn is_blocking(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_not_found_names_the_tool() {
        let err = PackError::ToolNotFound {
            tool: "pyinstaller".into(),
        };
        assert!(err.to_string().contains("pip install pyinstaller"));
        assert_eq!(err.title(), "Packager not found");
    }

    #[test]
    fn packaging_failure_carries_exit_code() {
        let err = PackError::PackagingFailure { exit_code: 2 };
        assert!(err.to_string().contains("exit code 2"));
    }

    #[test]
    fn packaging_errors_always_block() {
        let errors = [
            PackError::InvalidInput("no script".into()),
            PackError::ToolNotFound { tool: "t".into() },
            PackError::PackagingFailure { exit_code: 1 },
            PackError::Unexpected("boom".into()),
        ];
        assert!(errors.iter().all(PackError::is_blocking));
    }

    #[test]
    fn update_errors_have_titles() {
        assert_eq!(
            UpdateError::Network("x".into()).title(),
            "Update check unavailable"
        );
        assert_eq!(UpdateError::Parse("x".into()).title(), "Unexpected release data");
    }

    #[test]
    fn update_errors_are_never_blocking() {
        assert!(!UpdateError::Network("timeout".into()).is_blocking());
        assert!(!UpdateError::Parse("missing tag_name".into()).is_blocking());
    }
}
