//! User-facing notifications produced by dashboard operations.

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The wallet is missing; the action was skipped.
    Warning,
    /// An action has started.
    Info,
    /// An action completed.
    Success,
    /// An action failed.
    Error,
}

impl Severity {
    /// Short lowercase label used in logs and headless output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single notification.
///
/// Persistent notifications stay on screen until dismissed; all others
/// expire on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub persistent: bool,
}

impl Notification {
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::transient(Severity::Warning, message)
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::transient(Severity::Info, message)
    }

    /// Success notifications never auto-dismiss.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
            persistent: true,
        }
    }

    /// Builds the error notification for a failed action.
    #[must_use]
    pub fn error(failure: &impl std::fmt::Display) -> Self {
        Self::transient(Severity::Error, format!("error: {failure}"))
    }

    fn transient(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            persistent: false,
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity.as_str(), self.message)
    }
}
