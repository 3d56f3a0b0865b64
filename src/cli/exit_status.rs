use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; per-file migration errors are reported inline
/// - `Failure` (1): `check` found pages that still need migration, or `init` found
///   an existing config
/// - `Error` (2): Command could not run (invalid config, missing source root, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but found work to do.
    Failure,
    /// Command failed due to an internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
