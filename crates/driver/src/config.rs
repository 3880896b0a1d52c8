use std::path::PathBuf;

use crate::error::RunnerError;

/// Common installation paths checked when PATH lookup fails.
const COMMON_PATHS: [&str; 3] = [
    "/opt/homebrew/bin/jbmc",
    "/usr/local/bin/jbmc",
    "/usr/bin/jbmc",
];

/// Default loop unwind limit passed to JBMC.
pub const DEFAULT_UNWIND: u32 = 10;

/// JBMC invocation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JbmcConfig {
    /// Path to the jbmc binary.
    pub jbmc_path: PathBuf,
    /// Loop unwind limit (`--unwind`).
    pub unwind: u32,
    /// Additional pass-through arguments (e.g. `-cp`, classpath entries).
    pub extra_args: Vec<String>,
}

impl JbmcConfig {
    /// Create a config for the given binary path with default settings.
    pub fn new(jbmc_path: PathBuf) -> Self {
        Self {
            jbmc_path,
            unwind: DEFAULT_UNWIND,
            extra_args: Vec::new(),
        }
    }

    /// Set the unwind limit.
    pub fn with_unwind(mut self, unwind: u32) -> Self {
        self.unwind = unwind;
        self
    }

    /// Add extra arguments for JBMC.
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Auto-detect the jbmc binary.
    ///
    /// Tries `which jbmc` first, then checks common installation paths.
    pub fn auto_detect() -> Result<Self, RunnerError> {
        if let Ok(output) = std::process::Command::new("which").arg("jbmc").output()
            && output.status.success()
        {
            let path_str = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !path_str.is_empty() {
                let path = PathBuf::from(&path_str);
                if path.exists() {
                    return Ok(Self::new(path));
                }
            }
        }

        for candidate in COMMON_PATHS {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(Self::new(path));
            }
        }

        Err(RunnerError::NotFound(PathBuf::from("jbmc")))
    }

    /// Validate that the configured binary exists.
    pub fn validate(&self) -> Result<(), RunnerError> {
        if !self.jbmc_path.exists() {
            return Err(RunnerError::NotFound(self.jbmc_path.clone()));
        }
        Ok(())
    }

    /// Build the full argument list for one entry point.
    pub fn build_args(&self, entry: &str) -> Vec<String> {
        let mut args = vec![
            entry.to_string(),
            "--xml-ui".to_string(),
            "--unwind".to_string(),
            self.unwind.to_string(),
        ];
        args.extend(self.extra_args.iter().cloned());
        args
    }
}
