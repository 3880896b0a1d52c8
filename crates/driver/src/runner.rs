use std::process::Command;

use crate::config::JbmcConfig;
use crate::error::RunnerError;

/// Wraps a JBMC subprocess invocation and captures its XML output.
pub struct JbmcRunner {
    config: JbmcConfig,
}

impl JbmcRunner {
    /// Create a runner with the given configuration, checking the binary exists.
    pub fn new(config: JbmcConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run JBMC against `entry` and return the raw XML trace output.
    ///
    /// JBMC exits non-zero when a property fails, which is exactly the
    /// interesting case here, so the exit status is not treated as an error.
    pub fn trace_xml(&self, entry: &str) -> Result<String, RunnerError> {
        let output = Command::new(&self.config.jbmc_path)
            .args(self.config.build_args(entry))
            .output()
            .map_err(|e| RunnerError::ProcessError(format!("failed to run jbmc: {e}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if stdout.trim().is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RunnerError::ProcessError(format!(
                "jbmc produced no output: {}",
                stderr.trim()
            )));
        }
        Ok(stdout)
    }

    pub fn config(&self) -> &JbmcConfig {
        &self.config
    }
}
