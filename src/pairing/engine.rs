//! The pairing engine seam: request document in, response document out.

use crate::pairing::{PairingConfig, PairingError};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Anything that can answer a pairing request. The process-backed engine is the real one;
/// tests substitute canned answers.
#[async_trait]
pub trait PairingEngine: Send + Sync {
    async fn pair(&self, request: &str) -> Result<String, PairingError>;
}

/// Runs the external engine as `<executable> <mode> <request> -p <response>` through files in `work_dir`.
#[derive(Clone, Debug)]
pub struct BbpPairingsEngine {
    config: PairingConfig,
}

impl BbpPairingsEngine {
    pub fn new(config: PairingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PairingConfig {
        &self.config
    }
}

#[async_trait]
impl PairingEngine for BbpPairingsEngine {
    async fn pair(&self, request: &str) -> Result<String, PairingError> {
        let request_path = self.config.request_path();
        let response_path = self.config.response_path();

        tokio::fs::create_dir_all(&self.config.work_dir)
            .await
            .map_err(|source| io_error(&self.config.work_dir, source))?;
        tokio::fs::write(&request_path, request)
            .await
            .map_err(|source| io_error(&request_path, source))?;
        // A response left over from a previous run must not be read as this one's.
        match tokio::fs::remove_file(&response_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => return Err(io_error(&response_path, source)),
        }

        log::info!(
            "Running pairing engine {} {}",
            self.config.executable.display(),
            self.config.mode
        );
        let mut cmd = Command::new(&self.config.executable);
        cmd.arg(&self.config.mode)
            .arg(&request_path)
            .arg("-p")
            .arg(&response_path)
            .kill_on_drop(true);
        let output = tokio::time::timeout(self.config.timeout, cmd.output())
            .await
            .map_err(|_| PairingError::Timeout(self.config.timeout))?
            .map_err(|source| PairingError::Spawn {
                executable: self.config.executable.clone(),
                source,
            })?;

        if !output.status.success() {
            let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
            captured.push_str(&String::from_utf8_lossy(&output.stderr));
            log::error!("Pairing engine failed ({}): {}", output.status, captured.trim());
            return Err(PairingError::EngineFailed {
                code: output.status.code(),
                output: captured,
            });
        }

        tokio::fs::read_to_string(&response_path)
            .await
            .map_err(|source| io_error(&response_path, source))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> PairingError {
    PairingError::Io {
        path: path.to_path_buf(),
        source,
    }
}
