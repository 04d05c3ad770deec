//! Where the pairing engine lives and how it is invoked.
//!
//! Read from env: PAIRING_ENGINE, PAIRING_MODE, PAIRING_WORK_DIR, PAIRING_TIMEOUT_SECS.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct PairingConfig {
    /// Engine executable.
    pub executable: PathBuf,
    /// First argument, selecting the pairing system (e.g. `--dutch`).
    pub mode: String,
    /// Directory holding the request and response files.
    pub work_dir: PathBuf,
    /// Upper bound on one engine run.
    pub timeout: Duration,
}

fn default_executable() -> PathBuf {
    PathBuf::from("./bbp/bbpPairings.exe")
}

fn default_mode() -> String {
    "--dutch".to_string()
}

fn default_work_dir() -> PathBuf {
    PathBuf::from("./bbp")
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            mode: default_mode(),
            work_dir: default_work_dir(),
            timeout: Duration::from_secs(default_timeout_secs()),
        }
    }
}

impl PairingConfig {
    /// Defaults overridden by whichever env vars are set. An unparsable timeout falls back to the default.
    pub fn from_env() -> Self {
        let executable = std::env::var("PAIRING_ENGINE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_executable());
        let mode = std::env::var("PAIRING_MODE").unwrap_or_else(|_| default_mode());
        let work_dir = std::env::var("PAIRING_WORK_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_work_dir());
        let timeout_secs = std::env::var("PAIRING_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(default_timeout_secs);
        Self {
            executable,
            mode,
            work_dir,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn request_path(&self) -> PathBuf {
        self.work_dir.join("input.txt")
    }

    pub fn response_path(&self) -> PathBuf {
        self.work_dir.join("output.txt")
    }
}
