// src/exit.rs
//! Standardized process exit codes for `seqrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SeqRankExit {
    /// Analysis completed and the report was written.
    Success = 0,
    /// Runtime failure (unreadable input, unwritable output).
    Error = 1,
    /// Configuration rejected (bad jump factor, tolerance, or config file).
    InvalidConfig = 2,
}

impl SeqRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for SeqRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&anyhow::Error> for SeqRankExit {
    fn from(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<crate::error::SeqRankError>() {
            Some(e) if e.is_config() => Self::InvalidConfig,
            _ => Self::Error,
        }
    }
}
