//! Output handling for CLI commands.

pub mod envelope;

pub use envelope::{EntityType, Envelope, Meta, ResultCode, SCHEMA_VERSION, Status};

/// Text for humans, JSON envelope for tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Process exit codes shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    NotFound = 1,
    GeneralError = 2,
}

impl ExitCode {
    pub fn from_envelope<T>(envelope: &Envelope<T>) -> Self {
        match envelope.exit_code {
            0 => Self::Success,
            1 => Self::NotFound,
            _ => Self::GeneralError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
