use thiserror::Error;

use crate::Role;

/// Errors raised by the pair number ↔ color pair conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("pair number {0} is out of range 1..=25")]
    OutOfRange(i64),

    #[error("unknown {role} color “{color}”")]
    UnknownColor { color: String, role: Role },
}

pub type Result<T> = std::result::Result<T, Error>;
