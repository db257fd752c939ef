// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::imp::NativeTextureId;
use std::fmt::Display;

/// Failure reported by a GPU backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The graphics API rejected the call.
    Validation(String),
    OutOfMemory,
    /// The backend declined the operation (see [`crate::imp::NopBackend::fail_on`]).
    Refused(&'static str),
    UnknownTexture(NativeTextureId),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Validation(e) => write!(f, "{}", e),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::Refused(operation) => write!(f, "Backend refused {}", operation),
            Error::UnknownTexture(id) => write!(f, "No such texture {}", id),
        }
    }
}
