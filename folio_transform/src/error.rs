// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::error::Error;
use core::fmt;

/// Errors raised by [`TransformEngine`](crate::TransformEngine) operations.
///
/// These are fatal to the call, never to the process: callers either check
/// [`TransformEngine::is_active`](crate::TransformEngine::is_active) /
/// [`TransformEngine::has_target`](crate::TransformEngine::has_target) up
/// front or handle the returned error. Every other out-of-range condition
/// (scale, page index, slider value) clamps instead of erroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransformError {
    /// The operation requires a bound target or an active transform handle
    /// that is absent.
    NotInitialized,
    /// The rectangle passed to
    /// [`TransformEngine::set_target`](crate::TransformEngine::set_target)
    /// is empty or non-finite.
    InvalidTarget,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => {
                write!(f, "no target bound or no active transform handle")
            }
            Self::InvalidTarget => write!(f, "target rectangle is empty or non-finite"),
        }
    }
}

impl Error for TransformError {}
