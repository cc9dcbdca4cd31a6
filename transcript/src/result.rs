//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for the transcript

use crate::link::LinkError;
use crate::scrollback::ScrollbackError;
use thiserror::Error;

/// Result type for transcript operations
pub type TranscriptResult<T> = Result<T, TranscriptError>;

/// Transcript error types
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// The timestamp format is not valid strftime syntax
    #[error("Invalid timestamp format: {0:?}")]
    InvalidStampFormat(String),

    /// A visible offset past the end of the buffer
    #[error("Offset {offset} out of bounds for buffer of {len} characters")]
    OffsetOutOfBounds {
        /// Requested offset
        offset: usize,
        /// Buffer length in characters
        len: usize,
    },

    /// Opening a link failed
    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    /// Reading scrollback failed
    #[error("Scrollback error: {0}")]
    Scrollback(#[from] ScrollbackError),
}

impl TranscriptError {
    /// Check if the error came from a collaborator rather than from the caller's input
    pub fn is_external(&self) -> bool {
        matches!(self, TranscriptError::Link(_) | TranscriptError::Scrollback(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_link_error() {
        let error: TranscriptError = LinkError::EmptyUri.into();
        assert!(matches!(error, TranscriptError::Link(LinkError::EmptyUri)));
        assert!(error.is_external());
    }

    #[test]
    fn test_error_from_scrollback_error() {
        let error: TranscriptError = ScrollbackError::LineTooLong {
            length: 10,
            max: 4,
        }
        .into();
        assert!(matches!(error, TranscriptError::Scrollback(_)));
    }

    #[test]
    fn test_error_display() {
        let error = TranscriptError::OffsetOutOfBounds { offset: 12, len: 3 };
        assert_eq!(
            error.to_string(),
            "Offset 12 out of bounds for buffer of 3 characters"
        );
        assert!(!error.is_external());

        let error = TranscriptError::InvalidStampFormat("%Q".to_string());
        assert_eq!(error.to_string(), "Invalid timestamp format: \"%Q\"");
    }

    #[test]
    fn test_error_propagation() {
        fn inner() -> Result<(), LinkError> {
            Err(LinkError::EmptyUri)
        }

        fn outer() -> TranscriptResult<i32> {
            inner()?;
            Ok(42)
        }

        assert!(outer().is_err());
    }
}
