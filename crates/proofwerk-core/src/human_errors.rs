// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for non-technical users.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The taxonomy uses three severity levels that drive UI presentation.

use crate::error::ProofwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Momentary problem — retrying may succeed.
    Transient,
    /// User must do something (pick a smaller file, re-export, check the path).
    ActionRequired,
    /// Cannot be fixed by retrying or user action on this file.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether the system should auto-retry.
    pub retriable: bool,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `ProofwerkError` into a `HumanError` anyone can act on.
pub fn humanize_error(err: &ProofwerkError) -> HumanError {
    match err {
        ProofwerkError::InvalidSample(_) => HumanError {
            message: "The image preview couldn't be prepared.".into(),
            suggestion: "Try uploading the file again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ProofwerkError::UploadTooLarge { limit, .. } => HumanError {
            message: "This file is too large to check.".into(),
            suggestion: format!(
                "The limit is {} MB. Export a smaller version of your design and try again.",
                limit / (1024 * 1024)
            ),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ProofwerkError::Strategy { .. } => HumanError {
            message: "The advanced check isn't available right now.".into(),
            suggestion: "Your design was scored with the standard check instead. You can try again later for the advanced one.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ProofwerkError::Io(_) => HumanError {
            message: "The file couldn't be read.".into(),
            suggestion: "Check that the file exists and that you have permission to open it, then try again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        ProofwerkError::Serialization(_) => HumanError {
            message: "The result couldn't be prepared.".into(),
            suggestion: "This is a problem on our side. Try again, and report it if it keeps happening.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_too_large_names_the_limit_in_mb() {
        let err = ProofwerkError::UploadTooLarge {
            actual: 60 * 1024 * 1024,
            limit: 50 * 1024 * 1024,
        };
        let human = humanize_error(&err);
        assert!(human.suggestion.contains("50 MB"));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn strategy_failure_is_transient() {
        let err = ProofwerkError::Strategy {
            strategy: "vision".into(),
            detail: "timeout".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
    }
}
