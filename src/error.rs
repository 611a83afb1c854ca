// SPDX-FileCopyrightText: 2026 Tim Quelch <tim@tquelch.com>
//
// SPDX-License-Identifier: GPL-3.0-only

/// Errors raised while turning resource listings into import records.
///
/// A missing or malformed field aborts the whole generation pass for that
/// resource kind. There is no per-resource recovery: a listing that doesn't
/// carry the fields its kind promises is a contract violation upstream.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("missing field '{field}' on {context}")]
    MissingField {
        field: String,
        context: &'static str,
    },
    #[error("field '{field}' on {context} is not the expected shape")]
    UnexpectedShape {
        field: String,
        context: &'static str,
    },
    #[error("no listing is registered for resource kind '{0}'")]
    UnknownKind(String),
}

impl ImportError {
    pub fn missing(field: impl Into<String>, context: &'static str) -> Self {
        Self::MissingField {
            field: field.into(),
            context,
        }
    }

    pub fn shape(field: impl Into<String>, context: &'static str) -> Self {
        Self::UnexpectedShape {
            field: field.into(),
            context,
        }
    }
}
