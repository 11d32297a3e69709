// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::string::String;

/// Failure to read an editor state document.
///
/// Outline extraction over a rendered document never fails; only parsing the
/// serialized editor state can.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexicalError {
    /// The input is not valid JSON.
    #[error("editor state is not valid JSON: {0}")]
    Json(String),
    /// The JSON has no `root` node.
    #[error("editor state has no `root` node")]
    MissingRoot,
}
