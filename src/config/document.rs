// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shortcuts document parsing
//!
//! A document is a JSON object with a `shortcuts` array of `{ name, url }`
//! objects. Two parsers share that shape check:
//!
//! - `parse_document` (import, backup restore) is all-or-nothing: one entry
//!   that fails `validate_shortcut` rejects the file.
//! - `parse_store` (loading the live store) keeps every entry that validates
//!   and hands back the rejected ones, so a single bad line can't cost the
//!   user the rest of their collection.
//!
//! Accepted entries come back normalised either way.

use serde_json::Value;
use thiserror::Error;

use crate::core::types::{Shortcut, ShortcutsDocument};
use crate::core::validator::{validate_shortcut, ValidationError};

/// Why a document was rejected
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Not JSON at all
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON, but no `shortcuts` array at the top level
    #[error("document must have a \"shortcuts\" array")]
    MissingShortcuts,

    /// An array entry is not a `{ name, url }` object
    #[error("entry {index} is not a {{\"name\", \"url\"}} object")]
    MalformedEntry { index: usize },

    /// An entry failed validation
    #[error("entry {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// Parses and validates a shortcuts document
pub fn parse_document(text: &str) -> Result<ShortcutsDocument, DocumentError> {
    let shortcuts = shortcut_entries(text)?
        .into_iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ShortcutsDocument { shortcuts })
}

/// Parses the store file, keeping every entry that validates
///
/// Only unparseable JSON or a missing `shortcuts` array fail the whole
/// document. Rejected entries are returned next to the kept ones, each as
/// a `MalformedEntry` or `InvalidEntry` carrying its original index.
pub fn parse_store(text: &str) -> Result<(ShortcutsDocument, Vec<DocumentError>), DocumentError> {
    let mut shortcuts = Vec::new();
    let mut rejected = Vec::new();

    for (index, entry) in shortcut_entries(text)?.into_iter().enumerate() {
        match parse_entry(index, entry) {
            Ok(shortcut) => shortcuts.push(shortcut),
            Err(e) => rejected.push(e),
        }
    }

    Ok((ShortcutsDocument { shortcuts }, rejected))
}

/// The raw `shortcuts` array of a document
fn shortcut_entries(text: &str) -> Result<Vec<Value>, DocumentError> {
    let value: Value = serde_json::from_str(text)?;

    match value {
        Value::Object(mut map) => match map.remove("shortcuts") {
            Some(Value::Array(entries)) => Ok(entries),
            _ => Err(DocumentError::MissingShortcuts),
        },
        _ => Err(DocumentError::MissingShortcuts),
    }
}

fn parse_entry(index: usize, entry: Value) -> Result<Shortcut, DocumentError> {
    let raw: Shortcut =
        serde_json::from_value(entry).map_err(|_| DocumentError::MalformedEntry { index })?;

    validate_shortcut(&raw.name, &raw.url)
        .map_err(|source| DocumentError::InvalidEntry { index, source })
}

/// Serialises a document the way the store keeps it on disk
pub fn to_json(document: &ShortcutsDocument) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(document)?;
    text.push('\n');
    Ok(text)
}
