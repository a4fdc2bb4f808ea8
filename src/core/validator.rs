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

//! Shortcut input validation
//!
//! Every name/URL pair goes through `validate_shortcut` before it reaches a
//! collection, whether it was typed into the add form, the edit dialog, the
//! CLI, or arrived in an imported file.
//!
//! # URL normalisation
//! Input without an `http://` or `https://` prefix gets `https://` prepended.
//! The prefixed string must then parse as an absolute URL with a host. The
//! string that is stored is the prefixed input itself, not the parser's
//! re-serialisation, so `mail.example.com` becomes `https://mail.example.com`
//! rather than `https://mail.example.com/`.

use thiserror::Error;
use url::Url;

use crate::core::types::Shortcut;

/// Validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Name was empty after trimming
    #[error("Please enter both a name and URL (name is empty)")]
    EmptyName,

    /// URL was empty after trimming
    #[error("Please enter both a name and URL (URL is empty)")]
    EmptyUrl,

    /// URL did not parse after normalisation
    #[error("Please enter a valid URL: '{0}'")]
    InvalidUrl(String),
}

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

fn has_web_scheme(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with(HTTP_PREFIX) || lower.starts_with(HTTPS_PREFIX)
}

/// Trims a display name and rejects it if nothing is left
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Trims, auto-prefixes and parses a URL
///
/// Returns the string to store.
pub fn normalize_url(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let candidate = if has_web_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{}{}", HTTPS_PREFIX, trimmed)
    };

    let parsed = Url::parse(&candidate)
        .map_err(|_| ValidationError::InvalidUrl(candidate.clone()))?;

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::InvalidUrl(candidate));
    }

    Ok(candidate)
}

/// Validates a complete name/URL pair and returns the normalised shortcut
///
/// Checks, in order:
/// - Name is non-empty
/// - URL is non-empty
/// - URL parses once prefixed
pub fn validate_shortcut(name: &str, url: &str) -> Result<Shortcut, ValidationError> {
    let name = validate_name(name)?;

    if url.trim().is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let url = normalize_url(url)?;
    Ok(Shortcut { name, url })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_missing_scheme() {
        assert_eq!(
            normalize_url("mail.example.com"),
            Ok("https://mail.example.com".to_string())
        );
    }

    #[test]
    fn test_keeps_existing_scheme() {
        assert_eq!(
            normalize_url("http://intranet.local/wiki"),
            Ok("http://intranet.local/wiki".to_string())
        );
        assert_eq!(
            normalize_url("https://github.com"),
            Ok("https://github.com".to_string())
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            normalize_url("  github.com  "),
            Ok("https://github.com".to_string())
        );
        assert_eq!(validate_name("  Mail "), Ok("Mail".to_string()));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(validate_name("   "), Err(ValidationError::EmptyName));
        assert_eq!(normalize_url(""), Err(ValidationError::EmptyUrl));
    }

    #[test]
    fn test_rejects_unparseable_url() {
        assert!(matches!(
            normalize_url("https://"),
            Err(ValidationError::InvalidUrl(_))
        ));
        assert!(matches!(
            normalize_url("https://[::1"),
            Err(ValidationError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_name_checked_before_url() {
        assert_eq!(
            validate_shortcut("", "not even a url"),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate_shortcut("Mail", "  "),
            Err(ValidationError::EmptyUrl)
        );
    }
}
