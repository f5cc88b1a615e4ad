//! Obsidian Advanced URI links
//!
//! Builds `obsidian://advanced-uri` deep links for opening, appending to,
//! and prepending to vault notes. Only link construction lives here;
//! launching the URI is the caller's business.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{OttoError, OttoResult};

/// Everything outside the RFC 3986 unreserved set is escaped in query
/// values.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// How written text lands in the note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Append,
    Prepend,
    Overwrite,
}

impl WriteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteMode::Append => "append",
            WriteMode::Prepend => "prepend",
            WriteMode::Overwrite => "overwrite",
        }
    }
}

/// Builder for an Advanced URI deep link.
///
/// Parameter order is fixed (vault, filepath/daily, heading, data, mode)
/// so a given link is stable across runs.
#[derive(Debug, Clone)]
pub struct VaultLink {
    vault: String,
    filepath: Option<String>,
    daily: bool,
    heading: Option<String>,
    payload: Option<(WriteMode, String)>,
}

impl VaultLink {
    pub fn new(vault: impl Into<String>) -> Self {
        Self {
            vault: vault.into(),
            filepath: None,
            daily: false,
            heading: None,
            payload: None,
        }
    }

    /// Point the link at a note path inside the vault.
    pub fn with_file(mut self, filepath: impl Into<String>) -> Self {
        self.filepath = Some(filepath.into());
        self
    }

    /// Point the link at today's daily note. Takes precedence over a
    /// file path.
    pub fn with_daily(mut self) -> Self {
        self.daily = true;
        self
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Attach text to write and how to write it.
    pub fn with_payload(mut self, mode: WriteMode, text: impl Into<String>) -> Self {
        self.payload = Some((mode, text.into()));
        self
    }

    /// Render the deep link.
    pub fn to_uri(&self) -> OttoResult<String> {
        if self.vault.is_empty() {
            return Err(OttoError::NoVault);
        }

        let mut params: Vec<(&str, &str)> = vec![("vault", self.vault.as_str())];
        if self.daily {
            params.push(("daily", "true"));
        } else if let Some(filepath) = &self.filepath {
            params.push(("filepath", filepath));
        }
        if let Some(heading) = &self.heading {
            params.push(("heading", heading));
        }
        if let Some((mode, text)) = &self.payload {
            if text.is_empty() {
                return Err(OttoError::EmptyPayload {
                    mode: mode.as_str().to_string(),
                });
            }
            params.push(("data", text));
            params.push(("mode", mode.as_str()));
        }

        let query = params
            .into_iter()
            .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(format!("obsidian://advanced-uri?{query}"))
    }
}
