//! Idempotent splicing of generated fragments into aggregator files.
//!
//! Aggregator files (route tables, import indexes, stylesheet partial lists)
//! carry one marker token per [`Placeholder`]. Splicing a fragment replaces
//! the marker with the fragment followed by a fresh copy of the marker, so any
//! number of later runs can keep appending at the same spot. A fragment that
//! already appears verbatim anywhere in the file is not inserted again.
//!
//! Only exact-text search is used; the files are never parsed, so fragments
//! that differ by whitespace are treated as distinct entries.

mod placeholder;

use std::{borrow::Cow, path::Path};

use stencil_core::{Error, Result, Storage};

pub use placeholder::Placeholder;

/// One fragment to insert at one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub placeholder: Placeholder,
    pub fragment: String,
}

impl Splice {
    pub fn new(placeholder: Placeholder, fragment: impl Into<String>) -> Self {
        Self {
            placeholder,
            fragment: fragment.into(),
        }
    }
}

/// What a successful splice did to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// The fragment was inserted before the placeholder.
    Inserted,
    /// The fragment was already present; the text is unchanged.
    AlreadyPresent,
}

/// Splice `fragment` into `text` at `placeholder`.
///
/// Returns the text borrowed and unchanged when the fragment is already
/// present, or an owned copy with the fragment inserted. The placeholder must
/// be present either way: a file whose marker was removed can no longer
/// receive entries, which is reported as [`Error::MissingPlaceholder`].
///
/// The inserted fragment takes the indentation of the marker's line and the
/// marker is re-emitted on its own line right after it.
pub fn splice<'t>(text: &'t str, placeholder: Placeholder, fragment: &str) -> Result<Cow<'t, str>> {
    let token = placeholder.token();
    let Some(at) = text.find(token) else {
        return Err(Error::MissingPlaceholder {
            path: None,
            placeholder: placeholder.name().to_string(),
            token: token.to_string(),
        });
    };

    if text.matches(token).nth(1).is_some() {
        tracing::warn!(%placeholder, "placeholder occurs more than once, using the first");
    }

    if text.contains(fragment) {
        tracing::debug!(%placeholder, "fragment already present");
        return Ok(Cow::Borrowed(text));
    }

    let indent = indent_before(text, at);
    let separator = if fragment.ends_with('\n') { "" } else { "\n" };

    let mut out = String::with_capacity(text.len() + fragment.len() + indent.len() + 1);
    out.push_str(&text[..at]);
    out.push_str(fragment);
    out.push_str(separator);
    out.push_str(indent);
    out.push_str(&text[at..]);
    Ok(Cow::Owned(out))
}

/// Whitespace in front of the first `placeholder` marker on its line.
///
/// Empty when the marker follows code on the same line. Callers building
/// multi-line fragments use it to indent the lines after the first, which
/// [`splice`] inserts verbatim.
pub fn marker_indent(text: &str, placeholder: Placeholder) -> Option<&str> {
    text.find(placeholder.token()).map(|at| indent_before(text, at))
}

fn indent_before(text: &str, at: usize) -> &str {
    let line_start = text[..at].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &text[line_start..at];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        prefix
    } else {
        ""
    }
}

/// Apply several splices to the same text, in order.
///
/// Either every placeholder is found or the text is left untouched.
pub fn splice_all(text: &str, splices: &[Splice]) -> Result<(String, Vec<SpliceOutcome>)> {
    let mut current = text.to_string();
    let mut outcomes = Vec::with_capacity(splices.len());

    for s in splices {
        let next = match splice(&current, s.placeholder, &s.fragment)? {
            Cow::Borrowed(_) => {
                outcomes.push(SpliceOutcome::AlreadyPresent);
                continue;
            }
            Cow::Owned(next) => next,
        };
        outcomes.push(SpliceOutcome::Inserted);
        current = next;
    }

    Ok((current, outcomes))
}

/// Read `path`, apply `splices` and write the result back.
///
/// Nothing is written when every fragment was already present or when a
/// placeholder is missing.
pub fn splice_file(
    storage: &dyn Storage,
    path: &Path,
    splices: &[Splice],
) -> Result<Vec<SpliceOutcome>> {
    let text = storage.read_to_string(path)?;
    let (updated, outcomes) = splice_all(&text, splices).map_err(|e| e.in_file(path))?;

    if outcomes.contains(&SpliceOutcome::Inserted) {
        storage.write(path, &updated)?;
        tracing::info!(path = %path.display(), "spliced");
    } else {
        tracing::debug!(path = %path.display(), "aggregator already up to date");
    }
    Ok(outcomes)
}
