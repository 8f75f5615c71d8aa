//! Patch application and change detection
//!
//! Patches are applied to the serialized document, not the in-memory
//! structs, so that patch paths match exactly what the client last saw.

use crate::playlist::unmarshal;
use attic_core::{Error, Result};

/// Content type clients use for playlist edits
pub const CONTENT_TYPE: &str = "application/json-patch+json";

/// Apply an RFC 6902 JSON-Patch to a serialized playlist document and
/// return the resulting serialized form.
///
/// The input document is left untouched on failure; there is no partial
/// application. A malformed patch or a patch addressing a non-existent
/// path fails with [`Error::Patch`].
pub fn patch(data: &[u8], patch: &[u8]) -> Result<Vec<u8>> {
    let ops: json_patch::Patch =
        serde_json::from_slice(patch).map_err(|e| Error::patch(e.to_string()))?;
    let mut doc: serde_json::Value = serde_json::from_slice(data)?;
    json_patch::patch(&mut doc, &ops).map_err(|e| Error::patch(e.to_string()))?;
    Ok(serde_json::to_vec(&doc)?)
}

/// Compare two serialized playlist documents, ignoring the top-level client
/// cursor fields (`index`, `position`).
///
/// Returns `true` when the descriptive metadata and track entries are equal
/// after normalization, meaning a client holding the previous document does
/// not need to re-fetch the track list.
pub fn compare(before: &[u8], after: &[u8]) -> Result<bool> {
    let a = unmarshal(before)?;
    let b = unmarshal(after)?;
    Ok(a.spiff == b.spiff)
}
