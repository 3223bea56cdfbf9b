//! Provide the path-notation scanner.

use alloc::string::{String, ToString};
use core::mem;

use fastvec::FastVec;
use thiserror::Error;

use crate::key::Key;
use crate::path::Path;

// -----------------------------------------------------------------------------
// Error

/// Error for a structurally invalid path string.
///
/// Raised only while scanning, before any tree access, and only for a
/// delimiter appearing inside an unterminated bracket segment. Missing
/// branches are not errors; see the walkers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unexpected `{found}` within brackets at character {offset} in property path `{path}`")]
pub struct PathSyntaxError {
    /// The offending character.
    pub found: char,
    /// 0-based character offset of `found` in the scanned string.
    pub offset: usize,
    /// The complete path input.
    pub path: String,
}

// -----------------------------------------------------------------------------
// Scanner

/// Scans a dot/bracket notation string into its key sequence.
///
/// One pass, four pieces of state: the escape flag, the bracket flag, the
/// segment accumulator, and the output. `\` escapes the next character;
/// `[` and `.` end the current segment; `]` closes a bracket segment,
/// stripping one pair of matching quotes when present. A leading empty
/// segment is dropped so paths may begin with `[0]` or `.0`; the final
/// segment is always kept.
pub(crate) fn parse_path(path: &str) -> Result<Path, PathSyntaxError> {
    let mut keys: FastVec<Key, 8> = FastVec::new();
    let out = keys.data();

    let mut segment = String::new();
    let mut escape = false;
    let mut brackets = false;
    let mut leading = true;

    for (offset, ch) in path.chars().enumerate() {
        let special = !escape && matches!(ch, '\\' | '[' | ']' | '.');
        if !special {
            segment.push(ch);
            escape = false;
            continue;
        }

        if brackets && ch != ']' {
            return Err(PathSyntaxError {
                found: ch,
                offset,
                path: path.to_string(),
            });
        }

        match ch {
            '\\' => escape = true,
            ']' => {
                if brackets {
                    brackets = false;
                    strip_matching_quotes(&mut segment);
                }
            }
            // `[` and `.` both end the current segment
            _ => {
                if ch == '[' {
                    brackets = true;
                }
                if leading && segment.is_empty() {
                    // allow `[0]` or `.0`
                } else {
                    out.push(Key::Name(mem::take(&mut segment)));
                }
                leading = false;
            }
        }
    }

    // capture the final segment
    out.push(Key::Name(segment));

    Ok(Path::from_boxed(keys.into_boxed_slice()))
}

/// Strips one pair of matching outer quotes from a bracket segment, making
/// `level1["value"]` and `level1.value` address the same key.
fn strip_matching_quotes(segment: &mut String) {
    let bytes = segment.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        segment.pop();
        segment.remove(0);
    }
}

// -----------------------------------------------------------------------------
// Tests
