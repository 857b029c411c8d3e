// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Percent-encoding of single path segments.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the unreserved characters of a URI component.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode `raw` so it stays one path segment, e.g. `a#b` -> `a%23b`.
pub fn encode_segment(raw: impl AsRef<str>) -> String {
    utf8_percent_encode(raw.as_ref(), SEGMENT).to_string()
}

/// Inverse of [`encode_segment`]. Invalid UTF-8 is replaced, not rejected.
pub fn decode_segment(encoded: &str) -> String {
    percent_decode_str(encoded).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
