//! Encoding detection and decoding for plain-text files.
//!
//! The policy is ordered and deterministic: a byte-order mark wins outright, then a strict
//! UTF-8 probe over the leading bytes, and failing both we assume a legacy GB2312/GBK file, as
//! most unmarked non-UTF-8 novels are. Every branch decodes with replacement so the result is
//! always a string; only reading the bytes off disk can fail.

use crate::error::{ReaderError, Result};
use encoding_rs::{DecoderResult, Encoding, UTF_16BE, UTF_16LE, UTF_8};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Number of leading bytes inspected when deciding whether unmarked input is UTF-8.
pub const UTF8_PROBE_LEN: usize = 1000;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

/// WHATWG label for the legacy Chinese codepage; resolves to GBK.
const LEGACY_LABEL: &[u8] = b"gb2312";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// The encoding chosen for a file.
pub enum TextEncoding {
    /// UTF-8 introduced by a byte-order mark.
    Utf8Bom,
    /// UTF-16 little-endian introduced by `FF FE`.
    Utf16Le,
    /// UTF-16 big-endian introduced by `FE FF`.
    Utf16Be,
    /// UTF-8 without a byte-order mark.
    Utf8,
    /// Legacy double-byte Chinese (GB2312/GBK).
    Gbk,
    /// Lossy UTF-8, used when the legacy codepage is unavailable.
    SystemDefault,
}

impl TextEncoding {
    #[must_use]
    /// Short human-readable label for status lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8Bom => "UTF-8 (BOM)",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf8 => "UTF-8",
            Self::Gbk => "GBK",
            Self::SystemDefault => "system default",
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Text decoded from a byte buffer, with the encoding that produced it.
pub struct Decoded {
    /// The full decoded text, without any byte-order mark.
    pub text: String,
    /// Encoding selected by [`detect`].
    pub encoding: TextEncoding,
    /// Whether any malformed sequence was replaced with U+FFFD.
    pub had_errors: bool,
    /// Length of the undecoded input in bytes.
    pub byte_len: usize,
}

#[must_use]
/// Choose an encoding for `bytes` without decoding the whole buffer.
pub fn detect(bytes: &[u8]) -> TextEncoding {
    if bytes.starts_with(UTF8_BOM) {
        TextEncoding::Utf8Bom
    } else if bytes.starts_with(UTF16LE_BOM) {
        TextEncoding::Utf16Le
    } else if bytes.starts_with(UTF16BE_BOM) {
        TextEncoding::Utf16Be
    } else if is_likely_utf8(bytes) {
        TextEncoding::Utf8
    } else if Encoding::for_label(LEGACY_LABEL).is_some() {
        TextEncoding::Gbk
    } else {
        log::warn!("legacy codepage unavailable, falling back to lossy UTF-8");
        TextEncoding::SystemDefault
    }
}

#[must_use]
/// Strictly decode up to [`UTF8_PROBE_LEN`] leading bytes as UTF-8.
///
/// A multi-byte sequence cut off by the probe window is not malformed: the decoder is told more
/// input may follow, so it holds the partial sequence rather than reporting it. A literal
/// U+FFFD in the probed text also rejects the input, since it usually marks an earlier lossy
/// conversion.
pub fn is_likely_utf8(bytes: &[u8]) -> bool {
    let probe = &bytes[..bytes.len().min(UTF8_PROBE_LEN)];
    let mut decoder = UTF_8.new_decoder_without_bom_handling();
    let Some(capacity) = decoder.max_utf8_buffer_length_without_replacement(probe.len()) else {
        return false;
    };
    let mut text = String::with_capacity(capacity);
    let (result, _read) = decoder.decode_to_string_without_replacement(probe, &mut text, false);
    match result {
        DecoderResult::InputEmpty => !text.contains(char::REPLACEMENT_CHARACTER),
        DecoderResult::Malformed(..) | DecoderResult::OutputFull => false,
    }
}

#[must_use]
/// Detect the encoding of `bytes` and decode all of it.
pub fn decode(bytes: &[u8]) -> Decoded {
    let encoding = detect(bytes);
    let (text, had_errors) = match encoding {
        TextEncoding::Utf8Bom | TextEncoding::Utf8 => UTF_8.decode_with_bom_removal(bytes),
        TextEncoding::Utf16Le => UTF_16LE.decode_with_bom_removal(bytes),
        TextEncoding::Utf16Be => UTF_16BE.decode_with_bom_removal(bytes),
        TextEncoding::Gbk => match Encoding::for_label(LEGACY_LABEL) {
            Some(legacy) => legacy.decode_without_bom_handling(bytes),
            None => (String::from_utf8_lossy(bytes), true),
        },
        TextEncoding::SystemDefault => {
            let text = String::from_utf8_lossy(bytes);
            let had_errors = matches!(text, Cow::Owned(_));
            (text, had_errors)
        }
    };

    if had_errors {
        log::warn!("decoding as {encoding} replaced malformed input");
    }
    log::debug!("decoded {} bytes as {encoding}", bytes.len());

    Decoded {
        text: text.into_owned(),
        encoding,
        had_errors,
        byte_len: bytes.len(),
    }
}

/// Read the file at `path` and decode it.
///
/// The byte buffer is dropped once decoded.
///
/// # Errors
///
/// Returns [`ReaderError::Io`] if the file is missing, unreadable, or permission is denied.
pub fn read_file(path: &Path) -> Result<Decoded> {
    let bytes = fs::read(path).map_err(|source| ReaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(&bytes))
}

#[cfg(test)]
#[path = "tests/encoding.rs"]
mod tests;
