//! Character encodings and encoded byte length.
//!
//! Names resolve through the WHATWG label registry (`encoding_rs`), so
//! `shift_jis`, `Shift-JIS`, `sjis` and `windows-31j` all name the same
//! encoding. UTF-16 and UTF-32 are measured arithmetically because
//! `encoding_rs` only decodes them.

use encoding_rs::{EncoderResult, Encoding};
use std::fmt;

/// Scratch buffer size for streaming legacy encoders. Large enough for the
/// longest single-character output of any supported encoder.
const ENCODE_CHUNK: usize = 1024;

/// Unmappable characters are replaced by a single `?`.
const SUBSTITUTION_LEN: u64 = 1;

/// A character encoding that text can be measured in.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// UTF-8, the default.
    #[default]
    Utf8,
    /// UTF-16 in 2-byte code units, optionally preceded by a byte-order mark.
    Utf16 {
        /// Count the 2-byte byte-order mark.
        bom: bool,
        /// Big-endian (only affects the reported name).
        big_endian: bool,
    },
    /// UTF-32, 4 bytes per scalar value.
    Utf32 {
        /// Big-endian (only affects the reported name).
        big_endian: bool,
    },
    /// Any other encoding known to `encoding_rs`.
    Legacy(&'static Encoding),
}

impl Charset {
    /// Resolves an encoding name. Returns `None` for unknown names and for
    /// the `replacement` pseudo-encoding, which cannot encode.
    ///
    /// # Examples
    ///
    /// ```
    /// use gauge_validator::validators::Charset;
    ///
    /// assert_eq!(Charset::for_label("Shift-JIS").map(|c| c.name()), Some("Shift_JIS"));
    /// assert_eq!(Charset::for_label(" utf-8 "), Some(Charset::Utf8));
    /// assert_eq!(Charset::for_label("illegal-charset"), None);
    /// ```
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        match label.as_str() {
            "utf-16" | "utf16" | "unicode" => {
                return Some(Self::Utf16 {
                    bom: true,
                    big_endian: true,
                });
            }
            "utf-32" | "utf32" | "utf-32be" => return Some(Self::Utf32 { big_endian: true }),
            "utf-32le" => return Some(Self::Utf32 { big_endian: false }),
            _ => {}
        }

        let encoding = Encoding::for_label(label.as_bytes())?;
        if encoding == encoding_rs::UTF_8 {
            Some(Self::Utf8)
        } else if encoding == encoding_rs::UTF_16LE || encoding == encoding_rs::UTF_16BE {
            Some(Self::Utf16 {
                bom: false,
                big_endian: encoding == encoding_rs::UTF_16BE,
            })
        } else if encoding == encoding_rs::REPLACEMENT {
            None
        } else {
            Some(Self::Legacy(encoding))
        }
    }

    /// Canonical name of the encoding.
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16 { bom: true, .. } => "UTF-16",
            Self::Utf16 {
                big_endian: true, ..
            } => "UTF-16BE",
            Self::Utf16 { .. } => "UTF-16LE",
            Self::Utf32 { big_endian: true } => "UTF-32",
            Self::Utf32 { big_endian: false } => "UTF-32LE",
            Self::Legacy(encoding) => encoding.name(),
        }
    }

    /// Number of bytes `input` occupies in this encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use gauge_validator::validators::Charset;
    ///
    /// assert_eq!(Charset::Utf8.byte_len("あ"), 3);
    /// assert_eq!(Charset::for_label("shift_jis").unwrap().byte_len("あa"), 3);
    /// ```
    pub fn byte_len(self, input: &str) -> u64 {
        match self {
            Self::Utf8 => input.len() as u64,
            Self::Utf16 { bom, .. } => {
                // the byte-order mark is only written ahead of actual content
                let units = input.encode_utf16().count() as u64 * 2;
                if bom && units > 0 { units + 2 } else { units }
            }
            Self::Utf32 { .. } => input.chars().count() as u64 * 4,
            Self::Legacy(encoding) => legacy_byte_len(encoding, input),
        }
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.name()).finish()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Streams `input` through the encoder into a scratch buffer, counting
/// output bytes without keeping them.
fn legacy_byte_len(encoding: &'static Encoding, input: &str) -> u64 {
    let mut encoder = encoding.new_encoder();
    let mut buffer = [0u8; ENCODE_CHUNK];
    let mut rest = input;
    let mut total = 0u64;

    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(rest, &mut buffer, true);
        total += written as u64;
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => return total,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(_) => total += SUBSTITUTION_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn charset(label: &str) -> Charset {
        Charset::for_label(label).unwrap()
    }

    #[rstest]
    #[case("utf-8", "あ", 3)]
    #[case("utf-8", "aa", 2)]
    #[case("utf-8", "", 0)]
    #[case("shift-jis", "あ", 2)]
    #[case("shift_jis", "あああa", 7)]
    #[case("euc-jp", "あa", 3)]
    #[case("iso-8859-1", "caf\u{e9}", 4)]
    #[case("us-ascii", "abc", 3)]
    #[case("utf-16le", "あa", 4)]
    #[case("utf-16be", "\u{1f600}", 4)]
    #[case("utf-16", "a", 4)]
    #[case("utf-16", "", 0)]
    #[case("unicode", "a", 4)]
    #[case("utf-16le", "", 0)]
    #[case("utf-32", "あa", 8)]
    fn measures_bytes(#[case] label: &str, #[case] input: &str, #[case] expected: u64) {
        assert_eq!(charset(label).byte_len(input), expected);
    }

    #[test]
    fn unmappable_characters_count_as_substitution() {
        // U+1F600 has no Shift_JIS mapping
        assert_eq!(charset("shift_jis").byte_len("a\u{1f600}"), 2);
        assert_eq!(charset("windows-1252").byte_len("\u{3042}"), 1);
    }

    #[test]
    fn long_input_spans_several_chunks() {
        let input = "あ".repeat(ENCODE_CHUNK * 3);
        assert_eq!(
            charset("shift_jis").byte_len(&input),
            (ENCODE_CHUNK * 3 * 2) as u64
        );
    }

    #[test]
    fn labels_are_case_and_space_insensitive() {
        assert_eq!(charset("  SJIS "), charset("shift_jis"));
        assert_eq!(charset("UTF-8"), Charset::Utf8);
        assert_eq!(charset("utf-16le").name(), "UTF-16LE");
    }

    #[rstest]
    #[case("illegal-charset")]
    #[case("")]
    #[case("replacement")]
    #[case("iso-2022-kr")]
    fn rejects_unknown_or_unencodable(#[case] label: &str) {
        assert_eq!(Charset::for_label(label), None);
    }
}
