//! Archive → text encoding for embedding inside a double-quoted shell argument.
//!
//! Standard base64 (RFC 4648, padded) only emits `A-Z a-z 0-9 + / =`, none of which
//! the shell interprets between double quotes. The staging container reverses it with
//! `base64 -d`, so whatever bytes were uploaded land on disk unchanged.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Base64 text of an uploaded archive.
///
/// Only constructible through [`encode_payload`], so the alphabet guarantee holds for every value.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedPayload(String);

impl EncodedPayload {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for EncodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedPayload({} chars)", self.0.len())
    }
}

/// Encode raw archive bytes.
///
/// ```
/// use kgrade_core::encode_payload;
///
/// let encoded = encode_payload(b"PK\x03\x04");
/// assert_eq!(encoded.as_str(), "UEsDBA==");
/// ```
pub fn encode_payload(bytes: &[u8]) -> EncodedPayload {
    let text = STANDARD.encode(bytes);
    debug_assert!(text.chars().all(is_shell_inert));
    EncodedPayload(text)
}

/// Whether `c` can appear inside `"..."` in POSIX sh without changing meaning.
pub(crate) fn is_shell_inert(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(encoded: &EncodedPayload) -> Vec<u8> {
        STANDARD.decode(encoded.as_str()).expect("valid base64")
    }

    // xorshift; deterministic pseudo-random archives without pulling in an rng crate
    fn pseudo_random_bytes(seed: u64, len: usize) -> Vec<u8> {
        let mut state = seed | 1;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state & 0xff) as u8
            })
            .collect()
    }

    #[test]
    fn roundtrip_every_byte_value() {
        let all: Vec<u8> = (0..=255u8).collect();
        assert_eq!(decode(&encode_payload(&all)), all);
    }

    #[test]
    fn roundtrip_hostile_payloads() {
        let cases: [&[u8]; 8] = [
            b"",
            b"\0",
            b"\0\0\0\0",
            b"\"; rm -rf / #",
            b"$(reboot) `id` ${HOME}",
            b"\\\n\r\t\x1b[31m",
            b"'\"'\"'",
            b"!!\x7f\xff\xfe",
        ];

        for bytes in cases {
            let encoded = encode_payload(bytes);
            assert_eq!(decode(&encoded), bytes, "roundtrip failed for {bytes:?}");
        }
    }

    #[test]
    fn roundtrip_pseudo_random_archives_of_every_padding_class() {
        for len in [1, 2, 3, 4, 5, 63, 64, 65, 4096, 65_537] {
            let bytes = pseudo_random_bytes(len as u64, len);
            assert_eq!(decode(&encode_payload(&bytes)), bytes, "len {len}");
        }
    }

    #[test]
    fn alphabet_is_shell_inert() {
        let bytes = pseudo_random_bytes(42, 10_000);
        let encoded = encode_payload(&bytes);

        assert!(encoded.as_str().chars().all(is_shell_inert));
        for c in ['"', '$', '`', '\\', '\'', ' ', '\n', ';', '!'] {
            assert!(!encoded.as_str().contains(c), "found {c:?}");
        }
    }

    #[test]
    fn debug_does_not_dump_payload() {
        let encoded = encode_payload(b"hello");
        assert_eq!(format!("{encoded:?}"), "EncodedPayload(8 chars)");
    }
}
