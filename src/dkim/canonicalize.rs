/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use crate::common::headers::Writer;

/// Incremental body hasher using "simple" canonicalization.
///
/// Body content may be fed in chunks of any size; the digest is identical
/// to hashing the whole body at once. Simple canonicalization leaves the
/// body untouched except that all empty lines at the end are replaced by
/// a single CRLF, so the trailing CR/LF run of each chunk is held back
/// until the next write proves it is not at the end of the body.
pub struct BodyHasher<H> {
    hasher: H,
    crlf: Vec<u8>,
}

impl<H: Writer> BodyHasher<H> {
    pub fn new(hasher: H) -> Self {
        BodyHasher {
            hasher,
            crlf: Vec::with_capacity(8),
        }
    }

    /// Feed the next chunk of raw body content.
    ///
    /// The body is expected to use proper CRLF line endings. An empty
    /// chunk is a no-op.
    pub fn write(&mut self, chunk: &[u8]) {
        let mut end = chunk.len();
        while end > 0 && matches!(chunk[end - 1], b'\r' | b'\n') {
            end -= 1;
        }

        if end > 0 {
            // This chunk has line content, so the run held back by the
            // previous write was not trailing after all.
            if !self.crlf.is_empty() {
                self.hasher.write(&self.crlf);
                self.crlf.clear();
            }
            self.hasher.write(&chunk[..end]);
        }
        if end < chunk.len() {
            self.crlf.extend_from_slice(&chunk[end..]);
        }
    }

    /// Discards any buffered trailing empty lines, terminates the body
    /// with a single CRLF and returns the digest. An empty body hashes
    /// as exactly one CRLF.
    pub fn finish(mut self) -> H {
        self.hasher.write(b"\r\n");
        self.hasher
    }
}

/// Header hasher using "relaxed" canonicalization.
///
/// Values must arrive already unfolded, with leading and trailing
/// whitespace trimmed and inner whitespace runs collapsed to single
/// spaces; only the header name is canonicalized here.
pub struct HeaderHasher<H> {
    hasher: H,
    names: Vec<String>,
}

impl<H: Writer> HeaderHasher<H> {
    pub fn new(hasher: H) -> Self {
        HeaderHasher {
            hasher,
            names: Vec::with_capacity(16),
        }
    }

    /// Digests one header as `name:value` plus CRLF, lowercasing the
    /// name, and records the original-case name for the `h=` tag.
    pub fn add_header(&mut self, name: &str, value: &str) {
        for &ch in name.as_bytes() {
            self.hasher.write(&[ch.to_ascii_lowercase()]);
        }
        self.hasher.write(b":");
        self.hasher.write(value.as_bytes());
        self.hasher.write(b"\r\n");
        self.names.push(name.to_string());
    }

    /// Header names added so far, in digestion order. This is the value
    /// of the `h=` tag.
    pub fn header_list(&self) -> &[String] {
        &self.names
    }

    /// Digests the signature being built as the final header and returns
    /// the digest. The value must be the complete tag string with an
    /// empty `b=` tag; it is not recorded in the header list.
    pub fn finish(mut self, unsigned_signature: &[u8]) -> H {
        self.hasher.write(b"dkim-signature:");
        self.hasher.write(unsigned_signature);
        self.hasher
    }
}
