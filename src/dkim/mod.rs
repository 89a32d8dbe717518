/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

pub mod canonicalize;
pub mod headers;
pub mod sign;

use crate::common::crypto::{Algorithm, SigningKey};

/// Header fields eligible for signing unless overridden, as recommended
/// by RFC 6376 section 5.4.1. The list is ordered; it determines the
/// order of the `h=` tag. Every physical instance of a listed field is
/// signed, so adding a field here also protects against its injection.
pub const DEFAULT_SIGN_HEADERS: &[&str] = &[
    "From",
    "Reply-To",
    "Subject",
    "Date",
    "To",
    "Cc",
    "Resent-Date",
    "Resent-From",
    "Resent-Sender",
    "Resent-To",
    "Resent-Cc",
    "In-Reply-To",
    "References",
    "List-Id",
    "List-Help",
    "List-Unsubscribe",
    "List-Subscribe",
    "List-Post",
    "List-Owner",
    "List-Archive",
];

/// An assembled DKIM-Signature header field.
///
/// Obtained from [`sign::MessageSigner`]; render it with
/// [`crate::common::headers::HeaderWriter::to_header`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Signature {
    pub(crate) a: Algorithm,
    pub(crate) d: String,
    pub(crate) s: String,
    pub(crate) h: Vec<String>,
    pub(crate) bh: Vec<u8>,
    pub(crate) b: Vec<u8>,
}

/// Reusable DKIM signing configuration: key, signing identity and the
/// ordered list of header fields to sign.
#[derive(Debug)]
pub struct DkimSigner<T: SigningKey> {
    pub(crate) key: T,
    pub(crate) domain: String,
    pub(crate) selector: String,
    pub(crate) sign_headers: Vec<String>,
}
