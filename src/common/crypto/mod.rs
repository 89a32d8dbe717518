/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use sha1::digest::Output;

use super::headers::Writer;
use crate::Result;

mod rust_crypto;
pub use rust_crypto::RsaKey;

/// Private key capability used to produce the `b=` tag.
///
/// The only operation the signing pipeline needs is producing a signature
/// over a finished header hash, which keeps hardware-backed implementations
/// possible without touching the canonicalization code.
pub trait SigningKey {
    type Hasher: HashImpl;

    fn sign(&self, hash: HashOutput) -> Result<Vec<u8>>;

    fn algorithm(&self) -> Algorithm;
}

pub trait HashContext: Writer + Sized {
    fn complete(self) -> HashOutput;
}

pub trait HashImpl {
    type Context: HashContext;

    fn hasher() -> Self::Context;
}

#[derive(Clone, Copy)]
pub struct Sha1;

#[derive(Clone, Copy)]
pub struct Sha256;

#[non_exhaustive]
pub enum HashOutput {
    Sha1(Output<sha1::Sha1>),
    Sha256(Output<sha2::Sha256>),
}

impl AsRef<[u8]> for HashOutput {
    fn as_ref(&self) -> &[u8] {
        match self {
            Self::Sha1(output) => output.as_ref(),
            Self::Sha256(output) => output.as_ref(),
        }
    }
}

/// Signature algorithm as it appears in the `a=` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    RsaSha1,
    RsaSha256,
}
