/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use std::fmt::{Display, Formatter};

use crate::common::{
    crypto::Algorithm,
    headers::{HeaderWriter, Writer},
};

use super::Signature;

impl Signature {
    /// Serializes the signature with a fixed tag order.
    ///
    /// With `as_header` unset this is the unfolded tag string that gets
    /// digested into the header hash, where `b=` must still be empty.
    /// With `as_header` set, `h=`, `bh=` and `b=` move to tab-indented
    /// continuation lines and the `b=` value is folded.
    pub fn write(&self, writer: &mut impl Writer, as_header: bool) {
        if as_header {
            writer.write(b"DKIM-Signature: ");
        }
        writer.write(b"v=1; a=");
        writer.write(match self.a {
            Algorithm::RsaSha1 => b"rsa-sha1".as_slice(),
            Algorithm::RsaSha256 => b"rsa-sha256".as_slice(),
        });
        writer.write(b"; c=relaxed/simple");
        for (tag, value) in [(&b"; s="[..], &self.s), (&b"; d="[..], &self.d)] {
            writer.write(tag);
            writer.write(value.as_bytes());
        }

        writer.write(if as_header {
            b";\r\n\th=".as_slice()
        } else {
            b"; h=".as_slice()
        });
        for (num, h) in self.h.iter().enumerate() {
            if num > 0 {
                writer.write(b":");
            }
            writer.write(h.as_bytes());
        }

        writer.write(if as_header {
            b";\r\n\tbh=".as_slice()
        } else {
            b"; bh=".as_slice()
        });
        writer.write(&self.bh);

        writer.write(if as_header {
            b";\r\n\tb=".as_slice()
        } else {
            b"; b=".as_slice()
        });
        if as_header {
            // Fold the signature at 65 characters, then at 66 to make
            // room for the tab continuation.
            let mut b = self.b.as_slice();
            if b.len() > 65 {
                writer.write(&b[..65]);
                b = &b[65..];
                while b.len() > 66 {
                    writer.write(b"\r\n\t");
                    writer.write(&b[..66]);
                    b = &b[66..];
                }
                writer.write(b"\r\n\t");
            }
            writer.write(b);
            writer.write(b"\r\n");
        } else {
            writer.write(&self.b);
        }
    }
}

impl HeaderWriter for Signature {
    fn write_header(&self, writer: &mut impl Writer) {
        self.write(writer, true);
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut buf = Vec::new();
        self.write(&mut buf, false);
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

#[cfg(test)]
mod test {
    use crate::{
        common::{crypto::Algorithm, headers::HeaderWriter},
        dkim::Signature,
    };

    fn signature(b: &str) -> Signature {
        Signature {
            a: Algorithm::RsaSha256,
            d: "example.com".to_string(),
            s: "default".to_string(),
            h: vec!["From".to_string(), "To".to_string()],
            bh: b"frcCV1k9oG9oKj3dpUqdJg1PxRT2RSN/XKdLCPjaYaY=".to_vec(),
            b: b.as_bytes().to_vec(),
        }
    }

    #[test]
    fn signature_fold_long_value() {
        // First line takes 65 characters, continuation lines 66
        let rendered = signature(&"a".repeat(65 + 66 + 66 + 10)).to_header();
        assert_eq!(
            rendered,
            concat!(
                "DKIM-Signature: v=1; a=rsa-sha256; c=relaxed/simple; s=default; d=example.com;\r\n",
                "\th=From:To;\r\n",
                "\tbh=frcCV1k9oG9oKj3dpUqdJg1PxRT2RSN/XKdLCPjaYaY=;\r\n",
                "\tb=aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\r\n",
                "\taaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\r\n",
                "\taaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\r\n",
                "\taaaaaaaaaa\r\n",
            )
        );
    }

    #[test]
    fn signature_fold_boundaries() {
        // 65 characters or less stays on one line
        let rendered = signature(&"b".repeat(65)).to_header();
        assert!(rendered.ends_with(&format!("\tb={}\r\n", "b".repeat(65))));

        // One more character starts a continuation line
        let rendered = signature(&"b".repeat(66)).to_header();
        assert!(rendered.ends_with(&format!("\tb={}\r\n\tb\r\n", "b".repeat(65))));
    }

    #[test]
    fn signature_unsigned_form() {
        assert_eq!(
            signature("").to_string(),
            concat!(
                "v=1; a=rsa-sha256; c=relaxed/simple; s=default; d=example.com; ",
                "h=From:To; ",
                "bh=frcCV1k9oG9oKj3dpUqdJg1PxRT2RSN/XKdLCPjaYaY=; ",
                "b=",
            )
        );
    }
}
