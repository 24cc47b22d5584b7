// SPDX-License-Identifier: Apache-2.0
use crate::Error;
use multibase::Base;

/// Every multibase encoding and its canonical name, in table order
const BASES: &[(Base, &str)] = &[
    (Base::Identity, "identity"),
    (Base::Base2, "base2"),
    (Base::Base8, "base8"),
    (Base::Base10, "base10"),
    (Base::Base16Lower, "base16"),
    (Base::Base16Upper, "base16upper"),
    (Base::Base32HexLower, "base32hex"),
    (Base::Base32HexUpper, "base32hexupper"),
    (Base::Base32HexPadLower, "base32hexpad"),
    (Base::Base32HexPadUpper, "base32hexpadupper"),
    (Base::Base32Lower, "base32"),
    (Base::Base32Upper, "base32upper"),
    (Base::Base32PadLower, "base32pad"),
    (Base::Base32PadUpper, "base32padupper"),
    (Base::Base32Z, "base32z"),
    (Base::Base36Lower, "base36"),
    (Base::Base36Upper, "base36upper"),
    (Base::Base58Flickr, "base58flickr"),
    (Base::Base58Btc, "base58btc"),
    (Base::Base64, "base64"),
    (Base::Base64Pad, "base64pad"),
    (Base::Base64Url, "base64url"),
    (Base::Base64UrlPad, "base64urlpad"),
];

/// Get the canonical multibase name of the given base
pub fn base_name(b: Base) -> &'static str {
    BASES
        .iter()
        .find(|(base, _)| *base == b)
        .map(|(_, name)| *name)
        .unwrap_or("identity")
}

/// Look up a base by its canonical multibase name
pub fn base_from_name(name: &str) -> Result<Base, Error> {
    BASES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(base, _)| *base)
        .ok_or_else(|| Error::UnknownBaseName(name.to_string()))
}

/// Returns the base if the first character of the string is a known
/// multibase prefix and the rest of the string decodes in that base
pub fn is_encoded(s: &str) -> Option<Base> {
    let mut chars = s.chars();
    let base = Base::from_code(chars.next()?).ok()?;
    base.decode(chars.as_str()).ok()?;
    Some(base)
}

/// Iterator over the multibase encodings that follow a given base in table
/// order. Starting at [`Base::Identity`] visits every real encoding.
#[derive(Clone, Debug)]
pub struct BaseIter(usize);

impl From<Base> for BaseIter {
    fn from(b: Base) -> Self {
        let i = BASES
            .iter()
            .position(|(base, _)| *base == b)
            .unwrap_or(BASES.len());
        Self(i)
    }
}

impl Iterator for BaseIter {
    type Item = Base;

    fn next(&mut self) -> Option<Self::Item> {
        self.0 += 1;
        BASES.get(self.0).map(|(base, _)| *base)
    }
}
