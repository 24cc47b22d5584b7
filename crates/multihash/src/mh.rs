// SPDX-License-Identifier: Apache-2.0
use crate::Error;
use core::fmt;
use digest::Digest;
use multibase::Base;
use multicodec::Codec;
use multitrait::{EncodeInto, TryDecodeFrom};
use multiutil::{CodecInfo, EncodingInfo};
use typenum::{U16, U32, U48};

/// The smallest possible digest record: a one byte algorithm id and a one
/// byte length
pub const MIN_LEN: usize = 2;

/// A self-describing digest record: the hash algorithm codec, the digest
/// length and the digest bytes
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Multihash {
    /// hash codec
    pub(crate) codec: Codec,
    /// hash digest
    pub(crate) hash: Vec<u8>,
}

impl Multihash {
    /// The digest bytes without the header
    pub fn digest(&self) -> &[u8] {
        &self.hash
    }

    /// The digest length in bytes
    pub fn len(&self) -> usize {
        self.hash.len()
    }

    /// True if the digest is empty (only possible with the identity hash)
    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// The header of the digest record: varint algorithm id followed by the
    /// varint digest length
    pub fn prefix(&self) -> Vec<u8> {
        let mut v = self.codec.encode_into();
        v.append(&mut self.hash.len().encode_into());
        v
    }

    /// Decode a digest record from a bare base58btc string (no multibase
    /// prefix character)
    pub fn from_b58(s: &str) -> Result<Self, Error> {
        let v = Base::Base58Btc.decode(s)?;
        Self::try_from(v.as_slice())
    }

    /// Encode the digest record as a bare base58btc string (no multibase
    /// prefix character)
    pub fn to_b58(&self) -> String {
        Base::Base58Btc.encode(self.encode_into())
    }
}

/// Validate that the bytes are exactly one well formed digest record
pub fn validate(bytes: &[u8]) -> Result<(), Error> {
    Multihash::try_from(bytes).map(|_| ())
}

// decodes the algorithm id and declared length, leaving the payload
fn decode_header(bytes: &[u8]) -> Result<(Codec, usize, &[u8]), Error> {
    if bytes.len() < MIN_LEN {
        return Err(Error::TooShort(bytes.len()));
    }
    let (codec, ptr) = Codec::try_decode_from(bytes)?;
    if !codec.is_hash() {
        return Err(Error::NotHash(codec));
    }
    let (len, ptr) = usize::try_decode_from(ptr)?;
    Ok((codec, len, ptr))
}

impl CodecInfo for Multihash {
    /// Return that we are a sha2-256 Multihash by default
    fn preferred_codec() -> Codec {
        Codec::Sha2256
    }

    /// Return the hash algorithm codec
    fn codec(&self) -> Codec {
        self.codec
    }
}

impl EncodingInfo for Multihash {
    fn preferred_encoding() -> Base {
        Base::Base58Btc
    }

    fn encoding(&self) -> Base {
        Self::preferred_encoding()
    }
}

impl EncodeInto for Multihash {
    fn encode_into(&self) -> Vec<u8> {
        let mut v = self.prefix();
        v.extend_from_slice(&self.hash);
        v
    }
}

impl From<&Multihash> for Vec<u8> {
    fn from(mh: &Multihash) -> Vec<u8> {
        mh.encode_into()
    }
}

impl From<Multihash> for Vec<u8> {
    fn from(mh: Multihash) -> Vec<u8> {
        mh.encode_into()
    }
}

/// Decodes exactly one digest record; the length field must account for
/// every remaining byte
impl<'a> TryFrom<&'a [u8]> for Multihash {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        let (codec, len, ptr) = decode_header(bytes)?;
        if ptr.len() != len {
            return Err(Error::LengthMismatch {
                declared: len,
                actual: ptr.len(),
            });
        }
        Ok(Self {
            codec,
            hash: ptr.to_vec(),
        })
    }
}

impl<'a> TryDecodeFrom<'a> for Multihash {
    type Error = Error;

    fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error> {
        let (codec, len, ptr) = decode_header(bytes)?;
        if ptr.len() < len {
            return Err(Error::LengthMismatch {
                declared: len,
                actual: ptr.len(),
            });
        }
        let (hash, ptr) = ptr.split_at(len);
        Ok((
            Self {
                codec,
                hash: hash.to_vec(),
            },
            ptr,
        ))
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} - {}", self.codec, hex::encode(&self.hash))
    }
}

/// Hash builder that takes the codec and the data and produces a Multihash
#[derive(Clone, Debug)]
pub struct Builder {
    codec: Codec,
    hash: Vec<u8>,
}

impl Builder {
    /// hash the data with the given hash algorithm
    pub fn new_from_bytes(codec: Codec, bytes: impl AsRef<[u8]>) -> Result<Self, Error> {
        let data = bytes.as_ref();
        let hash = match codec {
            Codec::Identity => data.to_vec(),
            Codec::Sha1 => sha1::Sha1::digest(data).to_vec(),
            Codec::Sha2224 => sha2::Sha224::digest(data).to_vec(),
            Codec::Sha2256 => sha2::Sha256::digest(data).to_vec(),
            Codec::Sha2384 => sha2::Sha384::digest(data).to_vec(),
            Codec::Sha2512 => sha2::Sha512::digest(data).to_vec(),
            Codec::Sha2512224 => sha2::Sha512_224::digest(data).to_vec(),
            Codec::Sha2512256 => sha2::Sha512_256::digest(data).to_vec(),
            Codec::DblSha2256 => sha2::Sha256::digest(sha2::Sha256::digest(data)).to_vec(),
            Codec::Sha3224 => sha3::Sha3_224::digest(data).to_vec(),
            Codec::Sha3256 => sha3::Sha3_256::digest(data).to_vec(),
            Codec::Sha3384 => sha3::Sha3_384::digest(data).to_vec(),
            Codec::Sha3512 => sha3::Sha3_512::digest(data).to_vec(),
            Codec::Keccak224 => sha3::Keccak224::digest(data).to_vec(),
            Codec::Keccak256 => sha3::Keccak256::digest(data).to_vec(),
            Codec::Keccak384 => sha3::Keccak384::digest(data).to_vec(),
            Codec::Keccak512 => sha3::Keccak512::digest(data).to_vec(),
            Codec::Blake2B256 => blake2::Blake2b::<U32>::digest(data).to_vec(),
            Codec::Blake2B384 => blake2::Blake2b::<U48>::digest(data).to_vec(),
            Codec::Blake2B512 => blake2::Blake2b512::digest(data).to_vec(),
            Codec::Blake2S128 => blake2::Blake2s::<U16>::digest(data).to_vec(),
            Codec::Blake2S256 => blake2::Blake2s256::digest(data).to_vec(),
            Codec::Blake3 => blake3::hash(data).as_bytes().to_vec(),
            Codec::Md5 => md5::Md5::digest(data).to_vec(),
            Codec::Ripemd128 => ripemd::Ripemd128::digest(data).to_vec(),
            Codec::Ripemd160 => ripemd::Ripemd160::digest(data).to_vec(),
            Codec::Ripemd256 => ripemd::Ripemd256::digest(data).to_vec(),
            Codec::Ripemd320 => ripemd::Ripemd320::digest(data).to_vec(),
            _ => return Err(Error::UnsupportedHash(codec)),
        };
        Ok(Self { codec, hash })
    }

    /// wrap an already computed digest
    pub fn new_from_digest(codec: Codec, digest: impl AsRef<[u8]>) -> Result<Self, Error> {
        if !codec.is_hash() {
            return Err(Error::NotHash(codec));
        }
        Ok(Self {
            codec,
            hash: digest.as_ref().to_vec(),
        })
    }

    /// build the [Multihash]
    pub fn try_build(&self) -> Result<Multihash, Error> {
        Ok(Multihash {
            codec: self.codec,
            hash: self.hash.clone(),
        })
    }
}
