//! Integration tests for Cid construction, conversion and rendering
use multicid::{Candidate, Cid, CidError, Components, CodecField, Error, HashField, Version};
use multicodec::Codec;
use multihash::{Builder, Multihash};
use multitrait::EncodeInto;
use multiutil::CodecInfo;
use rand::RngCore;

const H1: &str = "QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n";
const H2: &str = "QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1o";
const V1_B58: &str = "zdj7Wd8AMwqnhJGQCbFxBVodGSBG84TM7Hs1rcJuQMwTyfEDS";

fn random_sha2_256() -> Multihash {
    let mut data = [0u8; 64];
    rand::rng().fill_bytes(&mut data);
    Builder::new_from_bytes(Codec::Sha2256, data)
        .unwrap()
        .try_build()
        .unwrap()
}

#[test]
fn test_parts_round_trip_through_every_form() {
    let mh = Builder::new_from_bytes(Codec::Sha2512, b"hello world")
        .unwrap()
        .try_build()
        .unwrap();
    let mh_bytes: Vec<u8> = mh.clone().into();
    let cid = Cid::from_parts(1, Codec::DagCbor, &mh_bytes, None).unwrap();

    // binary form
    assert_eq!(cid, Cid::new(cid.bytes()).unwrap());
    // default string form
    assert_eq!(cid, Cid::new(cid.to_string().as_str()).unwrap());
    // object form
    assert_eq!(cid, Cid::try_from(cid.to_json()).unwrap());
    // copy
    assert_eq!(cid, Cid::new(&cid).unwrap());
    assert_eq!(&mh, cid.multihash());
}

#[test]
fn test_v0_text() {
    let cid = Cid::new(H1).unwrap();
    assert_eq!(Version::V0, cid.version());
    assert_eq!(Codec::DagPb, cid.codec());
    assert_eq!(&Multihash::from_b58(H1).unwrap(), cid.multihash());
    assert_eq!(H1, cid.to_string());
}

#[test]
fn test_v0_invalid_hash() {
    assert!(Cid::new("QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zIII").is_err());
}

#[test]
fn test_equality() {
    assert_eq!(Cid::new(H1).unwrap(), Cid::new(H1).unwrap());
    assert_ne!(Cid::new(H1).unwrap(), Cid::new(H2).unwrap());
}

#[test]
fn test_v1_base58_keeps_its_base() {
    let cid = Cid::new(V1_B58).unwrap();
    assert_eq!(Version::V1, cid.version());
    assert_eq!(V1_B58, cid.to_string());
    // a v1 conversion keeps the existing base
    assert_eq!(V1_B58, cid.to_v1().to_string());
}

#[test]
fn test_v0_to_v1_and_back() {
    let v0 = Cid::new(H1).unwrap();
    let v1 = v0.to_v1();
    assert_eq!(Version::V1, v1.version());
    assert_eq!(multibase::Base::Base32Lower, v1.multibase());
    assert!(v1.to_string().starts_with("bafy"));
    assert_ne!(v0, v1);

    let back = v1.to_v0().unwrap();
    assert_eq!(v0, back);
    assert_eq!(H1, back.to_string());
}

#[test]
fn test_random_sha2_256_converts() {
    for _ in 0..16 {
        let mh = random_sha2_256();
        let cid = Cid::from_parts(1, "dag-pb", &mh.encode_into(), None).unwrap();
        let v0 = cid.to_v0().unwrap();
        assert_eq!(Version::V0, v0.version());
        assert_eq!(v0.bytes(), mh.encode_into().as_slice());
        assert_eq!(cid, v0.to_v1());
    }
}

#[test]
fn test_to_v0_rejections() {
    let mh = random_sha2_256();
    let raw = Cid::from_parts(1, Codec::Raw, &mh.encode_into(), None).unwrap();
    assert!(matches!(raw.to_v0(), Err(Error::Cid(CidError::NotDagPb(_)))));

    let blake = Builder::new_from_bytes(Codec::Blake2B256, b"hello")
        .unwrap()
        .try_build()
        .unwrap();
    let cid = Cid::from_parts(1, Codec::DagPb, &blake.encode_into(), None).unwrap();
    assert_eq!(Codec::Blake2B256, cid.multihash().codec());
    assert!(matches!(cid.to_v0(), Err(Error::Cid(CidError::NotSha2256(_)))));
}

#[test]
fn test_eth_block() {
    let mh = Builder::new_from_bytes(Codec::Keccak256, b"block")
        .unwrap()
        .try_build()
        .unwrap();
    let cid = Cid::from_parts(1, "eth-block", &mh.encode_into(), None).unwrap();
    assert_eq!(0x90, cid.code());
    let parsed: Cid = cid.to_string().parse().unwrap();
    assert_eq!(cid, parsed);
    assert_eq!("eth-block", parsed.codec_name());
    assert_eq!(&mh, parsed.multihash());
}

#[test]
fn test_invalid_inputs() {
    let invalid_text = ["hello world", "QmaozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT3L"];
    let invalid_bytes: [&[u8]; 2] = [b"hello world", b"QmaozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT"];

    for s in invalid_text {
        assert!(Cid::new(s).is_err(), "{} parsed", s);
        assert!(Cid::from_parts(0, "dag-pb", s.as_bytes(), None).is_err());
        assert!(Cid::from_parts(1, "dag-pb", s.as_bytes(), None).is_err());
    }
    for b in invalid_bytes {
        assert!(Cid::new(b).is_err());
        assert!(Cid::from_parts(0, "dag-pb", b, None).is_err());
        assert!(Cid::from_parts(1, "dag-pb", b, None).is_err());
    }
}

#[test]
fn test_validator_never_panics_on_invalid_inputs() {
    assert!(multicid::check_cid_components(&"hello world".into())
        .unwrap()
        .is_some());
    assert!(multicid::check_cid_components(&b"hello world".as_slice().into())
        .unwrap()
        .is_some());

    for version in [0, 1] {
        let c: Candidate = Components {
            version: Some(version),
            codec: Some(CodecField::Name("dag-pb".to_string())),
            multihash: Some(HashField::Text("hello world".to_string())),
            multibase: None,
        }
        .into();
        assert!(multicid::check_cid_components(&c).unwrap().is_some());

        // malformed multihash bytes are a hard failure
        let c: Candidate = Components {
            version: Some(version),
            codec: Some(CodecField::Name("dag-pb".to_string())),
            multihash: Some(HashField::Bytes(b"hello world".to_vec())),
            multibase: None,
        }
        .into();
        assert!(multicid::check_cid_components(&c).is_err());
    }
}

#[test]
fn test_is_cid() {
    let cid = Cid::new(H1).unwrap();
    assert!(Cid::is_cid(&cid));
    assert!(!Cid::is_cid(&false));
    assert!(!Cid::is_cid(&b"hello world".to_vec()));
}

#[test]
fn test_ordering_and_sets() {
    use std::collections::BTreeSet;
    let a = Cid::new(H1).unwrap();
    let b = Cid::new(H2).unwrap();
    let c = a.to_v1();
    let set: BTreeSet<Cid> = [a.clone(), b.clone(), c.clone(), a.clone()].into_iter().collect();
    assert_eq!(3, set.len());
    // v0 sorts ahead of v1
    assert_eq!(Some(&c), set.iter().last());
}
