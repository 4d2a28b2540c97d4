use std::io::Cursor;
use std::sync::Arc;

use aes_core::{Aes128, Aes192, Aes256, BlockCipher, ExposeRoundKeys, KeySize};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use roundkey_persist::{
    codec, extract, inject, inject_as, load_json, save_json, try_extract, CipherHandle,
    CipherShape, CodecConfig, Error, ExtractionError, InjectionError, NeutralRecord,
};

// NIST SP 800-38A sample plaintext.
const PLAIN: [u8; 64] = [
    0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17, 0x2a,
    0xae, 0x2d, 0x8a, 0x57, 0x1e, 0x03, 0xac, 0x9c, 0x9e, 0xb7, 0x6f, 0xac, 0x45, 0xaf, 0x8e, 0x51,
    0x30, 0xc8, 0x1c, 0x46, 0xa3, 0x5c, 0xe4, 0x11, 0xe5, 0xfb, 0xc1, 0x19, 0x1a, 0x0a, 0x52, 0xef,
    0xf6, 0x9f, 0x24, 0x45, 0xdf, 0x4f, 0x9b, 0x17, 0xad, 0x2b, 0x41, 0x7b, 0xe6, 0x6c, 0x37, 0x10,
];

const KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const KEY_192: &str = "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b";
const KEY_256: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

fn blocks() -> impl Iterator<Item = [u8; 16]> {
    PLAIN.chunks_exact(16).map(|c| c.try_into().unwrap())
}

fn keyed(key_hex: &str) -> CipherHandle {
    CipherHandle::from_key(&hex::decode(key_hex).unwrap()).unwrap()
}

fn assert_same_behavior(a: &impl BlockCipher, b: &impl BlockCipher) {
    for block in blocks() {
        assert_eq!(a.encrypt_block(&block), b.encrypt_block(&block));
        assert_eq!(a.decrypt_block(&block), b.decrypt_block(&block));
    }
}

#[test]
fn known_key_survives_json_round_trip() {
    let cipher = keyed(KEY_128);
    let block: [u8; 16] = PLAIN[..16].try_into().unwrap();
    let expected = cipher.encrypt_block(&block);
    assert_eq!(hex::encode(expected), "3ad77bb40d7a3660a89ecaf32466ef97");

    let text = codec::encode(&extract(&cipher).unwrap()).unwrap();
    let record = codec::decode(&text).unwrap();
    let restored = inject(&record, CipherShape::Aes128).unwrap();

    assert_eq!(restored.encrypt_block(&block), expected);
    assert_eq!(restored, cipher);
}

#[test]
fn every_key_size_round_trips_through_nul_terminated_stream() {
    let config = CodecConfig::nul_terminated();
    for key in [KEY_128, KEY_192, KEY_256] {
        let cipher = keyed(key);
        let mut stream = Vec::new();
        codec::encode_to_writer(&mut stream, &extract(&cipher).unwrap(), &config).unwrap();
        assert_eq!(stream.last(), Some(&0));

        let record = codec::decode_from_reader(Cursor::new(stream), &config).unwrap();
        let restored = inject(&record, cipher.shape()).unwrap();
        assert_eq!(
            restored.enc_round_keys(),
            cipher.enc_round_keys(),
            "{}",
            cipher.shape()
        );
        assert_same_behavior(&restored, &cipher);
    }
}

#[test]
fn random_keys_round_trip_for_typed_ciphers() {
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    for _ in 0..16 {
        let mut key = [0u8; 32];
        rng.fill_bytes(&mut key);

        let a128 = Aes128::new_from_slice(&key[..16]).unwrap();
        let r128: Aes128 = inject_as(&extract(&a128).unwrap()).unwrap();
        assert_same_behavior(&r128, &a128);

        let a192 = Aes192::new_from_slice(&key[..24]).unwrap();
        let r192: Aes192 = inject_as(&extract(&a192).unwrap()).unwrap();
        assert_same_behavior(&r192, &a192);

        let a256 = Aes256::new(&key);
        let r256: Aes256 = inject_as(&extract(&a256).unwrap()).unwrap();
        assert_same_behavior(&r256, &a256);
    }
}

#[test]
fn table_length_depends_on_key_size() {
    let lengths: Vec<(usize, usize)> = [KEY_128, KEY_192, KEY_256]
        .into_iter()
        .map(|key| {
            let record = extract(&keyed(key)).unwrap();
            (record.enc.len(), record.dec.len())
        })
        .collect();
    assert_eq!(lengths, vec![(44, 44), (52, 52), (60, 60)]);
    for size in KeySize::ALL {
        assert_eq!(CipherShape::from(size).schedule_words(), size.schedule_words());
    }
}

#[test]
fn wrapped_handles_extract_like_the_inner_cipher() {
    let cipher = keyed(KEY_192);
    let direct = extract(&cipher).unwrap();
    let shared: Arc<Box<CipherHandle>> = Arc::new(Box::new(cipher));
    assert_eq!(extract(&shared).unwrap(), direct);
    assert_eq!(extract(&&shared).unwrap(), direct);
}

#[test]
fn restored_cipher_is_independent_of_source() {
    let cipher = keyed(KEY_256);
    let mut record = extract(&cipher).unwrap();
    let restored = inject(&record, CipherShape::Aes256).unwrap();
    record.enc = vec![0u32; 60].into();
    drop(cipher);
    assert_same_behavior(&restored, &keyed(KEY_256));
}

#[test]
fn nil_and_invalid_shape_are_rejected() {
    assert_eq!(
        try_extract::<CipherHandle>(None).unwrap_err(),
        ExtractionError::NilInput
    );
    let record = extract(&keyed(KEY_128)).unwrap();
    assert!(matches!(
        "blowfish".parse::<CipherShape>(),
        Err(InjectionError::InvalidShape(_))
    ));
    assert!(matches!(
        roundkey_persist::inject_named(&record, "aes-64"),
        Err(InjectionError::InvalidShape(_))
    ));
}

#[test]
fn aes256_record_does_not_fit_aes128_shape() {
    let record = extract(&keyed(KEY_256)).unwrap();
    let result = inject(&record, CipherShape::Aes128);
    assert_eq!(
        result.unwrap_err(),
        InjectionError::LayoutMismatch {
            shape: CipherShape::Aes128,
            expected: 44,
            enc: 60,
            dec: 60,
        }
    );
    assert!(inject_as::<Aes128>(&record).is_err());
}

#[test]
fn binary_and_json_forms_agree() {
    let record = extract(&keyed(KEY_192)).unwrap();
    let from_binary = codec::decode_binary(&codec::encode_binary(&record).unwrap()).unwrap();
    let from_json = codec::decode(&codec::encode(&record).unwrap()).unwrap();
    assert_eq!(from_binary, from_json);
}

#[test]
fn convenience_helpers_surface_errors() {
    let cipher = keyed(KEY_128);
    let json = save_json(&cipher, &CodecConfig::default()).unwrap();
    let restored = load_json(&json, CipherShape::Aes128).unwrap();
    assert_same_behavior(&restored, &cipher);

    assert!(matches!(
        load_json(&json, CipherShape::Aes256),
        Err(Error::Injection(InjectionError::LayoutMismatch { .. }))
    ));
    assert!(matches!(
        load_json(b"{", CipherShape::Aes128),
        Err(Error::Decode(_))
    ));
}

#[test]
fn capitalized_field_names_are_accepted() {
    let record = extract(&keyed(KEY_128)).unwrap();
    let legacy = format!(
        r#"{{"Enc":{},"Dec":{}}}"#,
        json_array(&record.enc),
        json_array(&record.dec)
    );
    let parsed: NeutralRecord = codec::decode(legacy.as_bytes()).unwrap();
    assert_eq!(parsed, record);
}

fn json_array(words: &[u32]) -> String {
    let items: Vec<String> = words.iter().map(u32::to_string).collect();
    format!("[{}]", items.join(","))
}

#[test]
fn public_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CipherHandle>();
    assert_send_sync::<NeutralRecord>();
    assert_send_sync::<Error>();
}
