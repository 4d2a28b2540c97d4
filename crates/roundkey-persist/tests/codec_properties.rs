use proptest::prelude::*;
use roundkey_persist::{codec, CodecConfig, NeutralRecord};

fn table() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(any::<u32>(), 1..80)
}

proptest! {
    #[test]
    fn json_decode_inverts_encode(enc in table(), dec in table()) {
        let record = NeutralRecord::new(enc, dec);
        let bytes = codec::encode(&record).unwrap();
        prop_assert_eq!(codec::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn stream_decode_inverts_stream_encode(enc in table(), dec in table(), terminator in any::<bool>()) {
        let record = NeutralRecord::new(enc, dec);
        let config = if terminator { CodecConfig::nul_terminated() } else { CodecConfig::default() };
        let mut stream = Vec::new();
        codec::encode_to_writer(&mut stream, &record, &config).unwrap();
        let decoded = codec::decode_from_reader(stream.as_slice(), &config).unwrap();
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn binary_decode_inverts_encode(enc in table(), dec in table()) {
        let record = NeutralRecord::new(enc, dec);
        let bytes = codec::encode_binary(&record).unwrap();
        prop_assert_eq!(codec::decode_binary(&bytes).unwrap(), record);
    }
}
