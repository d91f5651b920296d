//! Property tests for the base62 transcoder and the token codec.

use pomelo::{base62_decode, base62_encode, TokenCodec, HEADER_LENGTH, MIN_TOKEN_LENGTH, VERSION};
use proptest::prelude::*;

proptest! {
    #[test]
    fn base62_round_trips(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = base62_encode(&data);
        prop_assert_eq!(base62_decode(&encoded).unwrap(), data);
    }

    #[test]
    fn base62_output_stays_in_alphabet(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert!(base62_encode(&data).bytes().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn tokens_round_trip(
        key in proptest::collection::vec(any::<u8>(), 32..=32),
        plaintext in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let codec = TokenCodec::new(&key);
        let token = codec.encode(&plaintext).unwrap();
        prop_assert!(token.len() >= MIN_TOKEN_LENGTH);
        prop_assert_eq!(codec.decode(&token).unwrap(), plaintext);
    }

    #[test]
    fn any_bit_flip_is_rejected(
        plaintext in proptest::collection::vec(any::<u8>(), 1..128),
        position in any::<usize>(),
        bit in 0u8..8,
    ) {
        let codec = TokenCodec::new(b"supersecretkeyyoushouldnotcommit");
        let token = codec.encode(&plaintext).unwrap();

        let mut envelope = base62_decode(&token).unwrap();
        let position = position % envelope.len();
        envelope[position] ^= 1 << bit;
        let tampered = base62_encode(&envelope);

        prop_assert!(codec.decode(&tampered).is_err(), "tampered token accepted");
    }

    #[test]
    fn envelope_header_is_visible_and_fixed(
        plaintext in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let codec = TokenCodec::new(b"supersecretkeyyoushouldnotcommit");
        let token = codec.encode(&plaintext).unwrap();
        let envelope = base62_decode(&token).unwrap();

        prop_assert_eq!(envelope[0], VERSION);
        prop_assert_eq!(envelope.len(), HEADER_LENGTH + plaintext.len() + 16);
    }
}
