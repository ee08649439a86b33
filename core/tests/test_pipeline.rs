// End-to-end forward → mirror behavior
//
// * round trip, including empty payloads
// * order and key sensitivity
// * corrupt input on the reverse pipeline
// * failure leaves the sink untouched
// * determinism, identity and custom transforms

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use layerpipe_core::compression::{CodecError, CodecId};
    use layerpipe_core::crypto::{CipherKey, CipherSuite, CryptoError, KdfPrf};
    use layerpipe_core::pipeline::{mirror, Pipeline, Sink, StageKind, StageSpec, Transform};
    use layerpipe_core::types::TransformFailure;

    const SUITES: [CipherSuite; 2] = [CipherSuite::Aes256Gcm, CipherSuite::Chacha20Poly1305];
    const CODECS: [CodecId; 4] = [CodecId::Store, CodecId::Zstd, CodecId::Lz4, CodecId::Deflate];

    // ------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------
    fn forward_specs(suite: CipherSuite, codec: CodecId, secret: &[u8]) -> Vec<StageSpec> {
        vec![
            StageSpec::Encrypt { suite, key: CipherKey::secret(secret) },
            StageSpec::Compress { codec, level: None },
        ]
    }

    fn pair(suite: CipherSuite, codec: CodecId, secret: &[u8]) -> (Pipeline, Pipeline) {
        let specs = forward_specs(suite, codec, secret);
        let forward = Pipeline::from_specs(&specs).expect("forward builds");
        let reverse = Pipeline::from_specs(&mirror(&specs)).expect("mirror builds");
        (forward, reverse)
    }

    /// Byte-reversal: its own inverse, used to exercise custom transforms.
    struct ReverseBytes;

    impl Transform for ReverseBytes {
        fn kind(&self) -> StageKind {
            StageKind::Custom("reverse-bytes")
        }

        fn apply(&self, payload: &[u8]) -> Result<Vec<u8>, TransformFailure> {
            Ok(payload.iter().rev().copied().collect())
        }
    }

    // ------------------------------------------------------------
    // Tests
    // ------------------------------------------------------------
    #[test]
    fn hello_world_with_abcde_round_trips() {
        let sent = Sink::new();
        let received = Sink::new();

        let sender = Pipeline::builder()
            .encrypt(CipherSuite::Aes256Gcm, CipherKey::secret("abcde"))
            .compress(CodecId::Zstd, None)
            .sink(sent.clone())
            .build()
            .unwrap();
        let receiver = Pipeline::builder()
            .decompress(CodecId::Zstd)
            .decrypt(CipherSuite::Aes256Gcm, CipherKey::secret("abcde"))
            .sink(received.clone())
            .build()
            .unwrap();

        sender.process(b"Hello World").unwrap();
        let wire = sent.latest().expect("sender sink captured payload");
        assert_ne!(&wire[..], b"Hello World");

        receiver.process(&wire).unwrap();
        assert_eq!(received.latest().as_deref(), Some(&b"Hello World"[..]));
    }

    #[test]
    fn every_suite_and_codec_round_trips() {
        let payloads: [&[u8]; 4] = [b"", b"x", b"Hello World", &[0xAB; 10_000]];
        for suite in SUITES {
            for codec in CODECS {
                let (forward, reverse) = pair(suite, codec, b"abcde");
                for payload in payloads {
                    let wire = forward.run(payload).unwrap();
                    let back = reverse.run(&wire).unwrap();
                    let len = payload.len();
                    assert_eq!(&back[..], payload, "{:?} {:?} len={}", suite, codec, len);
                }
            }
        }
    }

    #[test]
    fn empty_payload_produces_restorable_non_empty_wire() {
        let (forward, reverse) = pair(CipherSuite::Chacha20Poly1305, CodecId::Lz4, b"abcde");
        let wire = forward.run(&[]).unwrap();
        // nonce + tag survive even for empty plaintext
        assert!(!wire.is_empty());
        assert!(reverse.run(&wire).unwrap().is_empty());
    }

    #[test]
    fn swapped_mirror_order_fails() {
        let specs = forward_specs(CipherSuite::Aes256Gcm, CodecId::Zstd, b"abcde");
        let forward = Pipeline::from_specs(&specs).unwrap();
        // decrypt-then-decompress instead of decompress-then-decrypt
        let wrong = Pipeline::from_specs(&[specs[0].inverse(), specs[1].inverse()]).unwrap();

        let wire = forward.run(b"Hello World, this is not trivially short").unwrap();
        let err = wrong.run(&wire).unwrap_err();
        assert!(err.is_crypto() || err.is_codec());
        assert_eq!(err.stage, StageKind::Decrypt);
    }

    #[test]
    fn swapped_mirror_order_fails_for_compress_first_pipelines() {
        let forward = Pipeline::builder()
            .compress(CodecId::Deflate, Some(9))
            .encrypt(CipherSuite::Chacha20Poly1305, CipherKey::secret("abcde"))
            .build()
            .unwrap();
        let wrong = Pipeline::builder()
            .decompress(CodecId::Deflate)
            .decrypt(CipherSuite::Chacha20Poly1305, CipherKey::secret("abcde"))
            .build()
            .unwrap();

        let wire = forward.run(&b"compress me first ".repeat(20)).unwrap();
        let err = wrong.run(&wire).unwrap_err();
        assert_eq!(err.stage, StageKind::Decompress);
        assert!(err.is_codec());
    }

    #[test]
    fn wrong_key_fails_with_crypto_error() {
        let (forward, _) = pair(CipherSuite::Aes256Gcm, CodecId::Zstd, b"abcde");
        let (_, reverse) = pair(CipherSuite::Aes256Gcm, CodecId::Zstd, b"abcdf");

        let err = reverse.run(&forward.run(b"Hello World").unwrap()).unwrap_err();
        assert_eq!(err.stage, StageKind::Decrypt);
        assert!(matches!(err.crypto(), Some(CryptoError::TagMismatch)));
    }

    #[test]
    fn wrong_prf_is_a_wrong_key() {
        let forward = Pipeline::builder()
            .encrypt(CipherSuite::Aes256Gcm, CipherKey::secret_with_prf("abcde", KdfPrf::Sha512))
            .build()
            .unwrap();
        let reverse = Pipeline::builder()
            .decrypt(CipherSuite::Aes256Gcm, CipherKey::secret_with_prf("abcde", KdfPrf::Blake3K))
            .build()
            .unwrap();
        assert!(reverse.run(&forward.run(b"payload").unwrap()).unwrap_err().is_crypto());
    }

    #[test]
    fn truncated_wire_fails_with_codec_error() {
        let (forward, reverse) = pair(CipherSuite::Aes256Gcm, CodecId::Zstd, b"abcde");
        let wire = forward.run(&b"Hello World ".repeat(64)).unwrap();

        for cut in [0, 3, 7, wire.len() / 2, wire.len() - 1] {
            let err = reverse.run(&wire[..cut]).unwrap_err();
            assert_eq!(err.stage, StageKind::Decompress, "cut={}", cut);
            assert!(err.is_codec(), "cut={}", cut);
        }
    }

    #[test]
    fn flipped_checksum_trailer_is_detected() {
        for codec in CODECS {
            let (forward, reverse) = pair(CipherSuite::Chacha20Poly1305, codec, b"abcde");
            let mut wire = forward.run(b"Hello World").unwrap().to_vec();
            let last = wire.len() - 1;
            wire[last] ^= 0x01;

            let err = reverse.run(&wire).unwrap_err();
            assert!(
                matches!(err.codec(), Some(CodecError::ChecksumMismatch { .. })),
                "codec={:?}",
                codec
            );
        }
    }

    #[test]
    fn single_bit_flips_never_yield_wrong_plaintext() {
        let plaintext = b"Hello World, flipped bits must not slip through".to_vec();
        let (forward, reverse) = pair(CipherSuite::Aes256Gcm, CodecId::Deflate, b"abcde");
        let wire = forward.run(&plaintext).unwrap();

        for i in 0..wire.len() {
            let mut corrupt = wire.to_vec();
            corrupt[i] ^= 0x80;
            match reverse.run(&corrupt) {
                Ok(out) => assert_eq!(&out[..], &plaintext[..], "byte {}", i),
                Err(e) => assert!(e.is_codec() || e.is_crypto(), "byte {}", i),
            }
        }
    }

    #[test]
    fn garbage_input_is_rejected_by_decompress() {
        let (_, reverse) = pair(CipherSuite::Aes256Gcm, CodecId::Lz4, b"abcde");
        let err = reverse.run(b"this is not a compressed frame").unwrap_err();
        assert_eq!(err.stage, StageKind::Decompress);
        assert!(matches!(err.codec(), Some(CodecError::PayloadTooLarge { .. })));
    }

    #[test]
    fn failure_leaves_sink_untouched() {
        let received = Sink::new();
        let specs = forward_specs(CipherSuite::Aes256Gcm, CodecId::Zstd, b"abcde");
        let forward = Pipeline::from_specs(&specs).unwrap();
        let reverse = Pipeline::from_specs_with_sink(&mirror(&specs), received.clone()).unwrap();

        reverse.process(&forward.run(b"first").unwrap()).unwrap();
        assert_eq!(received.deliveries(), 1);

        assert!(reverse.process(b"junk").is_err());
        assert_eq!(received.deliveries(), 1);
        assert_eq!(received.latest().as_deref(), Some(&b"first"[..]));
    }

    #[test]
    fn forward_output_is_deterministic() {
        let (a, _) = pair(CipherSuite::Chacha20Poly1305, CodecId::Zstd, b"abcde");
        let (b, _) = pair(CipherSuite::Chacha20Poly1305, CodecId::Zstd, b"abcde");
        let payload = b"same input, same output";
        assert_eq!(a.run(payload).unwrap(), a.run(payload).unwrap());
        assert_eq!(a.run(payload).unwrap(), b.run(payload).unwrap());
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let identity = Pipeline::builder().build().unwrap();
        assert!(identity.is_empty());
        assert_eq!(&identity.run(b"as-is").unwrap()[..], b"as-is");
    }

    #[test]
    fn custom_transforms_compose_with_builtins() {
        let forward = Pipeline::builder()
            .transform(Box::new(ReverseBytes))
            .encrypt(CipherSuite::Aes256Gcm, CipherKey::raw([7u8; 32]))
            .build()
            .unwrap();
        let reverse = Pipeline::builder()
            .decrypt(CipherSuite::Aes256Gcm, CipherKey::raw([7u8; 32]))
            .transform(Box::new(ReverseBytes))
            .build()
            .unwrap();

        assert_eq!(forward.stages(), &[StageKind::Custom("reverse-bytes"), StageKind::Encrypt]);
        assert_eq!(&reverse.run(&forward.run(b"abc").unwrap()).unwrap()[..], b"abc");
    }

    #[test]
    fn bad_key_material_fails_at_build_time() {
        let err = Pipeline::builder()
            .compress(CodecId::Zstd, None)
            .encrypt(CipherSuite::Aes256Gcm, CipherKey::raw([1u8; 16]))
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot build encrypt stage: invalid key length: expected=32, actual=16"
        );
    }

    #[test]
    fn bad_codec_level_fails_at_build_time() {
        let err = Pipeline::builder().compress(CodecId::Zstd, Some(999)).build().unwrap_err();
        assert!(err.to_string().starts_with("cannot build compress stage"));
    }

    // Property: reverse(forward(p, k), k) == p for every payload, key, suite, codec.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_round_trip(
            payload in proptest::collection::vec(any::<u8>(), 0..2048),
            secret in proptest::collection::vec(any::<u8>(), 1..48),
            suite_idx in 0usize..2,
            codec_idx in 0usize..4,
        ) {
            let (forward, reverse) = pair(SUITES[suite_idx], CODECS[codec_idx], &secret);
            let wire = forward.run(&payload).unwrap();
            let back = reverse.run(&wire).unwrap();
            prop_assert_eq!(&back[..], &payload[..]);
        }

        #[test]
        fn prop_other_key_never_decrypts(
            payload in proptest::collection::vec(any::<u8>(), 0..256),
            a in proptest::collection::vec(any::<u8>(), 1..16),
            b in proptest::collection::vec(any::<u8>(), 1..16),
        ) {
            prop_assume!(a != b);
            let (forward, _) = pair(CipherSuite::Chacha20Poly1305, CodecId::Lz4, &a);
            let (_, reverse) = pair(CipherSuite::Chacha20Poly1305, CodecId::Lz4, &b);
            let err = reverse.run(&forward.run(&payload).unwrap()).unwrap_err();
            prop_assert!(err.is_crypto());
        }
    }
}
