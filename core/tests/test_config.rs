#[cfg(test)]
mod tests {
    use layerpipe_core::compression::CodecId;
    use layerpipe_core::config::PipelineConfig;
    use layerpipe_core::crypto::{CipherSuite, KdfPrf};
    use layerpipe_core::pipeline::{verify_mirror, Sink, StageKind};
    use layerpipe_core::types::PipelineError;

    #[test]
    fn default_config() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.cipher, CipherSuite::Chacha20Poly1305);
        assert_eq!(cfg.kdf, KdfPrf::Sha256);
        assert_eq!(cfg.codec, CodecId::Zstd);
        assert_eq!(cfg.level, None);
        assert_eq!(cfg.effective_level(), 6);
    }

    #[test]
    fn json_round_trip() {
        let cfg = PipelineConfig::new(CipherSuite::Aes256Gcm, CodecId::Deflate)
            .with_kdf(KdfPrf::Blake3K)
            .with_level(9);
        let back = PipelineConfig::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = PipelineConfig::from_json(r#"{ "codec": "Lz4" }"#).unwrap();
        assert_eq!(cfg.codec, CodecId::Lz4);
        assert_eq!(cfg.cipher, CipherSuite::Chacha20Poly1305);
        assert_eq!(cfg.effective_level(), 0);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        assert!(matches!(
            PipelineConfig::from_json("{ not json"),
            Err(PipelineError::ConfigParse(_))
        ));
        assert!(matches!(
            PipelineConfig::from_json(r#"{ "codec": "Brotli" }"#),
            Err(PipelineError::ConfigParse(_))
        ));
    }

    #[test]
    fn specs_mirror_each_other() {
        let cfg = PipelineConfig::default();
        let forward = cfg.build_forward("abcde").unwrap();
        let reverse = cfg.build_reverse("abcde").unwrap();

        assert_eq!(forward.stages(), &[StageKind::Encrypt, StageKind::Compress]);
        assert_eq!(reverse.stages(), &[StageKind::Decompress, StageKind::Decrypt]);
        verify_mirror(&forward, &reverse, &[b"Hello World"]).unwrap();
    }

    #[test]
    fn kdf_choice_changes_the_wire() {
        let sha = PipelineConfig::default().build_forward("abcde").unwrap();
        let blake = PipelineConfig::default()
            .with_kdf(KdfPrf::Blake3K)
            .build_forward("abcde")
            .unwrap();
        assert_ne!(sha.run(b"Hello World").unwrap(), blake.run(b"Hello World").unwrap());
    }

    #[test]
    fn build_into_caller_sinks() {
        let cfg = PipelineConfig::new(CipherSuite::Aes256Gcm, CodecId::Store);
        let wire_sink = Sink::new();
        let plain_sink = Sink::new();
        let forward = cfg.build_forward_into("abcde", wire_sink.clone()).unwrap();
        let reverse = cfg.build_reverse_into("abcde", plain_sink.clone()).unwrap();

        forward.process(b"abcde").unwrap();
        let wire = wire_sink.take().unwrap();
        reverse.process(&wire).unwrap();

        assert!(wire_sink.is_empty());
        assert_eq!(plain_sink.latest().as_deref(), Some(&b"abcde"[..]));
    }

    #[test]
    fn out_of_range_level_fails_at_build() {
        let cfg = PipelineConfig::default().with_level(1000);
        match cfg.build_forward("abcde") {
            Err(PipelineError::Build { stage, .. }) => assert_eq!(stage, StageKind::Compress),
            other => panic!("unexpected: {:?}", other.map(|p| p.len())),
        }
    }

    #[test]
    fn empty_secret_fails_at_build() {
        assert!(matches!(
            PipelineConfig::default().build_reverse(""),
            Err(PipelineError::Build { stage: StageKind::Decrypt, .. })
        ));
    }
}
