//! Property-based tests for the codec engine
//!
//! These verify the quantified invariants across randomized inputs:
//! - round-trip totality for every shipped model under both framings
//! - deterministic compression
//! - ASCII inputs outside header space decode to themselves
//! - compressed output never exceeds the escape-everything bound

use proptest::prelude::*;

use strzip::{Model, EMAILS, FILE_PATH, TEXT_EN, WORDS_EN};

static MODELS: [(&str, &Model); 4] = [
    ("words_en", &WORDS_EN),
    ("text_en", &TEXT_EN),
    ("file_path", &FILE_PATH),
    ("emails", &EMAILS),
];

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_roundtrip_original(data in prop::collection::vec(any::<u8>(), 0..256)) {
        for (name, model) in MODELS {
            let packed = model.compress(&data);
            let unpacked = model.decompress(&packed);
            prop_assert_eq!(unpacked.as_deref().ok(), Some(&data[..]), "model {}", name);
        }
    }

    #[test]
    fn prop_roundtrip_proposed(data in prop::collection::vec(any::<u8>(), 0..256)) {
        for (name, model) in MODELS {
            let packed = model.proposed_compress(&data);
            let unpacked = model.proposed_decompress(&packed);
            prop_assert_eq!(unpacked.as_deref().ok(), Some(&data[..]), "model {}", name);
        }
    }

    #[test]
    fn prop_roundtrip_text_like(text in "[ a-zA-Z0-9.,'/@_-]{0,96}") {
        for (name, model) in MODELS {
            let data = text.as_bytes();
            let compressed = model.compress(data);
            let decompressed = model.decompress(&compressed);
            prop_assert_eq!(
                decompressed.as_deref().ok(),
                Some(data),
                "model {} (original)", name
            );
            let proposed_compressed = model.proposed_compress(data);
            let proposed_decompressed = model.proposed_decompress(&proposed_compressed);
            prop_assert_eq!(
                proposed_decompressed.as_deref().ok(),
                Some(data),
                "model {} (proposed)", name
            );
        }
    }

    #[test]
    fn prop_roundtrip_unicode(text in "\\PC{0,48}") {
        let data = text.as_bytes();
        let compressed = strzip::compress(data);
        let decompressed = strzip::decompress(&compressed);
        prop_assert_eq!(decompressed.as_deref().ok(), Some(data));
        let proposed_compressed = strzip::proposed_compress(data);
        let proposed_decompressed = strzip::proposed_decompress(&proposed_compressed);
        prop_assert_eq!(
            proposed_decompressed.as_deref().ok(),
            Some(data)
        );
    }

    #[test]
    fn prop_deterministic(data in prop::collection::vec(any::<u8>(), 0..256)) {
        for (name, model) in MODELS {
            prop_assert_eq!(model.compress(&data), model.compress(&data), "model {}", name);
            prop_assert_eq!(
                model.proposed_compress(&data),
                model.proposed_compress(&data),
                "model {}", name
            );
        }
    }

    #[test]
    fn prop_ascii_identity_on_decode(data in prop::collection::vec(0x01u8..0x80, 0..192)) {
        // No byte in [0x01, 0x7f] is a pack header or the escape sentinel.
        for (name, model) in MODELS {
            let decompressed = model.decompress(&data);
            prop_assert_eq!(
                decompressed.as_deref().ok(),
                Some(&data[..]),
                "model {}", name
            );
        }
    }

    #[test]
    fn prop_output_bounded(data in prop::collection::vec(any::<u8>(), 0..256)) {
        // Worst case escapes every byte: two output bytes per input byte
        // under the original framing, and an escape header per run of at
        // most four bytes under the proposed one.
        for (_, model) in MODELS {
            prop_assert!(model.compress(&data).len() <= 2 * data.len());
            prop_assert!(model.proposed_compress(&data).len() <= 2 * data.len());
        }
    }
}
