//! End-to-end codec tests
//!
//! The fixture vectors pin the default model's tables and both framings
//! byte-for-byte. The long sentences exercise every pack kind and most of
//! the successor table.

use strzip::{StrzipError, EMAILS, FILE_PATH, TEXT_EN, WORDS_EN};

fn unhex(s: &str) -> Vec<u8> {
    s.as_bytes()
        .chunks(2)
        .map(|pair| u8::from_str_radix(std::str::from_utf8(pair).unwrap(), 16).unwrap())
        .collect()
}

/// (plaintext, compressed hex), original framing, default model.
const FIXTURES: &[(&str, &str)] = &[
    ("", ""),
    ("test", "c899"),
    ("shoco", "a26fac"),
    ("Übergrößenträger", "00c3009cbc72677200c300b600c3009fc05e00c300a46780"),
    ("Hello, 世界", "48c14d2c2000e400b8009600e70095008c"),
    ("☺☻☹", "00e2009800ba00e2009800bb00e2009800b9"),
    ("a☺b☻c☹d", "6100e2009800ba6200e2009800bb6300e2009800b964"),
    (
        "1\u{2000}2\u{2001}3\u{2002}4",
        "3100e2008000803200e2008000813300e20080008234",
    ),
    ("ɐɐɐɐɐ", "00c9009000c9009000c9009000c9009000c90090"),
    (
        "\u{9}\u{b}\u{d}\u{c}\u{a}\u{85}\u{a0}\u{2000}\u{3000}",
        "090b0d0c0a00c2008500c200a000e20080008000e300800080",
    ),
    (
        "abcçdefgğhıijklmnoöprsştuüvyz",
        "61626300c300a7b8666700c4009f6800c400b1696a6b6c6d6e6f00c300b670727300c5009f747500c300bc76797a",
    ),
    ("ÿøû", "00c300bf00c300b800c300bb"),
    ("μ", "00ce00bc"),
    ("μδ", "00ce00bc00ce00b4"),
    ("😁", "00f0009f00980081"),
    ("test\u{0}test", "c8990000c899"),
    (
        "short strings are everywhere in a running system, and most of them never see a dictionary coder worth the name.",
        "d09a7420d0719973208765206576e002f100208820612072756e6e8867207379a1656d2c20846420b6a1208f2090656d209a768020a065206120dc75c50f727920acb87220d91668209065206e61b42e",
    ),
    (
        "The encoder walks the input once, replaces predicted letter pairs with packed table references, and leaves everything else alone. It is very fast and easy to use.",
        "549420c070b87220b06c6b73209065208870a920c6712c209c70d3a97320e80811d66420a474927220706169727320d8902070c36064207461bd65209ce89001c72c20846420a461768320e05005c29920656ca020c329652e2049742089207680792066867420846420658679209120ab652e",
    ),
    (
        "names, paths and identifiers tend to repeat the same handful of letter pairs over and over again",
        "6e61b4732c207085687320846420c5c1936669807320c8882091209c706585209065207361b420ca4066aa208f20a4749272207061697273206f7680208464206f76802061676188",
    ),
];

/// (plaintext, compressed hex), proposed framing, default model.
const PROPOSED_FIXTURES: &[(&str, &str)] = &[
    ("μ", "01cebc"),
    ("μδ", "03cebcceb4"),
    ("😁", "03f09f9881"),
];

#[test]
fn test_compress_fixtures() {
    for (plain, hex) in FIXTURES {
        assert_eq!(
            strzip::compress(plain.as_bytes()),
            unhex(hex),
            "compressing {:?}",
            plain
        );
    }
}

#[test]
fn test_decompress_fixtures() {
    for (plain, hex) in FIXTURES {
        assert_eq!(
            strzip::decompress(&unhex(hex)).unwrap(),
            plain.as_bytes(),
            "decompressing {:?}",
            plain
        );
    }
}

#[test]
fn test_proposed_compress_fixtures() {
    for (plain, hex) in PROPOSED_FIXTURES {
        assert_eq!(
            strzip::proposed_compress(plain.as_bytes()),
            unhex(hex),
            "compressing {:?}",
            plain
        );
    }
}

#[test]
fn test_proposed_decompress_fixtures() {
    for (plain, hex) in PROPOSED_FIXTURES {
        assert_eq!(
            strzip::proposed_decompress(&unhex(hex)).unwrap(),
            plain.as_bytes(),
            "decompressing {:?}",
            plain
        );
    }
}

#[test]
fn test_ascii_identity_on_decode() {
    // Every byte in [0x01, 0x7f] sits outside pack header space and is not
    // the escape sentinel, so such input decodes to itself.
    let input: Vec<u8> = (0x01..=0x7f).collect();
    assert_eq!(strzip::decompress(&input).unwrap(), input);
}

#[test]
fn test_english_text_actually_shrinks() {
    let (plain, hex) = FIXTURES.iter().find(|(p, _)| p.len() > 150).unwrap();
    let packed = strzip::compress(plain.as_bytes());
    assert_eq!(packed.len(), hex.len() / 2);
    assert!(packed.len() * 4 < plain.len() * 3, "expected at least 1/4 savings");
}

#[test]
fn test_truncated_pack_header() {
    assert_eq!(
        strzip::decompress(&unhex("c8")),
        Err(StrzipError::truncated(0))
    );
}

#[test]
fn test_truncated_escape() {
    assert_eq!(
        strzip::decompress(&unhex("00")),
        Err(StrzipError::truncated(0))
    );
    assert_eq!(
        strzip::proposed_decompress(&unhex("03cebc")),
        Err(StrzipError::truncated(0))
    );
}

#[test]
fn test_malformed_pack_payload() {
    // A two-byte pack referencing an undefined successor rank of 'm'.
    assert_eq!(
        strzip::decompress(&unhex("dbc0")),
        Err(StrzipError::malformed_pack(0))
    );
    // The error offset tracks the offending token, not the input start.
    assert_eq!(
        strzip::decompress(&unhex("41dbc0")),
        Err(StrzipError::malformed_pack(1))
    );
}

#[test]
fn test_every_model_handles_every_framing() {
    let samples: [&[u8]; 4] = [
        b"the quick brown fox",
        b"/var/log/system/messages.log",
        b"alice.smith@example.com",
        "na\u{ef}ve caf\u{e9} text".as_bytes(),
    ];
    for model in [&WORDS_EN, &TEXT_EN, &FILE_PATH, &EMAILS] {
        for sample in samples {
            let packed = model.compress(sample);
            assert_eq!(model.decompress(&packed).unwrap(), sample);
            let packed = model.proposed_compress(sample);
            assert_eq!(model.proposed_decompress(&packed).unwrap(), sample);
        }
    }
}
