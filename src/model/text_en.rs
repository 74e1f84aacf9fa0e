//! Model trained on English prose.
//!
//! Compared to [`WORDS_EN`](super::WORDS_EN) the alphabet admits the space
//! character and sentence punctuation, which makes it the better choice for
//! log fragments and free-form text.

use super::{Model, Pack};

static PACKS: [Pack; 3] = [
    Pack {
        word: 0xe0000000,
        bytes_packed: 4,
        bytes_unpacked: 8,
        offsets: &[23, 19, 15, 11, 8, 5, 2, 0],
        masks: &[31, 15, 15, 15, 7, 7, 7, 3],
        header_mask: 0xf0,
        header: 0xe0,
    },
    Pack {
        word: 0xc0000000,
        bytes_packed: 2,
        bytes_unpacked: 4,
        offsets: &[25, 22, 19, 16],
        masks: &[15, 7, 7, 7],
        header_mask: 0xe0,
        header: 0xc0,
    },
    Pack {
        word: 0x80000000,
        bytes_packed: 1,
        bytes_unpacked: 2,
        offsets: &[26, 24],
        masks: &[15, 3],
        header_mask: 0xc0,
        header: 0x80,
    },
];

static CHRS_BY_CHR_ID: [u8; 32] = *b" etoanshirlwdmpyfg,ucb.IkvTxjAqz";

#[rustfmt::skip]
static CHR_IDS_BY_CHR: [i8; 256] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 18, -1, 22, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, 29, -1, -1, -1, -1, -1, -1, -1, 23, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, 26, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1,  4, 21, 20, 12,  1, 16, 17,  7,  8, 28, 24, 10, 13,  5,  3,
    14, 30,  9,  6,  2, 19, 25, 11, 27, 15, 31, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
];

#[rustfmt::skip]
static SUCCESSOR_IDS_BY_CHR_ID_AND_CHR_ID: [[i8; 32]; 32] = [
    [-1, 13,  0,  3,  1, -1,  5, 14,  4, -1, 11,  2, 15,  6,  7, -1, 12, -1, -1, -1, 10,  8, -1,  9, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  7,  8, 10,  5,  9,  2, -1, -1,  1,  4, -1,  6, -1, -1, 15, -1, -1,  3, -1, 12, -1, 11, -1, -1, 13, -1, 14, -1, -1, -1, -1],
    [ 1,  2,  8,  4, 12, -1,  7,  0,  3,  6,  5, 13, -1, -1, -1, -1, -1, -1, 10,  9, -1, -1, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2, -1, 10, 12, -1,  3, 13, -1, -1,  0,  8,  4,  7,  6,  9, -1,  1, -1, 14,  5, 15, -1, -1, -1, -1, 11, -1, -1, -1, -1, -1, -1],
    [ 1, 14,  5, -1, -1,  0,  3, -1, 12,  2,  4, -1, 13,  9, 10,  8, -1,  7, -1, -1,  6, 11, -1, -1, -1, 15, -1, -1, -1, -1, -1, -1],
    [ 0,  3,  5,  4, 12,  9, 14,  7,  8, -1, -1, -1,  2, -1, -1,  6, -1,  1, 10, -1, 13, -1, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  2,  1, -1,  5, -1,  7,  3,  6, -1, -1, -1,  9, 11, -1, -1, -1, -1,  4, 12, -1, -1,  8, -1, 10, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  0,  5,  2,  1,  7, -1, -1,  4, -1, -1, -1, -1,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, 10,  1,  5, -1,  0,  2, -1, -1,  9,  3, -1, -1,  8, -1, -1,  6, 11, -1, -1,  4, -1, -1, -1,  7, 12, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  2,  6, -1,  7,  3, -1,  4, -1,  9, -1,  5, -1, -1,  8, -1, -1, -1, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  0, -1,  7,  6, -1, 10, -1,  1, -1,  2, -1,  4, -1, -1,  5, -1, -1,  9, -1, -1, -1,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 6,  5, -1,  1,  0,  4, -1,  3,  2,  9,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  6, -1,  4,  2, -1, -1, -1,  3, -1, -1, -1, -1, -1, -1,  8, -1,  7,  1, -1, -1, -1,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 7,  0, -1,  3,  1, -1, -1, -1,  2, -1, -1, -1, -1,  9,  4,  6, -1, -1,  8,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1,  2, -1,  5,  0, -1,  8, -1, -1,  6,  1, -1, -1, -1,  3,  4, -1, -1, -1,  9, -1, -1,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  1, -1, -1,  3,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  3, -1,  1,  2, -1, -1, -1,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1, -1,  4, -1, -1,  2,  3,  6,  8,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1,  2, -1, -1,  0,  4, -1,  7,  1,  3, -1, -1,  8, -1, -1, -1,  6, -1, -1, -1,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1,  4,  3,  0, -1, -1, -1,  1,  5, -1,  6, -1, -1, -1, -1, -1, -1, -1, -1,  7, -1, -1, -1, -1,  2, -1, -1, -1, -1, -1, -1, -1],
    [-1,  0, -1,  1, -1, -1, -1, -1, -1,  2, -1, -1, -1, -1, -1,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  3, -1, -1, -1],
    [ 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0, -1,  1, -1, -1,  2,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  0, -1, -1, -1,  3,  4, -1,  2, -1, -1, -1, -1, -1, -1,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1,  0, -1, -1, -1, -1, -1, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0, -1,  2, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  0, -1, -1, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

#[rustfmt::skip]
static CHRS_BY_CHR_AND_SUCCESSOR_ID: [[u8; 16]; 91] = [
    *b"tawoismpbIclfehd", // ' '
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    *b" \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // ','
    [0; 16],
    *b" \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // '.'
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    *b"lp\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'A'
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    *b" tns\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'I'
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    *b"h\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'T'
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    *b"n rsltcgympbidev", // 'a'
    *b"eorjy\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'b'
    *b"ohkteilu\x00\x00\x00\x00\x00\x00\x00\x00", // 'c'
    *b" ,aio.egy\x00\x00\x00\x00\x00\x00\x00", // 'd'
    *b" rs,ladetno.cvxy", // 'e'
    *b" oaei\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'f'
    *b" esho.ilr\x00\x00\x00\x00\x00\x00\x00", // 'g'
    *b"eao itmn\x00\x00\x00\x00\x00\x00\x00\x00", // 'h'
    *b"ntslcofkmregv\x00\x00\x00", // 'i'
    *b"eu\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'j'
    *b"e insy\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'k'
    *b"eil dyao.,s\x00\x00\x00\x00\x00", // 'l'
    *b"eaiopuy ,m\x00\x00\x00\x00\x00\x00", // 'm'
    *b" gdeotyhin,.acs\x00", // 'n'
    *b"rf nwumdlptvos,c", // 'o'
    *b"alepyor.su\x00\x00\x00\x00\x00\x00", // 'p'
    *b"u\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'q'
    *b" etsidonylu\x00\x00\x00\x00\x00", // 'r'
    *b" teh,ais.dkmu\x00\x00\x00", // 's'
    *b"h eiolrstu,.aw\x00\x00", // 't'
    *b"nrtlsbgim\x00\x00\x00\x00\x00\x00\x00", // 'u'
    *b"ei\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'v'
    *b"aoihne .lr\x00\x00\x00\x00\x00\x00", // 'w'
    *b" at\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'x'
    *b" ,.be\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'y'
    *b"y\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'z'
];

/// See the [module docs](self).
pub static TEXT_EN: Model = Model {
    min_chr: 32,
    max_chr: 123,
    chrs_by_chr_id: &CHRS_BY_CHR_ID,
    chr_ids_by_chr: &CHR_IDS_BY_CHR,
    successor_ids_by_chr_id_and_chr_id: &SUCCESSOR_IDS_BY_CHR_ID_AND_CHR_ID,
    chrs_by_chr_and_successor_id: &CHRS_BY_CHR_AND_SUCCESSOR_ID,
    packs: &PACKS,
};
