//! Default model, trained on an English word list.
//!
//! This is the model behind the crate-level [`compress`](crate::compress) /
//! [`decompress`](crate::decompress) functions. Its tables are wire-compatible
//! with widely deployed compressed data; the fixture tests in
//! `tests/codec_tests.rs` pin them byte-for-byte.

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

static CHRS_BY_CHR_ID: [u8; 32] = *b"eaiothnrslucwmdbpfgvyk-HMT'BxIWL";

#[rustfmt::skip]
static CHR_IDS_BY_CHR: [i8; 256] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, 26, -1, -1, -1, -1, -1, 22, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, 27, -1, -1, -1, -1, -1, 23, 29, -1, -1, 31, 24, -1, -1,
    -1, -1, -1, -1, 25, -1, -1, 30, -1, -1, -1, -1, -1, -1, -1, -1,
    -1,  1, 15, 11, 14,  0, 17, 18,  5,  2, -1, 21,  9, 13,  6,  3,
    16, -1,  7,  8,  4, 10, 19, 12, 28, 20, -1, -1, -1, -1, -1, -1,
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
    [ 7,  4, 11, 14,  6, -1,  1,  0,  3,  5, -1,  9, -1,  8,  2, -1, -1, -1, 15, 10, 13, -1, -1, -1, -1, -1, -1, -1, 12, -1, -1, -1],
    [-1, -1, 12, -1,  1, -1,  0,  3,  2,  4, 15,  5, -1,  9,  6, -1, 10, -1,  8, 11, 13, 14, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 8, 10, -1,  4,  2, -1,  0,  9,  1,  5, -1,  6, -1,  3,  7, 13, 15, 14, 11, 12, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1,  7,  8, -1,  1,  2,  9,  6,  0, 13,  5,  4, 10, 15, 11,  3, 14, 12, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  4,  3,  1,  8,  0, 15,  6,  5,  9,  7, 12, 11, 13, -1, 14, -1, -1, -1, -1, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  2,  3,  4, -1,  8,  5,  9, 10,  7, 15, 13, 11, 14, 12, -1, -1, -1, -1,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  7,  8,  5,  3, -1, 10, -1,  4, 14,  9,  6, -1, -1,  0, -1, -1, 12,  1, 13, 15, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  3,  1,  2,  6, -1, 10, -1,  4, 12,  8, 11, -1,  9,  7, 15, -1, -1, 14, -1,  5, 13, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  9,  3,  4,  1,  2, 14, -1,  5, 13,  6,  8, 12, 10, -1, 15,  7, -1, -1, -1, -1, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  6,  2,  5, 10, -1, -1, -1,  8,  1,  4, 15, -1,  9,  7, 14, -1, 11, -1, 12,  3, 13, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [12, 11, 14, -1,  1, -1,  4,  0,  3,  2, -1,  6, -1,  5, 10,  9,  8, 13,  7, -1, -1, 15, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  3,  6,  0,  5,  2, -1,  8, 12,  9,  7, 10, -1, 13, -1, -1, -1, -1, -1, -1, 11,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  0,  2,  4,  9,  1,  5,  6,  7,  8, 12, -1, -1, 13, 10, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  3,  2, 12, -1,  9, -1,  6, 11,  4, 13, -1, -1, 14,  8,  5, -1, -1, -1, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  3,  1,  2, -1, -1, 10,  6,  4,  8,  5, -1, 14, 13,  7, -1, -1, -1, 11,  9, 12, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  5,  4,  2, 10, -1, -1,  6,  8,  1,  3, 11, -1, 12, -1,  7, -1, -1, -1, -1,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  2,  5,  3,  8,  9, -1,  1, 10,  4,  6, -1, -1, -1, -1, -1,  7, -1, -1, -1, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  3,  0,  1,  7, -1, 10,  4, -1,  8,  6, -1, -1, -1, -1, -1, -1,  5, -1, -1,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  4,  3,  7, 11,  0,  5,  2, 10,  6,  8, -1, -1, -1, -1, -1, -1, -1,  9, -1, 12, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  2,  1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  5,  3,  1,  6, -1, 12, 13,  2,  8, 15,  9, 14,  7, 10, 11,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0, -1,  1, -1, -1, -1,  2, -1,  3,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [12,  2, 14, -1,  0, 10, -1, 13,  1, 11, -1,  4,  7,  8,  5,  3,  9,  6, 15, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  3,  2, -1, -1, -1, -1, -1, -1,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  0,  2,  1, -1, -1, -1,  6, -1, -1,  4,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  4,  3,  1, -1,  0, -1,  5, -1, -1,  6, -1,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 4, -1, -1, -1,  1, -1, -1,  3,  0,  7, -1, -1, -1,  5,  6, -1, -1, -1, -1,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  3,  5,  4, -1, -1, -1,  2, -1,  6,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  3,  2, -1,  1, -1, -1, -1, -1, -1, -1,  5, -1, -1, -1, -1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1,  0, -1,  1, -1,  2, -1, -1, -1, -1, -1, -1, -1, -1,  3, -1, -1, -1, -1, -1, -1, -1, -1,  4, -1, -1, -1, -1, -1],
    [ 1,  2,  3,  4, -1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  0,  2,  1, -1, -1, -1, -1, -1, -1,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

#[rustfmt::skip]
static CHRS_BY_CHR_AND_SUCCESSOR_ID: [[u8; 16]; 83] = [
    *b"stvremdl\x00\x00\x00\x00\x00\x00\x00\x00", // "'"
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    *b"tsabcdfwmphlerig", // '-'
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
    [0; 16],
    [0; 16],
    *b"euraoil\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'B'
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    *b"eaoiu\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'H'
    *b"tnsf'\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'I'
    [0; 16],
    [0; 16],
    *b"aoieu\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'L'
    *b"aoieucr\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'M'
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    *b"hoeiaruw\x00\x00\x00\x00\x00\x00\x00\x00", // 'T'
    [0; 16],
    [0; 16],
    *b"heaio\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'W'
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    [0; 16],
    *b"ntsrlcd\x00gmpviyku", // 'a'
    *b"elouiarbsytcm\x00\x00\x00", // 'b'
    *b"oehaktiurlcysm\x00\x00", // 'c'
    *b"eioasurdlvngymw\x00", // 'd'
    *b"rndsaltemcvixyog", // 'e'
    *b"ioearfutlyn\x00\x00\x00\x00\x00", // 'f'
    *b"herianlougsty\x00\x00\x00", // 'g'
    *b"eaiotryunslmbwdc", // 'h'
    *b"nstmolcderagvbfp", // 'i'
    [0; 16],
    *b"einsly\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'k'
    *b"eliyuoadsmtfvkbc", // 'l'
    *b"eaoiups\x00bnyltcd\x00", // 'm'
    *b"dgetsocaiunkfvly", // 'n'
    *b"unrfmwlotsdpvcgb", // 'o'
    *b"eraoliupthsy\x00\x00\x00\x00", // 'p'
    [0; 16],
    *b"eioasytdumnclkgb", // 'r'
    *b"ethiosupcamkwlnb", // 's'
    *b"hoeiasrutlywcmbn", // 't'
    *b"rtlsnmcgpbdaefik", // 'u'
    *b"eiaoy\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'v'
    *b"ahieonrsltdbum\x00\x00", // 'w'
    *b"ptiaec\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'x'
    *b"eosipatmlcdbnrwu", // 'y'
];

/// See the [module docs](self).
pub static WORDS_EN: Model = Model {
    min_chr: 39,
    max_chr: 122,
    chrs_by_chr_id: &CHRS_BY_CHR_ID,
    chr_ids_by_chr: &CHR_IDS_BY_CHR,
    successor_ids_by_chr_id_and_chr_id: &SUCCESSOR_IDS_BY_CHR_ID_AND_CHR_ID,
    chrs_by_chr_and_successor_id: &CHRS_BY_CHR_AND_SUCCESSOR_ID,
    packs: &PACKS,
};
