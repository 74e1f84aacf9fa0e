//! Model trained on e-mail addresses.

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

static CHRS_BY_CHR_ID: [u8; 32] = *b"e.alomnriptc@xsgdhuvybk-wfz+j_2q";

#[rustfmt::skip]
static CHR_IDS_BY_CHR: [i8; 256] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 27, -1, 23,  1, -1,
    -1, -1, 30, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    12, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 29,
    -1,  2, 21, 11, 16,  0, 25, 15, 17,  8, 28, 22,  3,  5,  6,  4,
     9, 31,  7, 14, 10, 18, 19, 24, 13, 20, 26, -1, -1, -1, -1, -1,
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
    [11,  0,  6,  7, -1, -1,  4,  2, -1, -1,  3, 15,  5,  1,  8, -1, -1, -1, -1,  9, -1, -1, -1, 13, 12, -1, 10, -1, -1, 14, -1, -1],
    [ 0, -1,  8, 10,  2,  5,  3, 11,  4, -1,  7,  1, -1, -1, -1, 15, -1,  6, 12, -1, -1, 14, -1, -1, 13, -1, -1, -1,  9, -1, -1, -1],
    [-1,  5, -1,  2, -1,  0,  4,  1, -1, -1, 10,  3, 12, -1,  9,  8, 15, -1, -1,  6, 11, 14, -1,  7, -1, -1, -1, -1, -1, 13, -1, -1],
    [ 0,  3,  4,  1,  5, -1, -1, -1,  2, -1, -1, -1,  8, -1, -1, -1,  9, -1, -1, -1,  6, -1, 10, -1, -1, -1, -1,  7, -1, -1, -1, -1],
    [-1,  3,  9,  6, 10,  1,  2,  0, -1, 11,  7, -1, -1, -1, 12, -1,  5, -1,  8, -1, -1,  4, -1, -1, 13, -1, -1, -1, -1, -1, -1, -1],
    [-1,  3,  1, -1,  6, -1, -1, -1,  2,  0, -1, -1,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  4, -1, -1, -1, -1],
    [ 0,  2,  3, -1,  5, -1, 11, 14, 10, -1,  7,  8,  1, -1, 12,  4,  6, -1, -1, -1, -1, -1, 13, -1, -1,  9, -1, -1, -1, -1, -1, -1],
    [ 1,  4,  6, -1,  3, -1, 12, 13,  2, -1,  7,  8,  5, -1,  9,  0, -1, -1, -1, 14, 15, -1, 11, -1, -1, -1, -1, -1, -1, 10, -1, -1],
    [10, -1,  2,  4,  1, -1,  0, 12, -1, -1,  5,  3,  9, -1,  6,  7, -1, -1, -1,  8, -1, -1, -1, -1, -1, 11, -1, -1, -1, -1, -1, -1],
    [ 4, -1,  1,  0,  5, -1, -1, -1, -1,  6, -1, -1, -1, -1,  2, -1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  5,  3,  8,  9, -1, -1, 10,  1, -1, 11, -1, -1, -1,  2, -1, -1,  4, -1, -1,  6, -1, -1, -1, -1, -1, -1,  7, -1, -1, -1, -1],
    [ 1, -1,  2,  9,  0, -1, -1, -1,  4, -1,  5,  6, -1, -1, -1, -1,  7,  8, 10, -1, -1, -1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3, -1,  2,  7, -1, 13,  0,  8,  6, -1,  9,  5, -1, -1,  1, -1, 10, 12, 14, -1, -1,  4, -1, -1, -1, 11, -1, -1, -1, -1, -1, -1],
    [-1, -1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  0,  4,  7,  3,  8, -1, -1,  6,  9, 10, -1,  2, -1, -1, -1, -1, -1, 11, -1, -1, -1, -1,  5, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  0,  3, -1, -1, -1, -1,  6,  5, -1, -1, -1,  2, -1, -1, -1, -1,  4,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0, -1,  1, -1, -1,  3, -1,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  5, -1,  6, -1, -1,  2, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  2, -1,  3, -1, -1, -1,  5, -1,  6, -1,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3, -1, -1, -1, -1, -1,  0,  5,  1,  2, -1, -1, -1, -1,  6, -1, -1, -1, -1, -1, -1, -1,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  2, -1, -1,  4, -1, -1, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  3, -1],
    [-1,  0, -1,  3,  4, -1, -1, -1, -1, -1, -1, -1,  2, -1, -1, -1, -1, -1, -1,  5, -1, -1, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  3, -1, -1,  1, -1, -1,  5,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1,  6, -1, -1, -1, -1,  2, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  0,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1,  1, -1,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1,  0, -1],
    [ 1, -1,  0, -1, -1, -1,  4, -1,  3, -1, -1, -1, -1, -1,  5, -1, -1,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1,  2, -1, -1,  1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1,  1, -1, -1,  2, -1,  0, -1, -1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1,  0, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1,  0, -1, -1, -1, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

#[rustfmt::skip]
static CHRS_BY_CHR_AND_SUCCESSOR_ID: [[u8; 16]; 80] = [
    *b"cnps\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // '+'
    [0; 16],
    *b"2bo\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // '-'
    *b"econimhtajlruwbg", // '.'
    [0; 16],
    [0; 16],
    [0; 16],
    *b".\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // '2'
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
    *b"nsaebcilrtdfhmu\x00", // '@'
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
    *b"mt\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // '_'
    [0; 16],
    *b"mrlcn.v-gsty@_bd", // 'a'
    *b"io-.eru\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'b'
    *b"oeakitcdhlu\x00\x00\x00\x00\x00", // 'c'
    *b"ea-mruy\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'd'
    *b".xrtn@alsvzew-_c", // 'e'
    *b"iro\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'f'
    *b".e@ahiru\x00\x00\x00\x00\x00\x00\x00\x00", // 'g'
    *b"e.ao@it\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'h'
    *b"noacltsgv@efr\x00\x00\x00", // 'i'
    *b"ao\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'j'
    *b".@aes\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'k'
    *b"eli.aoy+@dk\x00\x00\x00\x00\x00", // 'l'
    *b"pai.+@o\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'm'
    *b"e@.agodtcfinskr\x00", // 'n'
    *b"rmn.bdltuaopsw\x00\x00", // 'o'
    *b"lasdeop\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'p'
    *b"au\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'q'
    *b"geio.@atcs_knrvy", // 'r'
    *b".e@oa-ilmptu\x00\x00\x00\x00", // 's'
    *b"eisah.y+lort\x00\x00\x00\x00", // 't'
    *b"nipekrs\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'u'
    *b"ei.2o\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'v'
    *b"aehins\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'w'
    *b"a\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'x'
    *b".-@lov\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'y'
    *b"@a\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'z'
];

/// See the [module docs](self).
pub static EMAILS: Model = Model {
    min_chr: 43,
    max_chr: 123,
    chrs_by_chr_id: &CHRS_BY_CHR_ID,
    chr_ids_by_chr: &CHR_IDS_BY_CHR,
    successor_ids_by_chr_id_and_chr_id: &SUCCESSOR_IDS_BY_CHR_ID_AND_CHR_ID,
    chrs_by_chr_and_successor_id: &CHRS_BY_CHR_AND_SUCCESSOR_ID,
    packs: &PACKS,
};
