//! Model trained on filesystem paths.

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

static CHRS_BY_CHR_ID: [u8; 32] = *b"/esroctaindl.mpugb-h2x0_jv4fwk1y";

#[rustfmt::skip]
static CHR_IDS_BY_CHR: [i8; 256] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 18, 12,  0,
    22, 30, 20, -1, 26, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 23,
    -1,  7, 17,  5, 10,  1, 27, 16, 19,  8, 24, 29, 11, 13,  9,  4,
    14, -1,  3,  2,  6, 15, 25, 28, 21, 31, -1, -1, -1, -1, -1, -1,
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
    [-1,  6,  1,  3, -1,  0, 15, 12,  7, -1,  2,  4, -1,  8, 14,  9, -1,  5, -1, 13, 11, -1, -1, -1, -1, 10, -1, -1, -1, -1, -1, -1],
    [ 0, -1,  1,  2, -1,  3,  9,  5, -1,  4, 12,  6, 11, 13,  8, -1, -1, 15, -1, -1, -1, 10, -1, 14, -1, -1, -1,  7, -1, -1, -1, -1],
    [ 0,  1,  6,  2,  9,  8,  3, 11, 12, -1, -1, -1,  4, 13, 14, 15, -1, -1, 10,  5, -1, -1, -1,  7, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  0,  1, -1,  4,  3, 11,  5,  7, -1,  6, 14, 10, 15, -1,  8, 12, -1,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 13, -1, -1],
    [-1, -1, -1,  2, 11,  4, 13, -1, 10,  1,  0,  5,  8,  3, 12, -1,  6,  9, -1, -1, -1, -1, -1, -1,  7, 14, -1, -1, -1, -1, -1, 15],
    [ 1,  3, -1,  9,  0, -1,  2,  5, -1, -1, -1,  7,  8, -1, -1, 11, -1, -1, -1,  6, -1, -1, -1, -1, 10, -1, -1, -1, -1,  4, -1, -1],
    [ 4,  1,  0,  5, 13, 10, 14,  2,  3, -1, -1, -1,  8, 12, -1, -1, -1, -1,  6, 11, -1,  7, -1,  9, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 6, -1,  4,  1, -1,  3,  0, -1,  8, -1, 11,  2, -1,  9, 10, 12,  5,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, 10,  8, -1,  2,  3, 11,  9, -1,  0, -1,  5, -1,  6,  7, -1,  4,  1, -1, -1, -1, -1, -1, -1, -1, 12, -1, -1, -1, -1, -1, -1],
    [ 5, 11,  8, -1, 14,  3,  2,  6, 12, 13, 10, -1,  1, -1, -1,  9,  0, -1,  4, -1, -1, 15, -1, -1, -1, -1, -1,  7, -1, -1, -1, -1],
    [ 5,  0,  4, -1,  2, -1, -1,  1,  3, -1, -1, -1, -1, -1, -1,  6, -1, -1,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  1,  9, -1,  3, -1, 10,  5,  0, -1,  6, -1,  4, -1, -1,  7, -1, -1,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, 10,  4,  0, -1,  2,  5, -1, -1, -1, -1, 13, -1,  3,  6, -1, 11,  9, -1, 12, -1, -1, -1, -1,  1, -1,  8, -1, -1, -1,  7, -1],
    [ 2,  0,  9, -1,  5, -1, -1,  3,  4, -1,  7, -1,  6,  8,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  9,  7,  0,  5, -1,  1,  3, -1, 10, -1,  4,  8, -1,  6, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 12],
    [ 5, -1,  0, -1, -1,  6, -1, -1,  3,  2,  7,  4, -1,  1,  9, -1,  8, -1, -1, -1, -1, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  7,  3, -1, -1, -1, -1,  2,  6, -1,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  4, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0, -1,  8, -1,  7,  6, -1,  3,  1, -1, -1,  4,  5, -1, -1,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1,  3, -1, -1,  8, -1, -1, -1, -1, -1,  2,  6, -1,  7,  9, -1,  5, -1, -1, -1, -1, -1,  0, -1, -1, -1, -1,  4, 10, -1,  1, -1],
    [-1,  3, -1, -1,  0, -1, -1,  1,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  0, -1, -1, -1,  3, -1, -1, -1, -1, -1],
    [ 3, -1, -1, -1, -1, -1,  0,  4, -1, -1, -1, -1,  2, -1,  5, -1, -1, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  0, -1, -1, -1, -1, -1,  1, -1, -1, -1,  3, -1],
    [-1,  2,  4, -1, -1,  0,  5, -1, -1, -1,  1, -1, -1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1,  1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1,  1, -1, -1,  4, -1, -1,  0,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  1, -1, -1, -1, -1, -1,  0, -1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1,  0, -1, -1, -1, -1, -1,  2,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1,  0, -1, -1, -1, -1, -1, -1, -1,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1,  1,  3, -1, -1, -1, -1,  0, -1, -1, -1, -1, -1, -1,  2,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  0, -1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1,  2, -1],
    [ 1, -1,  2, -1, -1, -1,  3, -1, -1, -1, -1, -1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

#[rustfmt::skip]
static CHRS_BY_CHR_AND_SUCCESSOR_ID: [[u8; 16]; 77] = [
    *b"01defglmopw\x00\x00\x00\x00\x00", // '-'
    *b"rjcmstp14beghl\x00\x00", // '.'
    *b"csdrlbeimuv2ahpt", // '/'
    *b"24/1\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // '0'
    *b"-/12\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // '1'
    *b"0./4\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // '2'
    [0; 16],
    *b"-./2\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // '4'
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
    *b"cdemst\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // '_'
    [0; 16],
    *b"trlcsg/bimpdu\x00\x00\x00", // 'a'
    *b"/iual.cos\x00\x00\x00\x00\x00\x00\x00", // 'b'
    *b"o/tekahl.rju\x00\x00\x00\x00", // 'c'
    *b"eaois/u-\x00\x00\x00\x00\x00\x00\x00\x00", // 'd'
    *b"/srcnalfptx.dm_b", // 'e'
    *b"eia\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'f'
    *b"/eir_lns\x00\x00\x00\x00\x00\x00\x00\x00", // 'g'
    *b"oa-ei\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'h'
    *b"nbocglmpsaetv\x00\x00\x00", // 'i'
    *b"se\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'j'
    *b"aepsu\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'k'
    *b"ie/o.adu-st\x00\x00\x00\x00\x00", // 'l'
    *b"ep/aio.dms\x00\x00\x00\x00\x00\x00", // 'm'
    *b"g.tc-/afsudeinox", // 'n'
    *b"dnrmclgj.bioptvy", // 'o'
    *b"rt/alops.enuy\x00\x00\x00", // 'p'
    [0; 16],
    *b"es/coadiu-.tgklm", // 'r'
    *b"/ert.hs_co-aimpu", // 's'
    *b"seai/r-x._chmot\x00", // 't'
    *b"smnil/cdgpx\x00\x00\x00\x00\x00", // 'u'
    *b"ae2io\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'v'
    *b"o.\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'w'
    *b"t-./ap\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'x'
    *b"./st\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00", // 'y'
];

/// See the [module docs](self).
pub static FILE_PATH: Model = Model {
    min_chr: 45,
    max_chr: 122,
    chrs_by_chr_id: &CHRS_BY_CHR_ID,
    chr_ids_by_chr: &CHR_IDS_BY_CHR,
    successor_ids_by_chr_id_and_chr_id: &SUCCESSOR_IDS_BY_CHR_ID_AND_CHR_ID,
    chrs_by_chr_and_successor_id: &CHRS_BY_CHR_AND_SUCCESSOR_ID,
    packs: &PACKS,
};
