//! Compression models: immutable statistical tables plus a pack catalogue
//!
//! A [`Model`] encodes which bytes are predictable, how likely each byte is
//! to follow another (as a rank into a small ordered successor list), and
//! the catalogue of bit layouts ([`Pack`]s) the engine may emit. Models are
//! trained offline against a target corpus and ship as compile-time
//! constants; the engine itself is model-agnostic.
//!
//! Four trained models are provided: [`WORDS_EN`] (the default),
//! [`TEXT_EN`], [`FILE_PATH`] and [`EMAILS`]. All of them are plain data
//! with no I/O, no cache and no interior mutability, and may be shared
//! freely across threads.

mod emails;
mod file_path;
mod text_en;
mod words_en;

pub use emails::EMAILS;
pub use file_path::FILE_PATH;
pub use text_en::TEXT_EN;
pub use words_en::WORDS_EN;

use crate::decoder::decompress_with;
use crate::encoder::compress_with;
use crate::error::Result;
use crate::framing::Framing;

/// Maximum number of ranked successors a model stores per predecessor.
///
/// Pack payload fields are at most four bits wide, so ranks beyond this
/// bound could never be referenced on the wire.
pub const MAX_SUCCESSORS: usize = 16;

/// A fixed-width compressed token covering several consecutive input bytes.
///
/// The first payload field holds the id of the leading byte; every further
/// field holds a successor rank relative to the previously decoded byte.
/// Fields are packed big-endian into a 32-bit frame of which the top
/// `bytes_packed` bytes travel on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pack {
    /// Constant header pattern; payload bit positions are zero.
    pub(crate) word: u32,
    /// Compressed bytes this pack writes (1, 2 or 4).
    pub(crate) bytes_packed: usize,
    /// Plaintext bytes this pack represents (2, 4 or 8).
    pub(crate) bytes_unpacked: usize,
    /// Bit position of each payload field within the frame.
    pub(crate) offsets: &'static [u8],
    /// Field mask per slot; also the largest value the slot can hold.
    pub(crate) masks: &'static [u8],
    /// Bits that participate in header classification.
    pub(crate) header_mask: u8,
    /// Header value under `header_mask`.
    pub(crate) header: u8,
}

impl Pack {
    /// Compressed bytes this pack writes.
    pub fn bytes_packed(&self) -> usize {
        self.bytes_packed
    }

    /// Plaintext bytes this pack represents.
    pub fn bytes_unpacked(&self) -> usize {
        self.bytes_unpacked
    }

    /// Whether a compressed byte belongs to this pack.
    #[inline]
    pub(crate) fn matches(&self, byte: u8) -> bool {
        byte & self.header_mask == self.header
    }
}

/// An immutable bundle of tables and pack definitions trained offline
/// against a target corpus.
///
/// All lookups are total, constant-time and side-effect-free; out-of-range
/// arguments yield `None`, never a panic. See the [module docs](self) for
/// the shipped instances.
#[derive(Debug)]
pub struct Model {
    /// Indexable byte range, inclusive-exclusive; bounds the rows of
    /// `chrs_by_chr_and_successor_id`.
    pub(crate) min_chr: u8,
    pub(crate) max_chr: u8,
    /// The predictable alphabet, most frequent byte first.
    pub(crate) chrs_by_chr_id: &'static [u8],
    /// Inverse of `chrs_by_chr_id`; `-1` marks a byte with no id.
    pub(crate) chr_ids_by_chr: &'static [i8; 256],
    /// Predecessor id x candidate id -> successor rank, `-1` if unranked.
    pub(crate) successor_ids_by_chr_id_and_chr_id: &'static [[i8; 32]],
    /// (Predecessor byte - `min_chr`) x rank -> byte, `0` if undefined.
    pub(crate) chrs_by_chr_and_successor_id: &'static [[u8; MAX_SUCCESSORS]],
    /// Pack catalogue, longest plaintext span first.
    pub(crate) packs: &'static [Pack],
}

impl Model {
    /// Look up the id of a byte, if the byte is indexable.
    #[inline]
    pub fn id_of(&self, byte: u8) -> Option<u8> {
        let id = self.chr_ids_by_chr[byte as usize];
        if id >= 0 {
            Some(id as u8)
        } else {
            None
        }
    }

    /// Rank of `candidate_id` among the successors of `prev_id`, if ranked.
    #[inline]
    pub fn successor_rank(&self, prev_id: u8, candidate_id: u8) -> Option<u8> {
        let rank = *self
            .successor_ids_by_chr_id_and_chr_id
            .get(prev_id as usize)?
            .get(candidate_id as usize)?;
        if rank >= 0 {
            Some(rank as u8)
        } else {
            None
        }
    }

    /// The byte ranked `rank` in the successor list of the byte `prev`.
    #[inline]
    pub fn successor_byte(&self, prev: u8, rank: u8) -> Option<u8> {
        if prev < self.min_chr || prev >= self.max_chr {
            return None;
        }
        let row = self
            .chrs_by_chr_and_successor_id
            .get((prev - self.min_chr) as usize)?;
        match row.get(rank as usize) {
            Some(&byte) if byte != 0 => Some(byte),
            _ => None,
        }
    }

    /// The byte carrying `id`, if the id is within the alphabet.
    #[inline]
    pub(crate) fn byte_of_id(&self, id: u8) -> Option<u8> {
        self.chrs_by_chr_id.get(id as usize).copied()
    }

    /// The pack catalogue, in classification and preference order.
    pub fn packs(&self) -> &[Pack] {
        self.packs
    }

    /// Compress `input` under the original framing.
    pub fn compress(&self, input: &[u8]) -> Vec<u8> {
        compress_with(input, self, Framing::Original)
    }

    /// Decompress original-framing `input`.
    ///
    /// On error no partial output is returned.
    pub fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress_with(input, self, Framing::Original)
    }

    /// Compress `input` under the proposed framing.
    pub fn proposed_compress(&self, input: &[u8]) -> Vec<u8> {
        compress_with(input, self, Framing::Proposed)
    }

    /// Decompress proposed-framing `input`.
    ///
    /// On error no partial output is returned.
    pub fn proposed_decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress_with(input, self, Framing::Proposed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped() -> [(&'static str, &'static Model); 4] {
        [
            ("words_en", &WORDS_EN),
            ("text_en", &TEXT_EN),
            ("file_path", &FILE_PATH),
            ("emails", &EMAILS),
        ]
    }

    #[test]
    fn test_alphabet_inverse_agreement() {
        for (name, m) in shipped() {
            for (id, &chr) in m.chrs_by_chr_id.iter().enumerate() {
                assert_eq!(m.id_of(chr), Some(id as u8), "{}: id of {:?}", name, chr as char);
                assert!(m.min_chr <= chr && chr < m.max_chr, "{}: {:#04x} outside range", name, chr);
            }
            let indexable = (0u8..=255).filter(|&b| m.id_of(b).is_some()).count();
            assert_eq!(indexable, m.chrs_by_chr_id.len(), "{}", name);
        }
    }

    #[test]
    fn test_successor_tables_agree() {
        for (name, m) in shipped() {
            for (pid, &p) in m.chrs_by_chr_id.iter().enumerate() {
                for (cid, &c) in m.chrs_by_chr_id.iter().enumerate() {
                    let rank = m.successor_rank(pid as u8, cid as u8);
                    let back = rank.and_then(|r| m.successor_byte(p, r));
                    if let Some(r) = rank {
                        assert_eq!(back, Some(c), "{}: {:?} -> {:?} rank {}", name, p as char, c as char, r);
                        assert!((r as usize) < MAX_SUCCESSORS);
                    }
                }
            }
        }
    }

    #[test]
    fn test_packs_strictly_shrink() {
        for (name, m) in shipped() {
            for pack in m.packs() {
                assert!(pack.bytes_unpacked() >= 2, "{}", name);
                assert!(pack.bytes_packed() < pack.bytes_unpacked(), "{}", name);
            }
        }
    }

    #[test]
    fn test_packs_longest_first() {
        for (name, m) in shipped() {
            let spans: Vec<_> = m.packs().iter().map(|p| p.bytes_unpacked()).collect();
            let mut sorted = spans.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(spans, sorted, "{}", name);
        }
    }

    #[test]
    fn test_pack_headers_unambiguous() {
        for (name, m) in shipped() {
            for byte in 0u8..=255 {
                let matching: Vec<_> = m.packs().iter().filter(|p| p.matches(byte)).collect();
                assert!(matching.len() <= 1, "{}: byte {:#04x} matches {} packs", name, byte, matching.len());
            }
            // Headers live strictly in high-bit space so ASCII stays literal.
            for byte in 0u8..0x80 {
                assert!(m.packs().iter().all(|p| !p.matches(byte)), "{}", name);
            }
        }
    }

    #[test]
    fn test_pack_fields_fill_the_frame() {
        for (name, m) in shipped() {
            for pack in m.packs() {
                assert_eq!(pack.offsets.len(), pack.bytes_unpacked, "{}", name);
                assert_eq!(pack.masks.len(), pack.bytes_unpacked, "{}", name);
                let header_bits = pack.header_mask.count_ones();
                let payload_bits: u32 = pack
                    .masks
                    .iter()
                    .map(|&mask| (mask as u32 + 1).trailing_zeros())
                    .sum();
                assert_eq!(
                    header_bits + payload_bits,
                    pack.bytes_packed as u32 * 8,
                    "{}: header and payload must exactly fill the wire bytes",
                    name
                );
                // Payload fields stay clear of the header pattern.
                for (slot, (&off, &mask)) in pack.offsets.iter().zip(pack.masks).enumerate() {
                    let field = (mask as u32) << off;
                    assert_eq!(field & pack.word, 0, "{}: slot {} overlaps header", name, slot);
                }
            }
        }
    }

    #[test]
    fn test_lookups_are_total() {
        for (_, m) in shipped() {
            for b in 0u8..=255 {
                let _ = m.id_of(b);
                let _ = m.successor_byte(b, 0);
                let _ = m.successor_byte(b, 255);
            }
            assert_eq!(m.successor_rank(255, 255), None);
            assert_eq!(m.byte_of_id(255), None);
        }
    }
}
