//! Header classification, pack expansion and validation
//!
//! Decompression mirrors the encoder's single pass: classify each byte as a
//! pack header or a literal, expand packs through the model's successor
//! tables, and fail fast on inputs no encoder could have produced. On error
//! nothing is returned; partial output is dropped.

use crate::error::{Result, StrzipError};
use crate::framing::{Framing, ESCAPE_SENTINEL, MAX_ESCAPE_RUN};
use crate::model::{Model, Pack};

fn truncated(offset: usize) -> StrzipError {
    let err = StrzipError::truncated(offset);
    log::trace!("rejecting compressed input: {}", err);
    err
}

fn malformed(offset: usize) -> StrzipError {
    let err = StrzipError::malformed_pack(offset);
    log::trace!("rejecting compressed input: {}", err);
    err
}

/// Decompress `input` against `model` under `framing`.
pub(crate) fn decompress_with(input: &[u8], model: &Model, framing: Framing) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() * 2);
    let mut i = 0;

    while i < input.len() {
        let b = input[i];
        if let Some(pack) = model.packs().iter().find(|p| p.matches(b)) {
            i = expand_pack(&mut out, input, i, pack, model)?;
            continue;
        }

        match framing {
            Framing::Original => {
                if b == ESCAPE_SENTINEL {
                    if i + 1 >= input.len() {
                        return Err(truncated(i));
                    }
                    out.push(input[i + 1]);
                    i += 2;
                } else {
                    out.push(b);
                    i += 1;
                }
            }
            Framing::Proposed => {
                if b < MAX_ESCAPE_RUN as u8 {
                    let run = b as usize + 1;
                    if i + 1 + run > input.len() {
                        return Err(truncated(i));
                    }
                    out.extend_from_slice(&input[i + 1..i + 1 + run]);
                    i += 1 + run;
                } else {
                    out.push(b);
                    i += 1;
                }
            }
        }
    }

    Ok(out)
}

/// Expand one pack token at `pos`; returns the offset of the next token.
fn expand_pack(
    out: &mut Vec<u8>,
    input: &[u8],
    pos: usize,
    pack: &Pack,
    model: &Model,
) -> Result<usize> {
    if pos + pack.bytes_packed > input.len() {
        return Err(truncated(pos));
    }

    let mut frame = [0u8; 4];
    frame[..pack.bytes_packed].copy_from_slice(&input[pos..pos + pack.bytes_packed]);
    let word = u32::from_be_bytes(frame);

    let lead = ((word >> pack.offsets[0]) & pack.masks[0] as u32) as u8;
    let mut prev = match model.byte_of_id(lead) {
        Some(b) => b,
        None => return Err(malformed(pos)),
    };
    out.push(prev);

    for slot in 1..pack.bytes_unpacked {
        let rank = ((word >> pack.offsets[slot]) & pack.masks[slot] as u32) as u8;
        match model.successor_byte(prev, rank) {
            Some(b) => {
                out.push(b);
                prev = b;
            }
            None => return Err(malformed(pos)),
        }
    }

    Ok(pos + pack.bytes_packed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WORDS_EN;

    #[test]
    fn test_empty_input() {
        assert_eq!(decompress_with(b"", &WORDS_EN, Framing::Original).unwrap(), b"");
        assert_eq!(decompress_with(b"", &WORDS_EN, Framing::Proposed).unwrap(), b"");
    }

    #[test]
    fn test_pack_expansion() {
        assert_eq!(
            decompress_with(&[0xc8, 0x99], &WORDS_EN, Framing::Original).unwrap(),
            b"test"
        );
    }

    #[test]
    fn test_literals_pass_through() {
        assert_eq!(
            decompress_with(b"=#@", &WORDS_EN, Framing::Original).unwrap(),
            b"=#@"
        );
    }

    #[test]
    fn test_original_escape() {
        assert_eq!(
            decompress_with(&[0x00, 0xc2, 0x00, 0xb5], &WORDS_EN, Framing::Original).unwrap(),
            "µ".as_bytes()
        );
        // An escaped 0x00 is a genuine NUL.
        assert_eq!(
            decompress_with(&[0x00, 0x00], &WORDS_EN, Framing::Original).unwrap(),
            b"\x00"
        );
    }

    #[test]
    fn test_proposed_escape_run() {
        assert_eq!(
            decompress_with(&[0x03, 0xc2, 0xb5, 0xc2, 0xb5], &WORDS_EN, Framing::Proposed)
                .unwrap(),
            "µµ".as_bytes()
        );
    }

    #[test]
    fn test_truncated_pack() {
        assert_eq!(
            decompress_with(&[0xc8], &WORDS_EN, Framing::Original),
            Err(StrzipError::truncated(0))
        );
    }

    #[test]
    fn test_truncated_escape() {
        assert_eq!(
            decompress_with(&[0x41, 0x00], &WORDS_EN, Framing::Original),
            Err(StrzipError::truncated(1))
        );
        assert_eq!(
            decompress_with(&[0x03, 0xce, 0xbc], &WORDS_EN, Framing::Proposed),
            Err(StrzipError::truncated(0))
        );
    }

    #[test]
    fn test_malformed_pack() {
        // A two-byte pack whose first successor rank is a hole in the
        // default model's table for 'm'.
        assert_eq!(
            decompress_with(&[0xdb, 0xc0], &WORDS_EN, Framing::Original),
            Err(StrzipError::malformed_pack(0))
        );
    }

    #[test]
    fn test_unmatched_high_byte_is_literal() {
        // 0xf0..=0xff sit outside every pack header; the encoder never
        // emits them bare, but the decoder treats them as literals.
        assert_eq!(
            decompress_with(&[0xf5], &WORDS_EN, Framing::Original).unwrap(),
            [0xf5]
        );
    }
}
