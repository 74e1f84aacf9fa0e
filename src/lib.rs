//! # Strzip: Short-String Compression
//!
//! This crate compresses short byte sequences (names, paths, identifiers,
//! log fragments) where general-purpose dictionary coders waste space on
//! headers and sliding windows. Common byte pairs and short n-grams are
//! replaced by single-byte packed references into precomputed statistical
//! tables ("models"); everything else falls through to literal bytes, so
//! every input round-trips.
//!
//! ## Key Features
//!
//! - **Packed n-gram tokens**: predicted runs of 2, 4 or 8 bytes shrink to
//!   1, 2 or 4 bytes
//! - **Trained models**: constants for English words (default), English
//!   prose, file paths and e-mail addresses
//! - **Two literal framings**: the byte-wise original escape, wire
//!   compatible with widely deployed data, and a proposed run escape that
//!   keeps UTF-8 code points contiguous
//! - **Total round-trip**: compression never fails; decompression fails
//!   only on input no encoder could have produced
//! - **Pure and reentrant**: no state, no I/O, models shareable across
//!   threads without synchronization
//!
//! ## Quick Start
//!
//! ```rust
//! let packed = strzip::compress(b"test");
//! assert_eq!(packed, [0xc8, 0x99]);
//! assert_eq!(strzip::decompress(&packed).unwrap(), b"test");
//!
//! // Pick the model that matches the data.
//! let packed = strzip::FILE_PATH.compress(b"/usr/share/dict/words");
//! assert_eq!(strzip::FILE_PATH.decompress(&packed).unwrap(), b"/usr/share/dict/words");
//! ```
//!
//! The two framings are incompatible on the wire and a compressed blob does
//! not record which one produced it; both ends must agree out of band.

#![warn(missing_docs)]

pub mod error;
pub mod model;

mod decoder;
mod encoder;
mod framing;

pub use error::{Result, StrzipError};
pub use model::{Model, Pack, EMAILS, FILE_PATH, MAX_SUCCESSORS, TEXT_EN, WORDS_EN};

/// Compress `input` with the default English-words model, original framing.
pub fn compress(input: &[u8]) -> Vec<u8> {
    WORDS_EN.compress(input)
}

/// Decompress original-framing `input` with the default English-words model.
///
/// On error no partial output is returned.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    WORDS_EN.decompress(input)
}

/// Compress `input` with the default English-words model, proposed framing.
pub fn proposed_compress(input: &[u8]) -> Vec<u8> {
    WORDS_EN.proposed_compress(input)
}

/// Decompress proposed-framing `input` with the default English-words model.
///
/// On error no partial output is returned.
pub fn proposed_decompress(input: &[u8]) -> Result<Vec<u8>> {
    WORDS_EN.proposed_decompress(input)
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing strzip v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_default_model_roundtrip() {
        let input = b"a short string worth shrinking";
        let packed = compress(input);
        assert!(packed.len() < input.len());
        assert_eq!(decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_proposed_entry_points() {
        let input = "Übergrößenträger".as_bytes();
        let packed = proposed_compress(input);
        assert_eq!(proposed_decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_framings_are_incompatible_on_the_wire() {
        let input = "μδ".as_bytes();
        assert_ne!(compress(input), proposed_compress(input));
    }

    #[test]
    fn test_re_exports() {
        let _err: StrzipError = StrzipError::truncated(0);
        let models: [&Model; 4] = [&WORDS_EN, &TEXT_EN, &FILE_PATH, &EMAILS];
        for m in models {
            assert!(!m.packs().is_empty());
        }
    }

    #[test]
    fn test_multiple_init_calls() {
        init();
        init();
        init();
    }
}
