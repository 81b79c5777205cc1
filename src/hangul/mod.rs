//! Hangul codec: syllable classification and jamo decomposition
//!
//! # Components
//! - `codec.rs`: block range check, decompose/compose over the jamo tables

pub mod codec;

pub use codec::{decompose, is_hangul_syllable};
