#![cfg_attr(not(feature = "std"), no_std)]

//! # Digit signatures
//!
//! Weak Boneh-Boyen signatures as described in the paper [Short Signatures Without Random Oracles](https://eprint.iacr.org/2004/171),
//! with the public key in group G1 and signatures in group G2. A signature on message `m` under secret key `y`
//! is `g2 * 1/(y + m)` and verifies with `e(Y + g1 * m, sig) == e(g1, g2)` where `Y = g1 * y`.
//!
//! The signer issues these signatures over a small alphabet of digits `0, 1, ..., u-1` once, during the
//! setup of a range proof, and a prover later proves knowledge of a signature on a hidden digit.

extern crate alloc;

pub mod common;
pub mod error;
pub mod weak_bb_sig;

pub use common::{SignatureParams, SignatureParamsWithPairing};
pub use error::DigitSigError;
pub use weak_bb_sig::{KeyPair, PublicKeyG1, SecretKey, SignatureG2};
