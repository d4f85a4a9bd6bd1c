#![cfg_attr(not(feature = "std"), no_std)]
#![allow(non_snake_case)]

//! # Range proofs from set membership
//!
//! Range proofs as described in the paper [Efficient Protocols for Set Membership and Range Proofs](https://link.springer.com/chapter/10.1007/978-3-540-89255-7_15)
//! by Camenisch, Chaabouni and shelat. The signer creates weak Boneh-Boyen signatures over every digit of a
//! base `u` and the prover, given a commitment `C = g2 * x + H * r`, proves that each of the `l` base-`u`
//! digits of `x` has a signature, without revealing which. This shows `x` is in `[0, u^l)`.
//!
//! Params are created with [`setup_perfect_range`] and proofs with [`ProverParams::prove_perfect_range`].
//! For an arbitrary range `[a, b)`, [`setup_arbitrary_range`] picks `l` such that `u^l > b` and
//! [`ArbitraryRangeProverParams::prove`] creates 2 perfect range proofs, one for `x - b + u^l` and one for `x - a`.
//!
//! The proofs are non-interactive using the Fiat-Shamir heuristic where the hash function is a type
//! parameter. Proofs and verifier params have a fixed-size byte encoding in [`wire`].
//!
//! Enable feature `print-trace` to print time taken by setup, proving and verification.

extern crate alloc;

pub mod arbitrary_range;
pub mod commitment;
pub mod common;
pub mod error;
pub mod perfect_range;
pub mod setup;
pub mod wire;

pub use arbitrary_range::{
    setup_arbitrary_range, setup_arbitrary_range_given_base, ArbitraryRangeProof,
    ArbitraryRangeProverParams, ArbitraryRangeVerifierParams,
};
pub use commitment::PedersenCommitmentKey;
pub use common::DEFAULT_BASE;
pub use error::RangeProofError;
pub use perfect_range::{PerfectRangeProof, PerfectRangeProofProtocol};
pub use setup::{
    setup_perfect_range, ProverParams, SharedParams, SignatureTable, VerifierParams,
    VerifierParamsWithPairing,
};
