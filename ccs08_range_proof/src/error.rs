use ark_serialize::SerializationError;
use ark_std::{rand, string::String};
use digit_sig::DigitSigError;

#[derive(Debug)]
pub enum RangeProofError {
    /// The entropy source failed. Nothing is retried, the caller may try again.
    Randomness(rand::Error),
    /// Signing the digit alphabet failed, the setup epoch is unusable and must be redone with a fresh key
    Setup(DigitSigError),
    /// The value can't be proven to be in the range, i.e. the statement is false
    OutOfRange(String),
    /// Lower bound is greater than the upper bound
    InvalidRange(u64, u64),
    /// Base and number of digits that can't be used. Base must be at least 2, there must be at least 1 digit
    /// and `base^digits` must fit in 128 bits
    UnsupportedParams(u16, u16),
    /// Proof has a different number of digits than expected. A malformed proof.
    DigitCountMismatch(usize, usize),
    /// Byte length doesn't match the fixed wire layout. A malformed proof or malformed params.
    InvalidEncodingLength(usize),
    /// A small integer in the wire encoding isn't a valid varint or doesn't fit its type
    InvalidVarint,
    Serialization(SerializationError),
}

impl RangeProofError {
    /// Whether the error is due to a proof that doesn't have the expected structure
    pub fn is_malformed_proof(&self) -> bool {
        matches!(
            self,
            Self::DigitCountMismatch(..) | Self::InvalidEncodingLength(_) | Self::Serialization(_)
        )
    }
}

impl From<rand::Error> for RangeProofError {
    fn from(e: rand::Error) -> Self {
        Self::Randomness(e)
    }
}

impl From<DigitSigError> for RangeProofError {
    fn from(e: DigitSigError) -> Self {
        match e {
            DigitSigError::Randomness(r) => Self::Randomness(r),
            e => Self::Setup(e),
        }
    }
}

impl From<SerializationError> for RangeProofError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}
