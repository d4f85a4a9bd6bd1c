use ark_std::rand;

#[derive(Debug)]
pub enum DigitSigError {
    /// The entropy source failed while sampling a secret
    Randomness(rand::Error),
    /// `secret key + message` is 0 so no signature exists for this message under this key
    NonInvertibleMessage,
}

impl From<rand::Error> for DigitSigError {
    fn from(e: rand::Error) -> Self {
        Self::Randomness(e)
    }
}
