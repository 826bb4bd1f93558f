use thiserror::Error as ErrorT;

/// Error type for every fallible operation in this crate.
///
/// Setup errors (`Precondition`, `UnsupportedModulus`, `Setup`) are raised
/// before a scheme instance is constructed; the operational errors (`Bound`,
/// `Dimension`, `DlogNotFound`, `Sampling`) are raised by Encrypt, DeriveKey
/// and Decrypt on a valid instance. A `DlogNotFound` from decryption means
/// the inner product fell outside the recoverable interval, which is a
/// property of the inputs rather than a fault of the scheme.
#[derive(Debug, ErrorT)]
pub enum Error {
    #[error("2 * l * bound^2 should be smaller than group order")]
    Precondition,
    #[error("modulus length should be one of values 1024, 1536, 2048, 2560, 3072, or 4096")]
    UnsupportedModulus(usize),
    #[error("random source failure: {0}")]
    Sampling(#[from] rand::Error),
    #[error("all vector coordinates should be between -bound and bound")]
    Bound,
    #[error("mismatched vector lengths: {expected} vs {got}")]
    Dimension { expected: usize, got: usize },
    #[error("failed to find the discrete logarithm within bound")]
    DlogNotFound,
    #[error("safe prime group generation failed: {0}")]
    Setup(&'static str),
}
