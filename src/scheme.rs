use num_bigint_dig::BigInt;
use rand::{CryptoRng, RngCore};

use crate::error::Error;

/// Capability set shared by the inner-product schemes.
///
/// Both schemes expose the same five operations but differ in the shape of
/// their keys and ciphertexts, so the shapes are associated types rather
/// than a single union: callers always see the concrete scheme they hold.
/// Plaintext vectors are signed and bounded; every entry point revalidates
/// the bound on the vector it receives.
pub trait FunctionalEncryption {
    type MasterSecretKey;
    type MasterPublicKey;
    type DerivedKey;
    type Ciphertext;

    /// Generates the authority's master key pair.
    fn generate_master_keys<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::MasterSecretKey, Self::MasterPublicKey), Error>;

    /// Derives the functional key for the vector `y`. Deterministic in
    /// `(msk, y)`.
    fn derive_key(
        &self,
        msk: &Self::MasterSecretKey,
        y: &[BigInt],
    ) -> Result<Self::DerivedKey, Error>;

    /// Encrypts the vector `x` under the master public key.
    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        x: &[BigInt],
        mpk: &Self::MasterPublicKey,
        rng: &mut R,
    ) -> Result<Self::Ciphertext, Error>;

    /// Recovers the inner product `<x, y>` from an encryption of `x` and
    /// the key derived for `y`.
    fn decrypt(
        &self,
        cipher: &Self::Ciphertext,
        key: &Self::DerivedKey,
        y: &[BigInt],
    ) -> Result<BigInt, Error>;
}
