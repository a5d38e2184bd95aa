use core::fmt;

use vecc_common::SecretVec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ec::curve::Curve;
use crate::ec::vli::Vli;

/// Output of [`PrivateKey::ecdh`](super::PrivateKey::ecdh): the big-endian
/// x-coordinate of the shared point, `num_bytes` long
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(SecretVec);

impl SharedSecret {
    pub(crate) fn from_coordinate(curve: &Curve, x: &Vli) -> Self {
        let mut bytes = SecretVec::zeroed(curve.num_bytes());
        x.to_be_bytes(bytes.as_mut_slice());
        SharedSecret(bytes)
    }

    /// The secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a computed secret
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret([REDACTED; {}])", self.len())
    }
}
