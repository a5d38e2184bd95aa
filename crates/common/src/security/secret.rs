//! Secret data types with guaranteed zeroization
//!
//! Scalars, nonces and shared secrets pass through these wrappers so that
//! every exit path wipes them.

use core::fmt;
use core::ops::{Deref, DerefMut};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Variable-size secret byte string that is wiped on drop
///
/// Equality is constant-time in the contents; only the lengths are
/// compared in variable time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Take ownership of `data`
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Copy a slice into a new secret
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// A zero-filled secret of `len` bytes
    pub fn zeroed(len: usize) -> Self {
        Self { data: vec![0u8; len] }
    }

    /// Number of bytes held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the secret holds no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the secret bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the secret bytes
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Append bytes, wiping the old allocation if it has to grow
    pub fn extend_from_slice(&mut self, slice: &[u8]) {
        if self.data.len() + slice.len() > self.data.capacity() {
            let mut grown = Vec::with_capacity((self.data.len() + slice.len()).max(16) * 2);
            grown.extend_from_slice(&self.data);
            self.data.zeroize();
            self.data = grown;
        }
        self.data.extend_from_slice(slice);
    }

    /// Shorten to `len` bytes, wiping the discarded tail
    pub fn truncate(&mut self, len: usize) {
        if len < self.data.len() {
            self.data[len..].zeroize();
            self.data.truncate(len);
        }
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for SecretVec {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl ConstantTimeEq for SecretVec {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.data.len() != other.data.len() {
            return Choice::from(0);
        }
        self.data.as_slice().ct_eq(other.data.as_slice())
    }
}

impl PartialEq for SecretVec {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretVec {}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}

/// Short-lived secret value that is zeroized when dropped
///
/// Handed out when a caller needs to look at an unmasked scalar for the
/// duration of one computation.
pub struct EphemeralSecret<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> EphemeralSecret<T> {
    /// Wrap a value
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }
}

impl<T: Zeroize + Copy> EphemeralSecret<T> {
    /// Copy the value out; the caller owns the wiping of the copy
    pub fn copied(&self) -> T {
        self.inner
    }
}

impl<T: Zeroize> AsRef<T> for EphemeralSecret<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

impl<T: Zeroize> Drop for EphemeralSecret<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize + Clone> Clone for EphemeralSecret<T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T: Zeroize> Deref for EphemeralSecret<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Zeroize> DerefMut for EphemeralSecret<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T: Zeroize> fmt::Debug for EphemeralSecret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EphemeralSecret([REDACTED])")
    }
}

/// Guard that zeroizes a borrowed value when it goes out of scope
///
/// Keeps intermediate state wiped on early returns through `?`.
pub struct ZeroizeGuard<'a, T: Zeroize> {
    value: &'a mut T,
}

impl<'a, T: Zeroize> ZeroizeGuard<'a, T> {
    /// Guard `value` until the end of the enclosing scope
    pub fn new(value: &'a mut T) -> Self {
        Self { value }
    }
}

impl<T: Zeroize> Drop for ZeroizeGuard<'_, T> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl<T: Zeroize> Deref for ZeroizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl<T: Zeroize> DerefMut for ZeroizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value
    }
}
