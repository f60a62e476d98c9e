//! Public key and signature definitions for keystone entities.
//!
//! This module defines the `Key` type, a 32-byte opaque account identifier used
//! throughout the entity model for signers, cosignatories and any other key
//! carried inside a transaction attachment.

use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of bytes in a key
pub const KEY_SIZE: usize = 32;

/// Number of bytes in a signature
pub const SIGNATURE_SIZE: usize = 64;

/// A public key identifying an account.
///
/// `Key` has the alignment of a byte array, so a run of keys inside any byte
/// buffer can be viewed as `&[Key]` without copying, regardless of where the
/// run starts.
#[repr(C)]
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Default, Copy, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Key(pub [u8; KEY_SIZE]);

/// Unordered set of keys with membership semantics.
pub type KeySet = HashSet<Key>;

impl Key {
    pub const fn new_from_array(data: [u8; KEY_SIZE]) -> Self {
        Self(data)
    }

    /// Returns a copy of the raw key bytes.
    pub fn serialize(&self) -> [u8; KEY_SIZE] {
        self.0
    }

    /// Creates a new Key from a slice of bytes.
    ///
    /// If the slice is shorter than 32 bytes, the remaining bytes are zero.
    /// Bytes beyond the 32nd are ignored.
    pub fn from_slice(data: &[u8]) -> Self {
        let len = data.len().min(KEY_SIZE);
        let mut tmp = [0u8; KEY_SIZE];
        tmp[..len].copy_from_slice(&data[..len]);
        Self(tmp)
    }

    /// Creates a unique Key for tests and benchmarks.
    ///
    /// Keys are generated from a process-wide counter, so every call returns a
    /// key that compares greater than all keys returned before it.
    pub fn new_unique() -> Self {
        use crate::atomic_u64::AtomicU64;
        static I: AtomicU64 = AtomicU64::new(1);

        let mut b = [0u8; KEY_SIZE];
        let i = I.fetch_add(1);
        // big endian keeps byte-wise ordering aligned with creation order
        b[0..8].copy_from_slice(&i.to_be_bytes());
        Self::from(b)
    }
}

/// A detached 64-byte signature. Opaque to the entity model.
#[repr(C)]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Signature(pub [u8; SIGNATURE_SIZE]);

impl Default for Signature {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

use core::fmt;

impl fmt::LowerHex for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for ch in &self.0[..] {
            write!(f, "{:02x}", *ch)?;
        }
        Ok(())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl AsMut<[u8]> for Key {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0[..]
    }
}

impl From<[u8; KEY_SIZE]> for Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Key(value)
    }
}

impl std::str::FromStr for Key {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| "Invalid hex string for Key")?;
        if bytes.len() != KEY_SIZE {
            return Err("Invalid length for Key (expected 32 bytes)");
        }
        Ok(Key::from_slice(&bytes))
    }
}
