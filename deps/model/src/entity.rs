//! Generic entity headers shared by every transaction kind.
//!
//! An entity starts with a self-reported `size`, followed by signing material
//! and the `version`/`network`/`entity_type` tags. Transaction kinds append
//! their own fields and attachments after one of the two headers defined here.
//! The declared `size` is metadata written by whoever produced the bytes; it is
//! never used to locate fields or attachments.

use crate::key::{Key, Signature};
use bytemuck::{Pod, Zeroable};
use core::fmt;

/// Tag identifying the kind of an entity.
///
/// Bits 14..16 hold the basic entity type, the low byte holds the facility
/// code of the plugin that owns the entity kind.
#[repr(transparent)]
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct EntityType(pub u16);

/// Broad category an [`EntityType`] belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BasicEntityType {
    Other,
    Transaction,
    Block,
}

impl EntityType {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn basic_type(self) -> BasicEntityType {
        match (self.0 >> 14) & 0x3 {
            1 => BasicEntityType::Transaction,
            2 => BasicEntityType::Block,
            _ => BasicEntityType::Other,
        }
    }

    pub fn facility_code(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl fmt::Debug for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EntityType(0x{:04X})", self.0)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Registry of entity types known to this workspace.
pub mod entity_types {
    use super::EntityType;

    /// Multisig account modification transaction (facility `0x55`).
    pub const MULTISIG_ACCOUNT_MODIFICATION: EntityType = EntityType::new(0x4155);
}

/// Network an entity was created for.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct NetworkIdentifier(pub u8);

impl NetworkIdentifier {
    pub const ZERO: Self = Self(0);
    pub const MAINNET: Self = Self(0x68);
    pub const TESTNET: Self = Self(0x98);
    pub const PRIVATE: Self = Self(0x78);
    pub const PRIVATE_TEST: Self = Self(0xA8);
}

/// Behaviour common to the fixed-size headers every entity begins with.
///
/// Implementors are plain-old-data with no implicit padding, so their bytes can
/// be copied in and out of an entity buffer as-is.
pub trait EntityHeader: Pod + fmt::Debug {
    /// Short name used in diagnostics.
    const KIND: &'static str;

    /// Creates a zeroed header carrying the given tags.
    fn new(entity_type: EntityType, version: u8, network: NetworkIdentifier, signer: Key) -> Self;

    /// Declared (self-reported) size of the whole entity.
    fn size(&self) -> u32;

    fn set_size(&mut self, size: u32);

    fn entity_type(&self) -> EntityType;

    fn version(&self) -> u8;

    fn network(&self) -> NetworkIdentifier;

    fn signer_public_key(&self) -> &Key;
}

/// Header of a top-level transaction.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Pod, Zeroable)]
pub struct TransactionHeader {
    pub size: u32,
    pub verifiable_entity_header_reserved_1: u32,
    pub signature: Signature,
    pub signer_public_key: Key,
    pub entity_body_reserved_1: u32,
    pub version: u8,
    pub network: NetworkIdentifier,
    pub entity_type: EntityType,
    /// Maximum fee the signer is willing to pay.
    pub max_fee: u64,
    /// Network timestamp after which the transaction expires.
    pub deadline: u64,
}

/// Header of a transaction embedded inside an aggregate.
///
/// Embedded transactions are covered by the aggregate's signature and carry no
/// fee or deadline of their own.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Pod, Zeroable)]
pub struct EmbeddedTransactionHeader {
    pub size: u32,
    pub embedded_transaction_header_reserved_1: u32,
    pub signer_public_key: Key,
    pub entity_body_reserved_1: u32,
    pub version: u8,
    pub network: NetworkIdentifier,
    pub entity_type: EntityType,
}

pub const TRANSACTION_HEADER_SIZE: usize = 128;
pub const EMBEDDED_TRANSACTION_HEADER_SIZE: usize = 48;

const _: () = {
    use core::mem::size_of;

    assert!(size_of::<TransactionHeader>() == TRANSACTION_HEADER_SIZE);
    assert!(size_of::<EmbeddedTransactionHeader>() == EMBEDDED_TRANSACTION_HEADER_SIZE);
};

macro_rules! impl_entity_header {
    ($Header:ty, $kind:literal) => {
        impl EntityHeader for $Header {
            const KIND: &'static str = $kind;

            fn new(
                entity_type: EntityType,
                version: u8,
                network: NetworkIdentifier,
                signer: Key,
            ) -> Self {
                Self {
                    signer_public_key: signer,
                    version,
                    network,
                    entity_type,
                    ..Self::zeroed()
                }
            }

            fn size(&self) -> u32 {
                self.size
            }

            fn set_size(&mut self, size: u32) {
                self.size = size;
            }

            fn entity_type(&self) -> EntityType {
                self.entity_type
            }

            fn version(&self) -> u8 {
                self.version
            }

            fn network(&self) -> NetworkIdentifier {
                self.network
            }

            fn signer_public_key(&self) -> &Key {
                &self.signer_public_key
            }
        }
    };
}

impl_entity_header!(TransactionHeader, "transaction");
impl_entity_header!(EmbeddedTransactionHeader, "embedded transaction");
