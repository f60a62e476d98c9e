//! Owned multisig account modification transactions.

use crate::attachments::{keys_in, read_header, AttachmentLayout};
use crate::header::{
    EmbeddedMultisigAccountModificationTransaction, MultisigAccountModificationTransaction,
    MultisigModificationHeader, CURRENT_VERSION, ENTITY_TYPE,
};
use crate::size::calculate_real_size;
use keystone_model::entity::EntityHeader;
use keystone_model::error::{LayoutError, Result};
use keystone_model::key::Key;
use keystone_model::sanitize::{check_declared_size, Sanitize};
use tracing::debug;

/// A complete multisig account modification: fixed header plus both attachments,
/// held in a single buffer of exactly [`calculate_real_size`] bytes.
///
/// Instances are immutable. Any change to the counts or keys means building a
/// new transaction. The type is `Send + Sync`, so a finished transaction can be
/// read from any number of threads at once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultisigModification<T: MultisigModificationHeader> {
    header: T,
    layout: AttachmentLayout,
    buffer: Box<[u8]>,
}

/// Top-level multisig account modification.
pub type MultisigAccountModification = MultisigModification<MultisigAccountModificationTransaction>;

/// Multisig account modification embedded in an aggregate.
pub type EmbeddedMultisigAccountModification =
    MultisigModification<EmbeddedMultisigAccountModificationTransaction>;

impl<T: MultisigModificationHeader> MultisigModification<T> {
    /// Takes ownership of an encoded transaction.
    ///
    /// The buffer must hold a full header and be exactly as long as the size
    /// computed from the header's counts. Tags and the declared size are not
    /// checked here; see [`Sanitize::sanitize`].
    pub fn from_bytes(bytes: impl Into<Box<[u8]>>) -> Result<Self> {
        let buffer = bytes.into();
        let header = read_header::<T>(&buffer).map_err(|err| {
            debug!(
                kind = <T::Base as EntityHeader>::KIND,
                len = buffer.len(),
                "rejecting truncated multisig header"
            );
            err
        })?;

        let real_size = calculate_real_size(&header);
        if buffer.len() as u64 != real_size {
            debug!(
                kind = <T::Base as EntityHeader>::KIND,
                len = buffer.len(),
                real_size,
                "rejecting multisig buffer with wrong length"
            );
            return Err(LayoutError::BufferSizeMismatch {
                expected: real_size,
                actual: buffer.len() as u64,
            });
        }

        Ok(Self {
            layout: AttachmentLayout::of(&header),
            header,
            buffer,
        })
    }

    /// The fixed header, decoded once at construction.
    pub fn header(&self) -> &T {
        &self.header
    }

    pub fn signer_public_key(&self) -> &Key {
        self.header.base().signer_public_key()
    }

    /// Size the transaction reports for itself. Not trusted for anything.
    pub fn declared_size(&self) -> u32 {
        self.header.base().size()
    }

    /// Size computed from the attachment counts; always equals `as_bytes().len()`.
    pub fn real_size(&self) -> u64 {
        calculate_real_size(&self.header)
    }

    pub fn public_key_additions(&self) -> &[Key] {
        self.keys(self.layout.additions.clone())
    }

    pub fn public_key_deletions(&self) -> &[Key] {
        self.keys(self.layout.deletions.clone())
    }

    pub fn layout(&self) -> &AttachmentLayout {
        &self.layout
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Box<[u8]> {
        self.buffer
    }

    fn keys(&self, range: core::ops::Range<usize>) -> &[Key] {
        // `from_bytes` checked the buffer length against the layout.
        keys_in(&self.buffer, range).unwrap_or(&[])
    }
}

impl<T: MultisigModificationHeader> Sanitize for MultisigModification<T> {
    fn sanitize(&self) -> Result<()> {
        let base = self.header.base();
        if base.entity_type() != ENTITY_TYPE {
            return Err(LayoutError::UnexpectedEntityType {
                expected: ENTITY_TYPE,
                actual: base.entity_type(),
            });
        }
        if base.version() != CURRENT_VERSION {
            return Err(LayoutError::UnsupportedVersion(base.version()));
        }
        check_declared_size(base.size(), self.real_size())
    }
}

impl<T: MultisigModificationHeader> AsRef<[u8]> for MultisigModification<T> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T: MultisigModificationHeader> TryFrom<Vec<u8>> for MultisigModification<T> {
    type Error = LayoutError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}
