//! Builder for multisig account modification transactions.

use crate::attachments::{attachments_mut, write_header};
use crate::header::{MultisigModificationHeader, CURRENT_VERSION, ENTITY_TYPE};
use crate::size::calculate_real_size;
use crate::transaction::{
    EmbeddedMultisigAccountModification, MultisigAccountModification, MultisigModification,
};
use keystone_model::entity::{
    EmbeddedTransactionHeader, EntityHeader, NetworkIdentifier, TransactionHeader,
};
use keystone_model::error::{LayoutError, Result};
use keystone_model::key::Key;
use tracing::trace;

/// Collects the fields of a multisig account modification and lays them out
/// into a freshly allocated buffer.
///
/// Building follows a fixed sequence: count the keys, compute the real size,
/// allocate a zeroed buffer of exactly that size, write the header, then copy
/// the keys into the two attachments. The result is not visible to anyone
/// until all of that has happened.
///
/// # Example
///
/// ```rust
/// use keystone_model::entity::NetworkIdentifier;
/// use keystone_model::key::Key;
/// use keystone_multisig::builder::MultisigAccountModificationBuilder;
///
/// let transaction = MultisigAccountModificationBuilder::new(NetworkIdentifier::TESTNET, Key::new_unique())
///     .min_approval_delta(1)
///     .add_public_key_addition(Key::new_unique())
///     .build()
///     .unwrap();
///
/// assert_eq!(transaction.public_key_additions().len(), 1);
/// assert_eq!(transaction.real_size(), 136 + 32);
/// ```
#[derive(Clone, Debug)]
pub struct MultisigAccountModificationBuilder {
    network: NetworkIdentifier,
    signer: Key,
    min_removal_delta: i8,
    min_approval_delta: i8,
    public_key_additions: Vec<Key>,
    public_key_deletions: Vec<Key>,
    max_fee: u64,
    deadline: u64,
}

impl MultisigAccountModificationBuilder {
    pub fn new(network: NetworkIdentifier, signer: Key) -> Self {
        Self {
            network,
            signer,
            min_removal_delta: 0,
            min_approval_delta: 0,
            public_key_additions: Vec::new(),
            public_key_deletions: Vec::new(),
            max_fee: 0,
            deadline: 0,
        }
    }

    pub fn min_removal_delta(mut self, delta: i8) -> Self {
        self.min_removal_delta = delta;
        self
    }

    pub fn min_approval_delta(mut self, delta: i8) -> Self {
        self.min_approval_delta = delta;
        self
    }

    pub fn add_public_key_addition(mut self, key: Key) -> Self {
        self.public_key_additions.push(key);
        self
    }

    pub fn add_public_key_deletion(mut self, key: Key) -> Self {
        self.public_key_deletions.push(key);
        self
    }

    pub fn public_key_additions(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.public_key_additions.extend(keys);
        self
    }

    pub fn public_key_deletions(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.public_key_deletions.extend(keys);
        self
    }

    /// Fee ceiling. Ignored by [`Self::build_embedded`].
    pub fn max_fee(mut self, max_fee: u64) -> Self {
        self.max_fee = max_fee;
        self
    }

    /// Expiry timestamp. Ignored by [`Self::build_embedded`].
    pub fn deadline(mut self, deadline: u64) -> Self {
        self.deadline = deadline;
        self
    }

    /// Builds a top-level transaction.
    pub fn build(&self) -> Result<MultisigAccountModification> {
        let base = TransactionHeader {
            max_fee: self.max_fee,
            deadline: self.deadline,
            ..TransactionHeader::new(ENTITY_TYPE, CURRENT_VERSION, self.network, self.signer)
        };
        self.build_with(base)
    }

    /// Builds a transaction for embedding in an aggregate.
    pub fn build_embedded(&self) -> Result<EmbeddedMultisigAccountModification> {
        let base =
            EmbeddedTransactionHeader::new(ENTITY_TYPE, CURRENT_VERSION, self.network, self.signer);
        self.build_with(base)
    }

    fn build_with<T: MultisigModificationHeader>(
        &self,
        base: T::Base,
    ) -> Result<MultisigModification<T>> {
        let mut header = T::from_parts(
            base,
            self.min_removal_delta,
            self.min_approval_delta,
            key_count(&self.public_key_additions)?,
            key_count(&self.public_key_deletions)?,
        );

        let real_size = calculate_real_size(&header);
        // bounded by `max_real_size`, which is asserted to fit in u32
        header.base_mut().set_size(real_size as u32);

        let mut buffer = vec![0u8; real_size as usize];
        write_header(&mut buffer, &header)?;
        let (additions, deletions) = attachments_mut::<T>(&mut buffer)?;
        additions.copy_from_slice(&self.public_key_additions);
        deletions.copy_from_slice(&self.public_key_deletions);

        trace!(
            kind = <T::Base as EntityHeader>::KIND,
            real_size,
            additions = self.public_key_additions.len(),
            deletions = self.public_key_deletions.len(),
            "built multisig account modification"
        );
        MultisigModification::from_bytes(buffer)
    }
}

fn key_count(keys: &[Key]) -> Result<u8> {
    u8::try_from(keys.len()).map_err(|_| LayoutError::TooManyKeys { count: keys.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystone_model::sanitize::Sanitize;

    fn keys(count: usize) -> Vec<Key> {
        (0..count).map(|_| Key::new_unique()).collect()
    }

    #[test]
    fn test_build_writes_all_header_fields() {
        let signer = Key::new_unique();
        let transaction = MultisigAccountModificationBuilder::new(NetworkIdentifier::MAINNET, signer)
            .min_removal_delta(-1)
            .min_approval_delta(2)
            .public_key_additions(keys(3))
            .public_key_deletions(keys(1))
            .max_fee(500)
            .deadline(1_000_000)
            .build()
            .unwrap();

        let header = transaction.header();
        assert_eq!(header.base.size, 136 + 4 * 32);
        assert_eq!(header.base.signer_public_key, signer);
        assert_eq!(header.base.network, NetworkIdentifier::MAINNET);
        assert_eq!(header.base.version, 1);
        assert_eq!(header.base.entity_type, ENTITY_TYPE);
        assert_eq!(header.base.max_fee, 500);
        assert_eq!(header.base.deadline, 1_000_000);
        assert_eq!(header.min_removal_delta, -1);
        assert_eq!(header.min_approval_delta, 2);
        assert_eq!(header.public_key_additions_count, 3);
        assert_eq!(header.public_key_deletions_count, 1);
        assert!(transaction.sanitize().is_ok());
    }

    #[test]
    fn test_build_embedded_uses_embedded_header() {
        let transaction =
            MultisigAccountModificationBuilder::new(NetworkIdentifier::TESTNET, Key::new_unique())
                .public_key_deletions(keys(2))
                .max_fee(500)
                .build_embedded()
                .unwrap();

        assert_eq!(transaction.as_bytes().len(), 56 + 2 * 32);
        assert_eq!(transaction.declared_size(), 56 + 2 * 32);
        assert!(transaction.sanitize().is_ok());
    }

    #[test]
    fn test_build_accepts_max_counts() {
        let transaction =
            MultisigAccountModificationBuilder::new(NetworkIdentifier::TESTNET, Key::new_unique())
                .public_key_additions(keys(255))
                .public_key_deletions(keys(255))
                .build()
                .unwrap();

        assert_eq!(transaction.real_size(), 136 + 510 * 32);
        assert_eq!(transaction.public_key_deletions().len(), 255);
    }

    #[test]
    fn test_build_rejects_more_than_255_keys() {
        let builder =
            MultisigAccountModificationBuilder::new(NetworkIdentifier::TESTNET, Key::new_unique())
                .public_key_deletions(keys(256));

        assert_eq!(
            builder.build().unwrap_err(),
            LayoutError::TooManyKeys { count: 256 }
        );
        assert_eq!(
            builder.build_embedded().unwrap_err(),
            LayoutError::TooManyKeys { count: 256 }
        );
    }
}
