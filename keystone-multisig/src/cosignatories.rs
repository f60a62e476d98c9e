//! Keys that must co-sign a multisig account modification.

use crate::header::MultisigModificationHeader;
use crate::transaction::MultisigModification;
use keystone_model::key::KeySet;

/// Returns the keys whose signatures are required in addition to the signer's.
///
/// Every key being added as a cosignatory has to approve its own addition.
/// Keys being removed do not, even when the same key also appears among the
/// additions; there, membership comes from the addition alone. Duplicate
/// additions collapse into a single entry.
pub fn extract_additional_required_cosignatories<T: MultisigModificationHeader>(
    transaction: &MultisigModification<T>,
) -> KeySet {
    transaction.public_key_additions().iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MultisigAccountModificationBuilder;
    use keystone_model::entity::NetworkIdentifier;
    use keystone_model::key::Key;

    fn builder() -> MultisigAccountModificationBuilder {
        MultisigAccountModificationBuilder::new(NetworkIdentifier::TESTNET, Key::new_unique())
    }

    #[test]
    fn test_duplicate_additions_collapse() {
        let key = Key::new_unique();
        let transaction = builder()
            .add_public_key_addition(key)
            .add_public_key_addition(key)
            .build()
            .unwrap();

        let cosignatories = extract_additional_required_cosignatories(&transaction);

        assert_eq!(cosignatories, KeySet::from([key]));
    }

    #[test]
    fn test_key_in_both_attachments_is_required_once() {
        let shared = Key::new_unique();
        let removed = Key::new_unique();
        let transaction = builder()
            .add_public_key_addition(shared)
            .add_public_key_deletion(shared)
            .add_public_key_deletion(removed)
            .build_embedded()
            .unwrap();

        let cosignatories = extract_additional_required_cosignatories(&transaction);

        assert_eq!(cosignatories, KeySet::from([shared]));
        assert!(!cosignatories.contains(&removed));
    }

    #[test]
    fn test_signer_is_not_added_implicitly() {
        let transaction = builder().build().unwrap();

        let cosignatories = extract_additional_required_cosignatories(&transaction);

        assert!(!cosignatories.contains(transaction.signer_public_key()));
        assert!(cosignatories.is_empty());
    }
}
