//! Real size of a multisig account modification.

use crate::header::MultisigModificationHeader;
use keystone_model::key::KEY_SIZE;

/// Computes the size in bytes of a transaction from its attachment counts.
///
/// The header's declared `size` field is not read: the result depends on the
/// two counts alone, so it stays correct when the declared value is missing,
/// stale or hostile. Counts are widened to `u64` before they are combined,
/// which keeps the result exact for every pair of `u8` counts.
pub fn calculate_real_size<T: MultisigModificationHeader>(header: &T) -> u64 {
    let key_count = u64::from(header.public_key_additions_count())
        + u64::from(header.public_key_deletions_count());
    T::HEADER_SIZE as u64 + key_count * KEY_SIZE as u64
}

/// Largest size [`calculate_real_size`] can return for header type `T`.
pub const fn max_real_size<T: MultisigModificationHeader>() -> u64 {
    T::HEADER_SIZE as u64 + 2 * u8::MAX as u64 * KEY_SIZE as u64
}

const _: () = {
    use crate::header::{
        EmbeddedMultisigAccountModificationTransaction, MultisigAccountModificationTransaction,
    };

    // the declared size field is a u32
    assert!(max_real_size::<MultisigAccountModificationTransaction>() < u32::MAX as u64);
    assert!(max_real_size::<EmbeddedMultisigAccountModificationTransaction>() < u32::MAX as u64);
};
