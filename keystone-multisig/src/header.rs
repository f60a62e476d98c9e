//! Fixed header of the multisig account modification transaction.
//!
//! The header is a generic entity header followed by four one-byte fields and
//! explicit tail padding up to [`ENTITY_ALIGNMENT`]. Two variants exist, one
//! per generic header kind; both are declared by `declare_multisig_modification!`
//! so their layouts cannot diverge.

use bytemuck::Pod;
use core::fmt::Debug;
use keystone_model::entity::{
    entity_types, EmbeddedTransactionHeader, EntityHeader, EntityType, TransactionHeader,
};
use keystone_model::layout::{FieldSpec, ENTITY_ALIGNMENT};

/// Scalar fields appended to the generic header, in wire order.
pub const MULTISIG_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("min_removal_delta", 1),
    FieldSpec::new("min_approval_delta", 1),
    FieldSpec::new("public_key_additions_count", 1),
    FieldSpec::new("public_key_deletions_count", 1),
];

/// Entity type tag of multisig account modifications.
pub const ENTITY_TYPE: EntityType = entity_types::MULTISIG_ACCOUNT_MODIFICATION;

/// Current (and only) version of the transaction layout.
pub const CURRENT_VERSION: u8 = 1;

/// Access to the fixed part of a multisig account modification, independent of
/// which generic header it is built on.
pub trait MultisigModificationHeader: Pod + Debug {
    type Base: EntityHeader;

    /// Size of the fixed header; the public key additions start here.
    const HEADER_SIZE: usize;

    fn from_parts(
        base: Self::Base,
        min_removal_delta: i8,
        min_approval_delta: i8,
        public_key_additions_count: u8,
        public_key_deletions_count: u8,
    ) -> Self;

    fn base(&self) -> &Self::Base;

    fn base_mut(&mut self) -> &mut Self::Base;

    fn min_removal_delta(&self) -> i8;

    fn min_approval_delta(&self) -> i8;

    fn public_key_additions_count(&self) -> u8;

    fn public_key_deletions_count(&self) -> u8;
}

/// Declares a multisig account modification header on top of `$Base`.
///
/// The generated struct is `#[repr(C)]` and `Pod`; a compile-time assertion
/// ties its `size_of` to the size derived from [`MULTISIG_FIELDS`].
macro_rules! declare_multisig_modification {
    ($(#[$meta:meta])* $Name:ident, $Base:ty) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
        pub struct $Name {
            pub base: $Base,
            /// Relative change to the number of cosignatures required to remove a cosignatory.
            pub min_removal_delta: i8,
            /// Relative change to the number of cosignatures required to approve a transaction.
            pub min_approval_delta: i8,
            pub public_key_additions_count: u8,
            pub public_key_deletions_count: u8,
            pub multisig_account_modification_transaction_body_reserved_1: u32,
        }

        const _: () = {
            use core::mem::size_of;
            use keystone_model::layout::padded_size;

            const _SIZE: usize = size_of::<$Name>();
            const _EXPECTED_SIZE: usize =
                padded_size(size_of::<$Base>(), MULTISIG_FIELDS, ENTITY_ALIGNMENT);
            assert!(_SIZE == _EXPECTED_SIZE, "header size disagrees with field table");
            assert!(_SIZE % ENTITY_ALIGNMENT == 0, "header is not 8-byte padded");
        };

        impl MultisigModificationHeader for $Name {
            type Base = $Base;

            const HEADER_SIZE: usize = keystone_model::layout::padded_size(
                core::mem::size_of::<$Base>(),
                MULTISIG_FIELDS,
                ENTITY_ALIGNMENT,
            );

            fn from_parts(
                base: $Base,
                min_removal_delta: i8,
                min_approval_delta: i8,
                public_key_additions_count: u8,
                public_key_deletions_count: u8,
            ) -> Self {
                Self {
                    base,
                    min_removal_delta,
                    min_approval_delta,
                    public_key_additions_count,
                    public_key_deletions_count,
                    multisig_account_modification_transaction_body_reserved_1: 0,
                }
            }

            fn base(&self) -> &$Base {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $Base {
                &mut self.base
            }

            fn min_removal_delta(&self) -> i8 {
                self.min_removal_delta
            }

            fn min_approval_delta(&self) -> i8 {
                self.min_approval_delta
            }

            fn public_key_additions_count(&self) -> u8 {
                self.public_key_additions_count
            }

            fn public_key_deletions_count(&self) -> u8 {
                self.public_key_deletions_count
            }
        }

        impl $Name {
            pub const ENTITY_TYPE: EntityType = ENTITY_TYPE;
            pub const CURRENT_VERSION: u8 = CURRENT_VERSION;
        }
    };
}

declare_multisig_modification!(
    /// Fixed header of a top-level multisig account modification transaction.
    MultisigAccountModificationTransaction,
    TransactionHeader
);

declare_multisig_modification!(
    /// Fixed header of a multisig account modification embedded in an aggregate.
    EmbeddedMultisigAccountModificationTransaction,
    EmbeddedTransactionHeader
);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};
    use keystone_model::entity::{
        EMBEDDED_TRANSACTION_HEADER_SIZE, TRANSACTION_HEADER_SIZE,
    };
    use keystone_model::layout::{field_offset, find_field_offset};
    use memoffset::offset_of;

    // Expands to one assertion per table entry, checking the declared struct
    // field against the offset and size the table derives.
    macro_rules! assert_fields_match_table {
        ($Name:path, $base_size:expr, [$($field:ident: $ty:ty),* $(,)?]) => {{
            let mut index = 0;
            $(
                assert_eq!(MULTISIG_FIELDS[index].name, stringify!($field));
                assert_eq!(MULTISIG_FIELDS[index].size, size_of::<$ty>());
                assert_eq!(
                    offset_of!($Name, $field),
                    field_offset($base_size, MULTISIG_FIELDS, index)
                );
                assert_eq!(offset_of!($Name, $field) % align_of::<$ty>(), 0);
                index += 1;
            )*
            assert_eq!(index, MULTISIG_FIELDS.len());
        }};
    }

    fn assert_header_has_expected_size<T: MultisigModificationHeader>(base_size: usize) {
        let mut expected_size = base_size + size_of::<u32>();
        for field in MULTISIG_FIELDS {
            expected_size += field.size;
        }

        assert_eq!(size_of::<T>(), expected_size);
        assert_eq!(size_of::<T>(), base_size + 4 + 4);
        assert_eq!(T::HEADER_SIZE, size_of::<T>());
        assert_eq!(size_of::<T>() % 8, 0);
    }

    #[test]
    fn test_transaction_header_has_expected_size() {
        assert_header_has_expected_size::<MultisigAccountModificationTransaction>(
            TRANSACTION_HEADER_SIZE,
        );
        assert_eq!(MultisigAccountModificationTransaction::HEADER_SIZE, 136);
    }

    #[test]
    fn test_embedded_header_has_expected_size() {
        assert_header_has_expected_size::<EmbeddedMultisigAccountModificationTransaction>(
            EMBEDDED_TRANSACTION_HEADER_SIZE,
        );
        assert_eq!(EmbeddedMultisigAccountModificationTransaction::HEADER_SIZE, 56);
    }

    #[test]
    fn test_transaction_header_fields_match_table() {
        assert_fields_match_table!(
            MultisigAccountModificationTransaction,
            TRANSACTION_HEADER_SIZE,
            [
                min_removal_delta: i8,
                min_approval_delta: i8,
                public_key_additions_count: u8,
                public_key_deletions_count: u8,
            ]
        );
    }

    #[test]
    fn test_embedded_header_fields_match_table() {
        assert_fields_match_table!(
            EmbeddedMultisigAccountModificationTransaction,
            EMBEDDED_TRANSACTION_HEADER_SIZE,
            [
                min_removal_delta: i8,
                min_approval_delta: i8,
                public_key_additions_count: u8,
                public_key_deletions_count: u8,
            ]
        );
    }

    #[test]
    fn test_wire_offsets_of_counts() {
        assert_eq!(
            find_field_offset(TRANSACTION_HEADER_SIZE, MULTISIG_FIELDS, "min_removal_delta"),
            Some(128)
        );
        assert_eq!(
            find_field_offset(
                TRANSACTION_HEADER_SIZE,
                MULTISIG_FIELDS,
                "public_key_deletions_count"
            ),
            Some(131)
        );
    }

    #[test]
    fn test_header_has_expected_properties() {
        assert_eq!(
            MultisigAccountModificationTransaction::ENTITY_TYPE,
            entity_types::MULTISIG_ACCOUNT_MODIFICATION
        );
        assert_eq!(MultisigAccountModificationTransaction::CURRENT_VERSION, 1);
        assert_eq!(
            EmbeddedMultisigAccountModificationTransaction::ENTITY_TYPE,
            entity_types::MULTISIG_ACCOUNT_MODIFICATION
        );
        assert_eq!(EmbeddedMultisigAccountModificationTransaction::CURRENT_VERSION, 1);
    }

    #[test]
    fn test_header_bytes_follow_field_table() {
        let header = MultisigAccountModificationTransaction::from_parts(
            TransactionHeader::default(),
            -3,
            2,
            7,
            4,
        );
        let bytes = bytemuck::bytes_of(&header);

        assert_eq!(bytes.len(), 136);
        assert_eq!(bytes[128] as i8, -3);
        assert_eq!(bytes[129] as i8, 2);
        assert_eq!(bytes[130], 7);
        assert_eq!(bytes[131], 4);
        assert_eq!(&bytes[132..136], &[0u8; 4]);
    }
}
