//! # Keystone Multisig
//!
//! Wire layout and derivation rules for the **multisig account modification**
//! transaction: a fixed header followed by two attachments of 32-byte public
//! keys, the keys being added as cosignatories and then the keys being removed.
//!
//! ## Layout
//!
//! | Offset | Field | Size |
//! |--------|-------|------|
//! | 0 | generic entity header | `E` (128, or 48 when embedded) |
//! | `E` | `min_removal_delta` | 1 |
//! | `E + 1` | `min_approval_delta` | 1 |
//! | `E + 2` | `public_key_additions_count` | 1 |
//! | `E + 3` | `public_key_deletions_count` | 1 |
//! | `E + 4` | reserved (padding to 8 bytes) | 4 |
//! | `HEADER_SIZE` | public key additions | `32 × additions` |
//! | `HEADER_SIZE + 32 × additions` | public key deletions | `32 × deletions` |
//!
//! ## Key Components
//!
//! - [`header`] – the two fixed header structs and their field table
//! - [`attachments`] – bounds-checked, zero-copy views over the key attachments
//! - [`size::calculate_real_size`] – the authoritative size, computed from the counts
//! - [`cosignatories::extract_additional_required_cosignatories`] – keys that must co-sign
//! - [`transaction::MultisigModification`] – an owned, immutable transaction buffer
//! - [`builder::MultisigAccountModificationBuilder`] – assembles new transactions
//!
//! ## Quick start
//!
//! ```rust
//! use keystone_model::entity::NetworkIdentifier;
//! use keystone_model::key::Key;
//! use keystone_model::sanitize::Sanitize;
//! use keystone_multisig::{
//!     extract_additional_required_cosignatories, MultisigAccountModification,
//!     MultisigAccountModificationBuilder,
//! };
//!
//! let added = Key::new_unique();
//! let removed = Key::new_unique();
//! let transaction = MultisigAccountModificationBuilder::new(NetworkIdentifier::TESTNET, Key::new_unique())
//!     .add_public_key_addition(added)
//!     .add_public_key_deletion(removed)
//!     .build()
//!     .unwrap();
//!
//! // Round-trip through raw bytes, then validate the shape.
//! let received = MultisigAccountModification::from_bytes(transaction.as_bytes().to_vec()).unwrap();
//! received.sanitize().unwrap();
//!
//! let cosignatories = extract_additional_required_cosignatories(&received);
//! assert!(cosignatories.contains(&added));
//! assert!(!cosignatories.contains(&removed));
//! ```

pub mod attachments;
pub mod builder;
pub mod cosignatories;
pub mod header;
pub mod size;
pub mod transaction;

pub use attachments::AttachmentLayout;
pub use builder::MultisigAccountModificationBuilder;
pub use cosignatories::extract_additional_required_cosignatories;
pub use header::{
    EmbeddedMultisigAccountModificationTransaction, MultisigAccountModificationTransaction,
    MultisigModificationHeader,
};
pub use size::calculate_real_size;
pub use transaction::{
    EmbeddedMultisigAccountModification, MultisigAccountModification, MultisigModification,
};
