/*!
# Keystone Model
The generic entity model shared by keystone transaction kinds. This crate
provides the pieces every variable-sized transaction is built from:
## Features
- 32-byte `Key` identifiers and 64-byte signatures
- Fixed `TransactionHeader` / `EmbeddedTransactionHeader` prefixes
- Entity type and network tags
- Declarative field tables for header layouts
- Declared-size checks and the `Sanitize` trait
## Usage
```rust
use keystone_model::entity::{EntityHeader, NetworkIdentifier, TransactionHeader};
use keystone_model::entity::entity_types::MULTISIG_ACCOUNT_MODIFICATION;
use keystone_model::key::Key;

let header = TransactionHeader::new(
    MULTISIG_ACCOUNT_MODIFICATION,
    1,
    NetworkIdentifier::TESTNET,
    Key::new_unique(),
);
assert_eq!(header.version(), 1);
```
*/

#[cfg(not(target_endian = "little"))]
compile_error!("entity headers are cast directly from little-endian wire bytes");

mod atomic_u64;
/// Generic entity headers and tags
pub mod entity;
/// Error types for entity layout violations
pub mod error;
/// Public key and signature definitions
pub mod key;
/// Field tables for fixed header layouts
pub mod layout;
/// Sanitization trait and declared-size checks
pub mod sanitize;

pub use error::{LayoutError, Result};
pub use key::{Key, KeySet, KEY_SIZE};
