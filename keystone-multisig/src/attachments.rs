//! Views over the two public key attachments that trail the fixed header.
//!
//! Layout, relative to the start of the transaction:
//! - `[0, HEADER_SIZE)`: fixed header
//! - `[HEADER_SIZE, HEADER_SIZE + 32 * additions)`: public key additions
//! - followed directly by `32 * deletions` bytes of public key deletions
//!
//! Views are zero-copy slices of [`Key`]. Every function here checks the
//! requested range against the buffer it was given and fails with
//! [`LayoutError::BufferTooSmall`] instead of reading past it. Whether the
//! buffer has the right total length is a separate question, answered with
//! [`crate::size::calculate_real_size`].

use crate::header::MultisigModificationHeader;
use core::ops::Range;
use keystone_model::error::{LayoutError, Result};
use keystone_model::key::{Key, KEY_SIZE};

/// Byte ranges of both attachments, derived from a header's counts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttachmentLayout {
    pub additions: Range<usize>,
    pub deletions: Range<usize>,
}

impl AttachmentLayout {
    pub fn of<T: MultisigModificationHeader>(header: &T) -> Self {
        let additions_start = T::HEADER_SIZE;
        let deletions_start =
            additions_start + usize::from(header.public_key_additions_count()) * KEY_SIZE;
        let end = deletions_start + usize::from(header.public_key_deletions_count()) * KEY_SIZE;

        Self {
            additions: additions_start..deletions_start,
            deletions: deletions_start..end,
        }
    }

    /// Offset one past the last attachment byte.
    pub fn end(&self) -> usize {
        self.deletions.end
    }
}

/// Copies the fixed header out of the front of `bytes`.
///
/// The buffer carries no alignment guarantee, so the header is read unaligned.
pub fn read_header<T: MultisigModificationHeader>(bytes: &[u8]) -> Result<T> {
    let header_bytes = bytes
        .get(..T::HEADER_SIZE)
        .ok_or(LayoutError::BufferTooSmall {
            required: T::HEADER_SIZE,
            actual: bytes.len(),
        })?;
    Ok(bytemuck::pod_read_unaligned(header_bytes))
}

/// Overwrites the fixed header at the front of `bytes`.
pub fn write_header<T: MultisigModificationHeader>(bytes: &mut [u8], header: &T) -> Result<()> {
    let actual = bytes.len();
    let header_bytes = bytes
        .get_mut(..T::HEADER_SIZE)
        .ok_or(LayoutError::BufferTooSmall {
            required: T::HEADER_SIZE,
            actual,
        })?;
    header_bytes.copy_from_slice(bytemuck::bytes_of(header));
    Ok(())
}

/// Public key additions of the transaction stored in `bytes`.
pub fn public_key_additions<T: MultisigModificationHeader>(bytes: &[u8]) -> Result<&[Key]> {
    let layout = AttachmentLayout::of(&read_header::<T>(bytes)?);
    keys_in(bytes, layout.additions)
}

/// Public key deletions of the transaction stored in `bytes`.
pub fn public_key_deletions<T: MultisigModificationHeader>(bytes: &[u8]) -> Result<&[Key]> {
    let layout = AttachmentLayout::of(&read_header::<T>(bytes)?);
    keys_in(bytes, layout.deletions)
}

/// Mutable public key additions, for filling in a transaction under construction.
pub fn public_key_additions_mut<T: MultisigModificationHeader>(
    bytes: &mut [u8],
) -> Result<&mut [Key]> {
    let layout = AttachmentLayout::of(&read_header::<T>(bytes)?);
    keys_in_mut(bytes, layout.additions)
}

/// Mutable public key deletions, for filling in a transaction under construction.
pub fn public_key_deletions_mut<T: MultisigModificationHeader>(
    bytes: &mut [u8],
) -> Result<&mut [Key]> {
    let layout = AttachmentLayout::of(&read_header::<T>(bytes)?);
    keys_in_mut(bytes, layout.deletions)
}

/// Both attachments at once, mutably.
pub fn attachments_mut<T: MultisigModificationHeader>(
    bytes: &mut [u8],
) -> Result<(&mut [Key], &mut [Key])> {
    let layout = AttachmentLayout::of(&read_header::<T>(bytes)?);
    let actual = bytes.len();
    let region = bytes
        .get_mut(layout.additions.start..layout.end())
        .ok_or(LayoutError::BufferTooSmall {
            required: layout.end(),
            actual,
        })?;
    let (additions, deletions) = region.split_at_mut(layout.additions.len());
    Ok((
        bytemuck::cast_slice_mut(additions),
        bytemuck::cast_slice_mut(deletions),
    ))
}

// Ranges produced by `AttachmentLayout` are whole multiples of `KEY_SIZE` and
// `Key` is byte-aligned, so the casts below cannot fail once the range is in bounds.
pub(crate) fn keys_in(bytes: &[u8], range: Range<usize>) -> Result<&[Key]> {
    let required = range.end;
    bytes
        .get(range)
        .map(bytemuck::cast_slice)
        .ok_or(LayoutError::BufferTooSmall {
            required,
            actual: bytes.len(),
        })
}

fn keys_in_mut(bytes: &mut [u8], range: Range<usize>) -> Result<&mut [Key]> {
    let required = range.end;
    let actual = bytes.len();
    bytes
        .get_mut(range)
        .map(bytemuck::cast_slice_mut)
        .ok_or(LayoutError::BufferTooSmall { required, actual })
}
