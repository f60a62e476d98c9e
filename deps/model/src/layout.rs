//! Declarative field tables for fixed entity headers.
//!
//! A transaction kind describes the scalar fields it appends to a generic
//! header as a `&[FieldSpec]` table. The same table drives the offsets used by
//! production accessors and the size/alignment checks in tests, so the
//! declared struct and the wire offsets cannot drift apart silently.

/// Alignment every entity header is padded to.
pub const ENTITY_ALIGNMENT: usize = 8;

/// One named scalar field in a header table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub size: usize,
}

impl FieldSpec {
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }
}

/// Rounds `value` up to the next multiple of `align` (`align` must be a power of two).
pub const fn align_up(value: usize, align: usize) -> usize {
    (value + align - 1) & !(align - 1)
}

/// Sum of the sizes of all fields in `fields`.
pub const fn fields_size(fields: &[FieldSpec]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fields.len() {
        total += fields[i].size;
        i += 1;
    }
    total
}

/// Byte offset of `fields[index]` when the table is laid out without gaps
/// directly after a base header of `base_size` bytes.
pub const fn field_offset(base_size: usize, fields: &[FieldSpec], index: usize) -> usize {
    let mut offset = base_size;
    let mut i = 0;
    while i < index {
        offset += fields[i].size;
        i += 1;
    }
    offset
}

/// Looks up a field by name, returning its offset after `base_size`.
pub fn find_field_offset(base_size: usize, fields: &[FieldSpec], name: &str) -> Option<usize> {
    fields
        .iter()
        .position(|field| field.name == name)
        .map(|index| field_offset(base_size, fields, index))
}

/// Total header size: base plus fields, padded up to `align`.
pub const fn padded_size(base_size: usize, fields: &[FieldSpec], align: usize) -> usize {
    align_up(base_size + fields_size(fields), align)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::new("a", 1),
        FieldSpec::new("b", 2),
        FieldSpec::new("c", 4),
    ];

    #[test]
    fn test_field_offsets_are_contiguous() {
        assert_eq!(field_offset(16, FIELDS, 0), 16);
        assert_eq!(field_offset(16, FIELDS, 1), 17);
        assert_eq!(field_offset(16, FIELDS, 2), 19);
        assert_eq!(field_offset(16, FIELDS, 3), 23);
        assert_eq!(find_field_offset(16, FIELDS, "c"), Some(19));
        assert_eq!(find_field_offset(16, FIELDS, "missing"), None);
    }

    #[test]
    fn test_padded_size() {
        assert_eq!(fields_size(FIELDS), 7);
        assert_eq!(padded_size(16, FIELDS, ENTITY_ALIGNMENT), 24);
        assert_eq!(padded_size(17, FIELDS, ENTITY_ALIGNMENT), 24);
        assert_eq!(padded_size(18, FIELDS, ENTITY_ALIGNMENT), 32);
        assert_eq!(padded_size(0, &[], ENTITY_ALIGNMENT), 0);
    }

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(0, 8), 0);
        assert_eq!(align_up(1, 8), 8);
        assert_eq!(align_up(8, 8), 8);
        assert_eq!(align_up(133, 4), 136);
    }
}
