//! A trait for sanitizing entities received over the wire.

use crate::error::LayoutError;

/// Structural validation of an entity.
///
/// Sanitize checks that an entity is internally consistent: counts agree with
/// the buffer length, tags carry the expected values, the declared size is the
/// computed one. It excludes signature verification and anything that depends
/// on account state; those are handled by other passes.
pub trait Sanitize {
    fn sanitize(&self) -> Result<(), LayoutError> {
        Ok(())
    }
}

impl<T: Sanitize> Sanitize for Vec<T> {
    fn sanitize(&self) -> Result<(), LayoutError> {
        for x in self.iter() {
            x.sanitize()?;
        }
        Ok(())
    }
}

/// Compares an entity's declared size against its computed real size.
///
/// The real size is always computed from the entity's own counts; the declared
/// value is only ever the left-hand side of this comparison.
pub fn check_declared_size(declared: u32, real: u64) -> Result<(), LayoutError> {
    if u64::from(declared) == real {
        Ok(())
    } else {
        Err(LayoutError::SizeMismatch { declared, real })
    }
}

/// Boolean form of [`check_declared_size`].
pub fn is_size_valid(declared: u32, real: u64) -> bool {
    check_declared_size(declared, real).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Checked(bool);

    impl Sanitize for Checked {
        fn sanitize(&self) -> Result<(), LayoutError> {
            if self.0 {
                Ok(())
            } else {
                Err(LayoutError::UnsupportedVersion(0))
            }
        }
    }

    #[test]
    fn test_vec_sanitize_stops_at_first_failure() {
        assert!(vec![Checked(true), Checked(true)].sanitize().is_ok());
        assert_eq!(
            vec![Checked(true), Checked(false)].sanitize(),
            Err(LayoutError::UnsupportedVersion(0))
        );
    }

    #[test]
    fn test_declared_size_comparison() {
        assert!(is_size_valid(136, 136));
        assert!(!is_size_valid(135, 136));
        assert!(!is_size_valid(u32::MAX, 136));
        assert_eq!(
            check_declared_size(u32::MAX, 16456),
            Err(LayoutError::SizeMismatch {
                declared: u32::MAX,
                real: 16456
            })
        );
    }

    #[test]
    fn test_real_size_wider_than_declared_never_matches() {
        let real = u64::from(u32::MAX) + 1;

        assert!(!is_size_valid(0, real));
        assert!(!is_size_valid(u32::MAX, real));
    }
}
