//! Error types.

use crate::dimension::DimensionVector;
use crate::ops::Operation;

/// Result type for dimension-checked operations.
pub type Result<T> = core::result::Result<T, DimensionError>;

/// Error raised when an operation's dimensional precondition does not hold.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DimensionError {
    /// The operand dimensions differ from what the operation requires.
    #[error("dimension mismatch: expected [{expected}], found [{found}]")]
    Mismatch {
        /// Dimensions the operation required.
        expected: DimensionVector,
        /// Dimensions actually supplied.
        found: DimensionVector,
    },

    /// A reduction was given an empty operand list.
    #[error("{op} requires at least one operand")]
    NoOperands {
        /// The reduction that was attempted.
        op: Operation,
    },
}

impl DimensionError {
    /// Builds a [`DimensionError::Mismatch`], logging it at debug level.
    pub(crate) fn mismatch(expected: DimensionVector, found: DimensionVector) -> Self {
        log::debug!("dimension mismatch: expected [{expected}], found [{found}]");
        DimensionError::Mismatch { expected, found }
    }

    /// Returns `true` for [`DimensionError::Mismatch`].
    pub fn is_mismatch(&self) -> bool {
        matches!(self, DimensionError::Mismatch { .. })
    }
}

/// Returns `Ok(())` when `found` is compatible with `expected`.
#[inline]
pub(crate) fn ensure_compatible(expected: &DimensionVector, found: &DimensionVector) -> Result<()> {
    if expected.is_compatible(found) {
        Ok(())
    } else {
        Err(DimensionError::mismatch(*expected, *found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::dims;

    #[test]
    fn mismatch_message_renders_dimensions() {
        let err = DimensionError::mismatch(dims::METER, dims::SECOND);
        assert_eq!(err.to_string(), "dimension mismatch: expected [m], found [s]");
        assert!(err.is_mismatch());
    }

    #[test]
    fn dimensionless_renders_as_empty_brackets() {
        let err = DimensionError::mismatch(dims::DIMLESS, dims::PASCAL);
        assert_eq!(err.to_string(), "dimension mismatch: expected [], found [kg m^-1 s^-2]");
    }

    #[test]
    fn no_operands_names_the_operation() {
        let err = DimensionError::NoOperands { op: Operation::Max };
        assert_eq!(err.to_string(), "max requires at least one operand");
        assert!(!err.is_mismatch());
    }

    #[test]
    fn ensure_compatible_accepts_equal_vectors() {
        assert!(ensure_compatible(&dims::JOULE, &dims::JOULE).is_ok());
        assert!(ensure_compatible(&dims::JOULE, &dims::WATT).is_err());
    }
}
