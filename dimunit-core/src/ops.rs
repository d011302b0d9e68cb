//! Reductions over operand sequences.
//!
//! Each arithmetic operation comes in two shapes:
//!
//! - a reduce form ([`add`], [`sub`], [`mul`], [`div`], [`max`], [`min`]) that takes a non-empty ordered sequence
//!   and starts from its first element;
//! - a fold form ([`Operation::fold`]) that folds the sequence into an optional accumulator. An absent accumulator
//!   behaves exactly like the reduce form.
//!
//! ```rust
//! use dimunit_core::{dims, ops, Quantity};
//!
//! let a = Quantity::new(10.0, dims::METER);
//! let b = Quantity::new(2.0, dims::METER);
//! assert_eq!(ops::sub([&a, &b])?.value(), 8.0);
//! assert_eq!(ops::Operation::Max.fold(None, [&a, &b])?.value(), 10.0);
//! # Ok::<(), dimunit_core::DimensionError>(())
//! ```

use crate::error::{ensure_compatible, DimensionError, Result};
use crate::quantity::Quantity;
use core::fmt::{self, Display, Formatter};

/// Arithmetic operations that can reduce a sequence of quantities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Sum; dimensions must match.
    Add,
    /// First operand minus the rest; dimensions must match.
    Sub,
    /// Running product; exponents are summed.
    Mul,
    /// Running quotient; exponents are subtracted.
    Div,
    /// Greatest value; dimensions must match.
    Max,
    /// Least value; dimensions must match.
    Min,
}

impl Operation {
    /// Lowercase name of the operation.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Max => "max",
            Operation::Min => "min",
        }
    }

    /// `true` for operations whose operands must share one dimension vector.
    pub const fn requires_same_dimensions(self) -> bool {
        !matches!(self, Operation::Mul | Operation::Div)
    }

    /// Reduces a non-empty sequence left to right.
    pub fn reduce<'a, I>(self, operands: I) -> Result<Quantity>
    where
        I: IntoIterator<Item = &'a Quantity>,
    {
        self.fold(None, operands)
    }

    /// Folds `operands` into `acc`. When `acc` is `None` the first operand becomes the accumulator.
    ///
    /// Returns [`DimensionError::NoOperands`] when there is neither an accumulator nor an operand.
    pub fn fold<'a, I>(self, acc: Option<&Quantity>, operands: I) -> Result<Quantity>
    where
        I: IntoIterator<Item = &'a Quantity>,
    {
        let mut iter = operands.into_iter();
        let mut acc = match acc.copied().or_else(|| iter.next().copied()) {
            Some(first) => first,
            None => return Err(DimensionError::NoOperands { op: self }),
        };
        for rhs in iter {
            self.step(&mut acc, rhs)?;
        }
        Ok(acc)
    }

    fn step(self, acc: &mut Quantity, rhs: &Quantity) -> Result<()> {
        log::trace!("{self}: {acc:?} with {rhs:?}");
        match self {
            Operation::Add => {
                acc.add_in_place(rhs)?;
            }
            Operation::Sub => {
                acc.sub_in_place(rhs)?;
            }
            Operation::Mul => {
                acc.mul_in_place(rhs);
            }
            Operation::Div => {
                acc.div_in_place(rhs);
            }
            Operation::Max => {
                ensure_compatible(&acc.dimensions(), &rhs.dimensions())?;
                if rhs.value() > acc.value() {
                    *acc = *rhs;
                }
            }
            Operation::Min => {
                ensure_compatible(&acc.dimensions(), &rhs.dimensions())?;
                if rhs.value() < acc.value() {
                    *acc = *rhs;
                }
            }
        }
        Ok(())
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sum of all operands.
pub fn add<'a, I: IntoIterator<Item = &'a Quantity>>(operands: I) -> Result<Quantity> {
    Operation::Add.reduce(operands)
}

/// First operand minus the sum of the rest.
pub fn sub<'a, I: IntoIterator<Item = &'a Quantity>>(operands: I) -> Result<Quantity> {
    Operation::Sub.reduce(operands)
}

/// Product of all operands.
pub fn mul<'a, I: IntoIterator<Item = &'a Quantity>>(operands: I) -> Result<Quantity> {
    Operation::Mul.reduce(operands)
}

/// First operand divided by each of the rest in turn.
pub fn div<'a, I: IntoIterator<Item = &'a Quantity>>(operands: I) -> Result<Quantity> {
    Operation::Div.reduce(operands)
}

/// Operand with the greatest value.
pub fn max<'a, I: IntoIterator<Item = &'a Quantity>>(operands: I) -> Result<Quantity> {
    Operation::Max.reduce(operands)
}

/// Operand with the least value.
pub fn min<'a, I: IntoIterator<Item = &'a Quantity>>(operands: I) -> Result<Quantity> {
    Operation::Min.reduce(operands)
}
