//! Group layout of a bitstring genotype.

use crate::error::LayoutError;
use std::ops::Range;

/// Ordered, validated list of group widths.
///
/// Group 0 occupies the most-significant end of the genotype (bit indices
/// `0..widths[0]`), the last group the least-significant end. A group is the
/// unit of inheritance during crossover.
///
/// # Examples
///
/// ```
/// use u_evolve::bitstring::GroupLayout;
///
/// let layout = GroupLayout::new(&[6, 6, 6, 6]).unwrap();
/// assert_eq!(layout.bit_count(), 24);
/// assert_eq!(layout.range(1), 6..12);
///
/// assert!(GroupLayout::new(&[8]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLayout<'a> {
    widths: &'a [usize],
    bit_count: usize,
}

impl<'a> GroupLayout<'a> {
    /// Validates `widths`: at least two groups, none of width 0.
    pub fn new(widths: &'a [usize]) -> Result<Self, LayoutError> {
        if widths.len() < 2 {
            return Err(LayoutError::TooFewGroups(widths.len()));
        }
        if let Some(index) = widths.iter().position(|&w| w == 0) {
            return Err(LayoutError::EmptyGroup { index });
        }
        Ok(Self {
            widths,
            bit_count: widths.iter().sum(),
        })
    }

    /// Total number of bits.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.widths.len()
    }

    /// Group widths in declared order.
    pub fn widths(&self) -> &'a [usize] {
        self.widths
    }

    /// Bit index range of group `index`.
    ///
    /// # Panics
    /// Panics if `index >= group_count()`.
    pub fn range(&self, index: usize) -> Range<usize> {
        let start: usize = self.widths[..index].iter().sum();
        start..start + self.widths[index]
    }

    /// Bit index ranges of every group, in declared order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + 'a {
        self.widths.iter().scan(0, |start, &width| {
            let range = *start..*start + width;
            *start += width;
            Some(range)
        })
    }
}
