use std::fmt;

use crate::error::{Error, Result};

/// An elementary (3-cell neighborhood) rule in Wolfram numbering.
///
/// The neighborhood `(left, center, right)` is read as a 3-bit number with
/// `left` as the most significant bit; the next state is bit `index` of the
/// rule number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule(u8);

impl Rule {
    pub fn decode(n: i64) -> Result<Self> {
        u8::try_from(n)
            .map(Rule)
            .map_err(|_| Error::OutOfRange { rule: n })
    }

    /// All 256 rules, ascending.
    pub fn all() -> impl Iterator<Item = Rule> {
        (0..=u8::MAX).map(Rule)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn index(left: bool, center: bool, right: bool) -> u8 {
        (left as u8) << 2 | (center as u8) << 1 | right as u8
    }

    #[inline]
    pub fn apply(self, left: bool, center: bool, right: bool) -> bool {
        (self.0 >> Self::index(left, center, right)) & 1 == 1
    }

    /// Outputs for neighborhood indices 0..8.
    pub fn table(self) -> [bool; 8] {
        std::array::from_fn(|i| (self.0 >> i) & 1 == 1)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}", self.0)
    }
}
