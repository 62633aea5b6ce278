// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::InvalidTernaryNumeric;
use std::fmt;

/// A three-valued logic symbol.
///
/// Only equality is meaningful: there is no ordering between the three values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ternary {
    False,
    True,
    #[default]
    DontCare,
}

impl Ternary {
    /// Converts from the numeric notation: `0` is false, `1` is true and `2` is don't-care.
    pub fn from_numeric(value: u8) -> Result<Self, InvalidTernaryNumeric> {
        match value {
            0 => Ok(Self::False),
            1 => Ok(Self::True),
            2 => Ok(Self::DontCare),
            other => Err(InvalidTernaryNumeric(other)),
        }
    }

    #[inline]
    pub fn is_dont_care(self) -> bool {
        matches!(self, Self::DontCare)
    }

    #[inline]
    pub fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    #[inline]
    pub fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    /// Returns the defined boolean value, or `None` for don't-care.
    #[inline]
    pub fn to_bool(self) -> Option<bool> {
        match self {
            Self::False => Some(false),
            Self::True => Some(true),
            Self::DontCare => None,
        }
    }

    /// Returns true if a concrete `value` is compatible with this symbol.
    #[inline]
    pub fn admits(self, value: bool) -> bool {
        match self.to_bool() {
            Some(v) => v == value,
            None => true,
        }
    }
}

impl From<bool> for Ternary {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<Option<bool>> for Ternary {
    #[inline]
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::DontCare,
        }
    }
}

impl fmt::Display for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", MatrixDisplayFormat::default().char_for(*self))
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub enum MatrixDisplayFormat {
    /// Display values as `10-1`, with dashes representing don't-care.
    #[default]
    Dashes,

    /// Display values as `1021`, with `2` representing don't-care.
    Numeric,
}

impl MatrixDisplayFormat {
    /// Returns the character that would be displayed for a value.
    pub fn char_for(self, value: Ternary) -> char {
        match value {
            Ternary::True => '1',
            Ternary::False => '0',
            Ternary::DontCare => match self {
                Self::Dashes => '-',
                Self::Numeric => '2',
            },
        }
    }
}
