// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::InvalidTernaryNumeric,
    grid::Grid,
    ternary::{MatrixDisplayFormat, Ternary},
};
use std::{
    borrow::Cow,
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
};

/// A product term over the input variables, together with the minterms it covers.
///
/// Two implicants are equal if their variable states are equal, regardless of their minterm
/// sets or primality.
#[derive(Clone, Debug)]
pub struct Implicant {
    states: Vec<Ternary>,
    minterms: BTreeSet<usize>,
    prime: bool,
}

impl Implicant {
    pub fn new(states: Vec<Ternary>, minterms: impl IntoIterator<Item = usize>) -> Self {
        Self {
            states,
            minterms: minterms.into_iter().collect(),
            prime: true,
        }
    }

    /// Builds an implicant from states in numeric notation (`0`, `1`, `2` for don't-care).
    pub fn from_numeric(
        numeric: &[u8],
        minterms: impl IntoIterator<Item = usize>,
    ) -> Result<Self, InvalidTernaryNumeric> {
        let states = numeric
            .iter()
            .map(|&value| Ternary::from_numeric(value))
            .collect::<Result<_, _>>()?;
        Ok(Self::new(states, minterms))
    }

    /// Builds the single-cell implicant at a grid position.
    ///
    /// Don't-care cells get no minterm, which keeps them out of the prime chart.
    pub fn from_cell(grid: &Grid, column: usize, row: usize) -> Self {
        let states = (0..grid.variable_count())
            .map(|var| grid.input_at(column, row, var))
            .collect();
        let mut minterms = BTreeSet::new();
        if !grid.value_at(column, row).is_dont_care() {
            minterms.insert(grid.cell_id(column, row));
        }
        Self {
            states,
            minterms,
            prime: true,
        }
    }

    /// Merges two implicants that differ in exactly one defined variable.
    ///
    /// Returns `None` if the lengths differ, if the don't-care positions differ, or if the
    /// implicants do not differ in exactly one position. Primality is left to the caller.
    pub fn try_merge(&self, other: &Implicant) -> Option<Implicant> {
        if self.states.len() != other.states.len() {
            return None;
        }

        let mut merge_ix = None;
        for (ix, (&a, &b)) in self.states.iter().zip(&other.states).enumerate() {
            if a.is_dont_care() != b.is_dont_care() {
                return None;
            }
            if a != b {
                if merge_ix.is_some() {
                    return None;
                }
                merge_ix = Some(ix);
            }
        }

        let merge_ix = merge_ix?;
        let mut merged = self.clone();
        merged.states[merge_ix] = Ternary::DontCare;
        merged.minterms.extend(other.minterms.iter().copied());
        Some(merged)
    }

    #[inline]
    pub fn variable_states(&self) -> &[Ternary] {
        &self.states
    }

    #[inline]
    pub fn minterm_set(&self) -> &BTreeSet<usize> {
        &self.minterms
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn covers(&self, minterm: usize) -> bool {
        self.minterms.contains(&minterm)
    }

    /// The number of true variables, used to group implicants for merging.
    pub fn inputs_true_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_true()).count()
    }

    /// The number of literals in this product term.
    pub fn relevant_input_count(&self) -> usize {
        self.states.iter().filter(|s| !s.is_dont_care()).count()
    }

    #[inline]
    pub fn mark_prime(&mut self, prime: bool) {
        self.prime = prime;
    }

    #[inline]
    pub fn is_prime(&self) -> bool {
        self.prime
    }

    /// Returns true if this product term is satisfied by `values`.
    ///
    /// Missing values never satisfy a defined variable.
    pub fn evaluate(&self, values: &[bool]) -> bool {
        self.states
            .iter()
            .enumerate()
            .all(|(ix, state)| match state.to_bool() {
                Some(expected) => values.get(ix) == Some(&expected),
                None => true,
            })
    }

    #[inline]
    pub fn matrix_display(&self) -> ImplicantMatrixDisplay<'_> {
        ImplicantMatrixDisplay::new(self)
    }

    #[inline]
    pub fn algebraic_display(&self) -> ImplicantAlgebraicDisplay<'_> {
        ImplicantAlgebraicDisplay::new(self)
    }
}

impl PartialEq for Implicant {
    fn eq(&self, other: &Self) -> bool {
        self.states == other.states
    }
}

impl Eq for Implicant {}

impl Hash for Implicant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.states.hash(state);
    }
}

pub struct ImplicantMatrixDisplay<'a> {
    implicant: &'a Implicant,
    format: MatrixDisplayFormat,
    separator: Cow<'a, str>,
}

impl<'a> ImplicantMatrixDisplay<'a> {
    pub fn new(implicant: &'a Implicant) -> Self {
        Self {
            implicant,
            format: MatrixDisplayFormat::default(),
            separator: Cow::Borrowed(""),
        }
    }

    pub fn with_format(mut self, format: MatrixDisplayFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl<'a> fmt::Display for ImplicantMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let states = self.implicant.variable_states();
        for (ix, &state) in states.iter().enumerate() {
            write!(f, "{}", self.format.char_for(state))?;
            if ix + 1 < states.len() {
                write!(f, "{}", self.separator)?;
            }
        }
        Ok(())
    }
}

/// Displays an implicant as a product of literals, such as `AB'D`.
///
/// An implicant without any literal is the constant `1`.
pub struct ImplicantAlgebraicDisplay<'a> {
    implicant: &'a Implicant,
}

impl<'a> ImplicantAlgebraicDisplay<'a> {
    pub fn new(implicant: &'a Implicant) -> Self {
        Self { implicant }
    }
}

impl<'a> fmt::Display for ImplicantAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.implicant.relevant_input_count() == 0 {
            return write!(f, "1");
        }
        for (input_ix, state) in self.implicant.variable_states().iter().enumerate() {
            match state {
                Ternary::True => write!(f, "{}", AlgebraicSymbol::input(input_ix))?,
                Ternary::False => write!(f, "{}'", AlgebraicSymbol::input(input_ix))?,
                Ternary::DontCare => {}
            }
        }
        Ok(())
    }
}

const INPUT_ALGEBRAIC_SYMBOLS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// The name of an input variable: `A` through `Z`, then `BA`, `BB` and so on.
#[derive(Debug)]
pub(crate) enum AlgebraicSymbol {
    Char(char),
    String(String),
}

impl AlgebraicSymbol {
    pub(crate) fn input(input_ix: usize) -> Self {
        if input_ix < 26 {
            return Self::Char(INPUT_ALGEBRAIC_SYMBOLS[input_ix]);
        }
        let rest = input_ix / 26;
        let last_ch = INPUT_ALGEBRAIC_SYMBOLS[input_ix % 26];

        match Self::input(rest) {
            Self::Char(ch) => Self::String(format!("{}{}", ch, last_ch)),
            Self::String(mut s) => {
                s.push(last_ch);
                Self::String(s)
            }
        }
    }
}

impl fmt::Display for AlgebraicSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Char(ch) => write!(f, "{}", *ch),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}
