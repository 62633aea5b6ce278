// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cover::Cover, ternary::MatrixDisplayFormat};
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

#[derive(Clone, Debug)]
pub struct CoverMatrixDisplay<'a> {
    cover: &'a Cover,
    format: MatrixDisplayFormat,
    internal_separator: Cow<'a, str>,
    term_separator: (Cow<'a, str>, bool),
}

impl<'a> CoverMatrixDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self {
            cover,
            format: MatrixDisplayFormat::default(),
            internal_separator: Cow::Borrowed(""),
            term_separator: (Cow::Borrowed("\n"), true),
        }
    }

    pub fn with_format(mut self, format: MatrixDisplayFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_internal_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.internal_separator = separator.into();
        self
    }

    pub fn with_term_separator(
        mut self,
        separator: impl Into<Cow<'a, str>>,
        print_last: bool,
    ) -> Self {
        self.term_separator = (separator.into(), print_last);
        self
    }
}

impl<'a> fmt::Display for CoverMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let term_count = self.cover.len();
        for (term_ix, term) in self.cover.terms().iter().enumerate() {
            let term_display = term
                .matrix_display()
                .with_format(self.format)
                .with_separator(&*self.internal_separator);
            write!(f, "{}", term_display)?;

            let (term_separator, print_last) = &self.term_separator;
            if *print_last || term_ix < term_count - 1 {
                write!(f, "{}", term_separator)?;
            }
        }

        Ok(())
    }
}

/// Displays a cover as a sum of products such as `AB' + C`.
///
/// The empty cover displays as `0`.
#[derive(Clone, Debug)]
pub struct CoverAlgebraicDisplay<'a> {
    cover: &'a Cover,
    separator: Cow<'a, str>,
}

impl<'a> CoverAlgebraicDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self {
            cover,
            separator: Cow::Borrowed(" + "),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl<'a> fmt::Display for CoverAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.cover.is_empty() {
            return write!(f, "0");
        }
        for term in self.cover.terms().iter().with_position() {
            match term {
                Position::First(term) | Position::Middle(term) => {
                    write!(f, "{}{}", term.algebraic_display(), self.separator)?;
                }
                Position::Last(term) | Position::Only(term) => {
                    write!(f, "{}", term.algebraic_display())?;
                }
            }
        }
        Ok(())
    }
}
