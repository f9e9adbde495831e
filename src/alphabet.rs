//! The pool of type variables the generated signatures draw from.

use crate::error::{Error, Result};
use itertools::Itertools;
use std::ops::Range;

pub const STANDARD_SYMBOLS: &str = "XYZUVABCDNMLO";
pub const RETURN_TYPE: char = 'R';
pub const FUNCTION_NAME: &str = "f";

/// Validated, immutable configuration of one generation run.
///
/// Symbols are kept in first-occurrence order with duplicates removed, and
/// the reserved return type never appears among them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    reserved: char,
    target: String,
}

impl Alphabet {
    pub fn new(
        symbols: impl IntoIterator<Item = char>,
        reserved: char,
        target: impl Into<String>,
    ) -> Result<Self> {
        let symbols = symbols.into_iter().unique().collect_vec();
        let target = target.into();

        if symbols.contains(&reserved) {
            return Err(Error::ReservedClash(reserved));
        }
        if symbols.len() < 3 {
            return Err(Error::AlphabetTooSmall(symbols.len()));
        }
        if let Some(&bad) = symbols.iter().find(|c| !c.is_ascii_uppercase()) {
            return Err(Error::InvalidSymbol(bad));
        }
        if let Some(&clash) = symbols
            .iter()
            .find(|c| target.chars().eq(std::iter::once(c.to_ascii_lowercase())))
        {
            return Err(Error::TargetShadowed(clash, target));
        }

        log::debug!(
            "alphabet [{}] with return type `{reserved}`",
            symbols.iter().join(", ")
        );
        Ok(Self {
            symbols,
            reserved,
            target,
        })
    }

    /// The alphabet every generated file is built from.
    pub fn standard() -> Result<Self> {
        Self::new(STANDARD_SYMBOLS.chars(), RETURN_TYPE, FUNCTION_NAME)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn reserved(&self) -> char {
        self.reserved
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Arities a document contains, starting at 2 and stopping one short of
    /// the alphabet size.
    pub fn arities(&self) -> Range<usize> {
        2..self.symbols.len()
    }

    pub fn type_vars(&self, arity: usize) -> Result<&[char]> {
        self.symbols
            .get(..arity)
            .ok_or(Error::ArityOutOfRange {
                arity,
                size: self.symbols.len(),
            })
    }
}
