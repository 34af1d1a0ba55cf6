//! The sequence capability a `Read` is built on.
use crate::error::{PhasmError, Result};
use std::fmt;

/// An ordered run of symbols with a known length.
pub trait SymbolSequence: Sized {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// A sequence of `len` placeholder symbols.
    /// Fails if `len` symbols cannot be allocated.
    fn with_len(len: usize) -> Result<Self>;
    /// Build a sequence holding exactly `symbols`, in order.
    fn from_symbols(symbols: &str) -> Result<Self>;
}

/// Placeholder base used when only the length of a DNA sequence is known.
pub const DNA_PLACEHOLDER: u8 = b'A';
/// Placeholder byte for raw byte sequences.
pub const RAW_PLACEHOLDER: u8 = b'N';

fn filled(len: usize, symbol: u8) -> Result<Vec<u8>> {
    let mut symbols = Vec::new();
    symbols.try_reserve_exact(len).map_err(|why| {
        PhasmError::InvalidArgument(format!("cannot allocate {} symbols: {}", len, why))
    })?;
    symbols.resize(len, symbol);
    Ok(symbols)
}

/// A DNA sequence over A, C, G, and T. Bases are always stored uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DnaString {
    bases: Vec<u8>,
}

impl DnaString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }
    pub fn reverse_complement(&self) -> Self {
        let bases = self
            .bases
            .iter()
            .rev()
            .map(|&b| match b {
                b'A' => b'T',
                b'C' => b'G',
                b'G' => b'C',
                b'T' => b'A',
                _ => unreachable!("DnaString holds only ACGT"),
            })
            .collect();
        Self { bases }
    }
}

impl fmt::Display for DnaString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bases))
    }
}

impl SymbolSequence for DnaString {
    fn len(&self) -> usize {
        self.bases.len()
    }
    fn with_len(len: usize) -> Result<Self> {
        let bases = filled(len, DNA_PLACEHOLDER)?;
        Ok(Self { bases })
    }
    fn from_symbols(symbols: &str) -> Result<Self> {
        let bases = symbols
            .chars()
            .enumerate()
            .map(|(position, symbol)| match symbol.to_ascii_uppercase() {
                c @ 'A' | c @ 'C' | c @ 'G' | c @ 'T' => Ok(c as u8),
                _ => Err(PhasmError::InvalidSymbol { symbol, position }),
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { bases })
    }
}

impl SymbolSequence for Vec<u8> {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }
    fn with_len(len: usize) -> Result<Self> {
        filled(len, RAW_PLACEHOLDER)
    }
    fn from_symbols(symbols: &str) -> Result<Self> {
        Ok(symbols.as_bytes().to_vec())
    }
}
