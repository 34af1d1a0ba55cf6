//! A module to represent sequenced reads.
use crate::error::{PhasmError, Result};
use crate::pacbio::PacBioName;
use crate::sequence::SymbolSequence;
use std::convert::TryInto;
use std::fmt;

/// An identified read over a sequence type `S`.
/// The length of a read is always the length of its sequence.
#[derive(Debug, Clone)]
pub struct Read<S: SymbolSequence> {
    id: String,
    sequence: S,
}

impl<S: SymbolSequence> Read<S> {
    /// A read of exactly `length` placeholder symbols.
    /// Fails if `length` is negative, does not fit in `usize`, or cannot be allocated.
    pub fn with_length<N>(id: &str, length: N) -> Result<Self>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        let len: usize = length.try_into().map_err(|_| {
            PhasmError::InvalidArgument(format!("read {} has invalid length {}", id, length))
        })?;
        let sequence = S::with_len(len)?;
        Ok(Self::from_sequence(id, sequence))
    }
    pub fn from_symbols(id: &str, content: &str) -> Result<Self> {
        let sequence = S::from_symbols(content)?;
        Ok(Self::from_sequence(id, sequence))
    }
    pub fn from_sequence(id: &str, sequence: S) -> Self {
        let id = id.to_string();
        Self { id, sequence }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn sequence(&self) -> &S {
        &self.sequence
    }
    pub fn into_sequence(self) -> S {
        self.sequence
    }
    pub fn len(&self) -> usize {
        self.sequence.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
    /// The movie, well, and pulse range encoded in a PacBio-style id.
    pub fn pacbio_name(&self) -> Option<PacBioName> {
        PacBioName::parse(&self.id)
    }
}

impl<S: SymbolSequence> fmt::Display for Read<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
