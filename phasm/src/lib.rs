//! Reads and the local alignments between them, the building blocks
//! of an overlap-based long read assembly.
#[allow(unused_imports)]
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;
extern crate rayon;
extern crate serde_json;
extern crate thiserror;
pub mod alignment;
pub mod error;
pub mod filter;
pub mod pacbio;
pub mod read;
pub mod record;
pub mod sequence;
pub use alignment::{AlignmentType, LocalAlignment, Strand};
pub use error::{PhasmError, Result};
pub use filter::AlignmentFilter;
pub use pacbio::PacBioName;
pub use read::Read;
pub use record::AlignmentRecord;
pub use sequence::{DnaString, SymbolSequence};
use std::collections::HashMap;

/// Count alignments per type.
pub fn count_types<'b, 'a: 'b, S, I>(alignments: I) -> HashMap<AlignmentType, usize>
where
    S: SymbolSequence + 'a,
    I: IntoIterator<Item = &'b LocalAlignment<'a, S>>,
{
    alignments
        .into_iter()
        .fold(HashMap::new(), |mut counts, la| {
            *counts.entry(la.classify()).or_default() += 1;
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn count_alignment_types() {
        let a = Read::<DnaString>::with_length("a", 1000).unwrap();
        let b = Read::<DnaString>::with_length("b", 1000).unwrap();
        let alns = vec![
            LocalAlignment::new(&a, &b, Strand::Same, 600..1000, 0..400, 0, vec![]).unwrap(),
            LocalAlignment::new(&a, &b, Strand::Same, 500..1000, 0..500, 0, vec![]).unwrap(),
            LocalAlignment::new(&a, &b, Strand::Opposite, 0..400, 600..1000, 0, vec![]).unwrap(),
        ];
        let counts = count_types(&alns);
        assert_eq!(counts[&AlignmentType::OverlapAB], 2);
        assert_eq!(counts[&AlignmentType::OverlapBA], 1);
        assert!(!counts.contains_key(&AlignmentType::AContained));
    }
}
