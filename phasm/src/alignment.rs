//! Local alignments between two reads, as produced by an overlapper such as daligner.
use crate::error::{PhasmError, Result};
use crate::read::Read;
use crate::sequence::SymbolSequence;
use std::fmt;
use std::ops::Range;

/// The relative direction of the two reads in an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    /// Both reads are aligned as-is.
    Same,
    /// Read b is aligned as its reverse complement.
    Opposite,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strand::Same => write!(f, "+"),
            Strand::Opposite => write!(f, "-"),
        }
    }
}

/// How two reads lie relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignmentType {
    /// The suffix of a overlaps the prefix of b.
    OverlapAB,
    /// The suffix of b overlaps the prefix of a.
    OverlapBA,
    AContained,
    BContained,
}

impl fmt::Display for AlignmentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AlignmentType::OverlapAB => "overlap_ab",
            AlignmentType::OverlapBA => "overlap_ba",
            AlignmentType::AContained => "a_contained",
            AlignmentType::BContained => "b_contained",
        };
        write!(f, "{}", name)
    }
}

/// A local alignment between read `a` and read `b`.
/// Ranges are 0-based and half-open.
#[derive(Debug, Clone)]
pub struct LocalAlignment<'a, S: SymbolSequence> {
    a: &'a Read<S>,
    b: &'a Read<S>,
    strand: Strand,
    arange: Range<usize>,
    brange: Range<usize>,
    differences: usize,
    tracepoints: Vec<(usize, usize)>,
}

fn check_range<S: SymbolSequence>(read: &Read<S>, range: &Range<usize>) -> Result<()> {
    if range.start <= range.end && range.end <= read.len() {
        Ok(())
    } else {
        Err(PhasmError::InvalidArgument(format!(
            "range {}..{} is out of read {} (length {})",
            range.start,
            range.end,
            read,
            read.len()
        )))
    }
}

impl<'a, S: SymbolSequence> LocalAlignment<'a, S> {
    pub fn new(
        a: &'a Read<S>,
        b: &'a Read<S>,
        strand: Strand,
        arange: Range<usize>,
        brange: Range<usize>,
        differences: usize,
        tracepoints: Vec<(usize, usize)>,
    ) -> Result<Self> {
        check_range(a, &arange)?;
        check_range(b, &brange)?;
        if arange.is_empty() && brange.is_empty() {
            return Err(PhasmError::InvalidArgument(format!(
                "alignment between {} and {} covers no bases",
                a, b
            )));
        }
        Ok(Self {
            a,
            b,
            strand,
            arange,
            brange,
            differences,
            tracepoints,
        })
    }
    pub fn a(&self) -> &'a Read<S> {
        self.a
    }
    pub fn b(&self) -> &'a Read<S> {
        self.b
    }
    pub fn strand(&self) -> Strand {
        self.strand
    }
    pub fn arange(&self) -> Range<usize> {
        self.arange.clone()
    }
    pub fn brange(&self) -> Range<usize> {
        self.brange.clone()
    }
    pub fn differences(&self) -> usize {
        self.differences
    }
    pub fn tracepoints(&self) -> &[(usize, usize)] {
        &self.tracepoints
    }
    /// The longer of the two aligned spans.
    pub fn overlap_length(&self) -> usize {
        self.arange.len().max(self.brange.len())
    }
    pub fn len(&self) -> usize {
        self.overlap_length()
    }
    /// Whether both aligned spans are empty.
    pub fn is_empty(&self) -> bool {
        self.overlap_length() == 0
    }
    pub fn error_rate(&self) -> f64 {
        self.differences as f64 / self.overlap_length() as f64
    }
    /// Unaligned bases hanging off the shorter ends on both sides.
    pub fn overhang(&self) -> usize {
        self.arange.start.min(self.brange.start) + self.a_tail().min(self.b_tail())
    }
    fn a_tail(&self) -> usize {
        self.a.len() - self.arange.end
    }
    fn b_tail(&self) -> usize {
        self.b.len() - self.brange.end
    }
    pub fn classify(&self) -> AlignmentType {
        let (astart, bstart) = (self.arange.start, self.brange.start);
        let (atail, btail) = (self.a_tail(), self.b_tail());
        if astart <= bstart && atail <= btail {
            AlignmentType::AContained
        } else if astart >= bstart && atail >= btail {
            AlignmentType::BContained
        } else if astart >= bstart {
            AlignmentType::OverlapAB
        } else {
            AlignmentType::OverlapBA
        }
    }
}

impl<'a, S: SymbolSequence> fmt::Display for LocalAlignment<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.a,
            self.b,
            self.strand,
            self.arange.start,
            self.arange.end,
            self.brange.start,
            self.brange.end,
            self.differences
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::DnaString;
    fn reads(alen: usize, blen: usize) -> (Read<DnaString>, Read<DnaString>) {
        let a = Read::with_length("a", alen).unwrap();
        let b = Read::with_length("b", blen).unwrap();
        (a, b)
    }
    #[test]
    fn overlap_statistics() {
        let (a, b) = reads(1000, 800);
        let la = LocalAlignment::new(&a, &b, Strand::Same, 600..1000, 0..390, 20, vec![]).unwrap();
        assert_eq!(la.overlap_length(), 400);
        assert_eq!(la.len(), 400);
        assert!(!la.is_empty());
        assert!((la.error_rate() - 0.05).abs() < 1e-10);
        // min(600, 0) + min(0, 410)
        assert_eq!(la.overhang(), 0);
        assert_eq!(la.to_string(), "a\tb\t+\t600\t1000\t0\t390\t20");
    }
    #[test]
    fn overhang_with_ragged_ends() {
        let (a, b) = reads(1000, 1000);
        let la = LocalAlignment::new(&a, &b, Strand::Opposite, 500..950, 10..460, 0, vec![]).unwrap();
        assert_eq!(la.overhang(), 10 + 50);
    }
    #[test]
    fn classify_overlaps() {
        let (a, b) = reads(1000, 1000);
        let la = LocalAlignment::new(&a, &b, Strand::Same, 600..1000, 0..400, 0, vec![]).unwrap();
        assert_eq!(la.classify(), AlignmentType::OverlapAB);
        let la = LocalAlignment::new(&a, &b, Strand::Same, 0..400, 600..1000, 0, vec![]).unwrap();
        assert_eq!(la.classify(), AlignmentType::OverlapBA);
    }
    #[test]
    fn classify_containment() {
        let (a, b) = reads(300, 1000);
        let la = LocalAlignment::new(&a, &b, Strand::Same, 0..300, 200..500, 3, vec![]).unwrap();
        assert_eq!(la.classify(), AlignmentType::AContained);
        let (a, b) = reads(1000, 300);
        let la = LocalAlignment::new(&a, &b, Strand::Same, 200..500, 0..300, 3, vec![]).unwrap();
        assert_eq!(la.classify(), AlignmentType::BContained);
    }
    #[test]
    fn identical_extent_is_a_contained() {
        let (a, b) = reads(500, 500);
        let la = LocalAlignment::new(&a, &b, Strand::Same, 0..500, 0..500, 0, vec![]).unwrap();
        assert_eq!(la.classify(), AlignmentType::AContained);
    }
    #[test]
    fn reject_bad_ranges() {
        let (a, b) = reads(100, 100);
        assert!(LocalAlignment::new(&a, &b, Strand::Same, 0..101, 0..100, 0, vec![]).is_err());
        #[allow(clippy::reversed_empty_ranges)]
        let backwards = 50..10;
        assert!(LocalAlignment::new(&a, &b, Strand::Same, backwards, 0..10, 0, vec![]).is_err());
        assert!(LocalAlignment::new(&a, &b, Strand::Same, 5..5, 7..7, 0, vec![]).is_err());
        let la = LocalAlignment::new(&a, &b, Strand::Same, 5..5, 0..10, 1, vec![(5, 1)]).unwrap();
        assert_eq!(la.overlap_length(), 10);
        assert_eq!(la.tracepoints(), &[(5, 1)]);
    }
}
