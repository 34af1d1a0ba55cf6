//! Filters to drop local alignments that are too short or too noisy.
use crate::alignment::LocalAlignment;
use crate::error::{PhasmError, Result};
use crate::sequence::SymbolSequence;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AlignmentFilter {
    /// Keep alignments with an overlap length of at least this value.
    MinOverlapLength(usize),
    /// Keep alignments with at most this many differences.
    MaxDifferences(usize),
    /// Keep alignments whose error rate is at most this value.
    MaxErrorRate(f64),
}

impl AlignmentFilter {
    pub fn accepts<S: SymbolSequence>(&self, la: &LocalAlignment<S>) -> bool {
        match *self {
            AlignmentFilter::MinOverlapLength(min) => la.overlap_length() >= min,
            AlignmentFilter::MaxDifferences(max) => la.differences() <= max,
            AlignmentFilter::MaxErrorRate(max) => la.error_rate() <= max,
        }
    }
}

impl fmt::Display for AlignmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlignmentFilter::MinOverlapLength(x) => write!(f, "min-overlap={}", x),
            AlignmentFilter::MaxDifferences(x) => write!(f, "max-diff={}", x),
            AlignmentFilter::MaxErrorRate(x) => write!(f, "max-error-rate={}", x),
        }
    }
}

/// Parse `min-overlap=N`, `max-diff=N`, or `max-error-rate=X`.
impl FromStr for AlignmentFilter {
    type Err = PhasmError;
    fn from_str(input: &str) -> Result<Self> {
        let invalid = || PhasmError::InvalidArgument(format!("invalid filter {}", input));
        let mut split = input.splitn(2, '=');
        let name = split.next().ok_or_else(invalid)?;
        let value = split.next().ok_or_else(invalid)?;
        match name {
            "min-overlap" => value
                .parse()
                .map(AlignmentFilter::MinOverlapLength)
                .map_err(|_| invalid()),
            "max-diff" => value
                .parse()
                .map(AlignmentFilter::MaxDifferences)
                .map_err(|_| invalid()),
            "max-error-rate" => match value.parse::<f64>() {
                Ok(rate) if rate.is_finite() && rate >= 0. => Ok(AlignmentFilter::MaxErrorRate(rate)),
                _ => Err(invalid()),
            },
            _ => Err(invalid()),
        }
    }
}

pub fn min_overlap_length<'a, S: SymbolSequence>(min: usize) -> impl Fn(&&LocalAlignment<'a, S>) -> bool {
    move |la: &&LocalAlignment<'a, S>| AlignmentFilter::MinOverlapLength(min).accepts(la)
}

pub fn max_differences<'a, S: SymbolSequence>(max: usize) -> impl Fn(&&LocalAlignment<'a, S>) -> bool {
    move |la: &&LocalAlignment<'a, S>| AlignmentFilter::MaxDifferences(max).accepts(la)
}

pub fn max_error_rate<'a, S: SymbolSequence>(max: f64) -> impl Fn(&&LocalAlignment<'a, S>) -> bool {
    move |la: &&LocalAlignment<'a, S>| AlignmentFilter::MaxErrorRate(max).accepts(la)
}

/// Alignments accepted by every filter, in input order.
pub fn filter_alignments<'b, 'a, S>(
    alignments: &'b [LocalAlignment<'a, S>],
    filters: &[AlignmentFilter],
) -> Vec<&'b LocalAlignment<'a, S>>
where
    S: SymbolSequence + Sync,
{
    let passed: Vec<_> = alignments
        .par_iter()
        .filter(|la| filters.iter().all(|f| f.accepts(la)))
        .collect();
    debug!(
        "{} out of {} alignments passed {} filter(s)",
        passed.len(),
        alignments.len(),
        filters.len()
    );
    passed
}
