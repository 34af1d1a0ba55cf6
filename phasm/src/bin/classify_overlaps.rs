//! Classify local alignments given as JSON lines on stdin.
//! Usage: classify_overlaps [min-overlap=N] [max-diff=N] [max-error-rate=X] < records.jsonl
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate phasm;
use env_logger::Env;
use phasm::{AlignmentFilter, DnaString};
use std::io::BufWriter;
fn main() -> phasm::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let filters = std::env::args()
        .skip(1)
        .map(|arg| arg.parse())
        .collect::<phasm::Result<Vec<AlignmentFilter>>>()?;
    for filter in filters.iter() {
        debug!("Filter:{}", filter);
    }
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let wtr = BufWriter::new(stdout.lock());
    let counts = phasm::record::classify_records::<DnaString, _, _>(stdin.lock(), &filters, wtr)?;
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by_key(|&(ty, _)| ty.to_string());
    for (ty, count) in counts {
        info!("{}\t{}", ty, count);
    }
    Ok(())
}
