//! A serializable form of a local alignment, for reads known only by id and length.
use crate::alignment::{AlignmentType, LocalAlignment, Strand};
use crate::error::{PhasmError, Result};
use crate::filter::{filter_alignments, AlignmentFilter};
use crate::read::Read;
use crate::sequence::SymbolSequence;
use std::collections::HashMap;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentRecord {
    pub a: String,
    pub a_len: usize,
    pub b: String,
    pub b_len: usize,
    pub strand: Strand,
    pub arange: (usize, usize),
    pub brange: (usize, usize),
    pub differences: usize,
    #[serde(default)]
    pub tracepoints: Vec<(usize, usize)>,
}

impl AlignmentRecord {
    /// `a` and `b` must be the reads this record names.
    pub fn to_alignment<'a, S: SymbolSequence>(
        &self,
        a: &'a Read<S>,
        b: &'a Read<S>,
    ) -> Result<LocalAlignment<'a, S>> {
        if a.id() != self.a || b.id() != self.b {
            return Err(PhasmError::InvalidArgument(format!(
                "record is between {} and {}, but got {} and {}",
                self.a, self.b, a, b
            )));
        }
        LocalAlignment::new(
            a,
            b,
            self.strand,
            self.arange.0..self.arange.1,
            self.brange.0..self.brange.1,
            self.differences,
            self.tracepoints.clone(),
        )
    }
}

/// Parse JSON lines into records. Blank lines are skipped.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<AlignmentRecord>> {
    let mut records = vec![];
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    trace!("Parsed {} records", records.len());
    Ok(records)
}

/// One read per id, with placeholder content of the recorded length.
/// Every record naming the same id must agree on its length.
pub fn collect_reads<S: SymbolSequence>(
    records: &[AlignmentRecord],
) -> Result<HashMap<String, Read<S>>> {
    let mut lengths: HashMap<&str, usize> = HashMap::new();
    let named = records
        .iter()
        .flat_map(|r| vec![(r.a.as_str(), r.a_len), (r.b.as_str(), r.b_len)]);
    for (id, len) in named {
        let known = *lengths.entry(id).or_insert(len);
        if known != len {
            return Err(PhasmError::InvalidArgument(format!(
                "read {} is recorded with length {} and {}",
                id, known, len
            )));
        }
    }
    debug!("{} distinct reads in {} records", lengths.len(), records.len());
    lengths
        .into_iter()
        .map(|(id, len)| Ok((id.to_string(), Read::with_length(id, len)?)))
        .collect()
}

/// Alignments of `records` against the reads from `collect_reads`.
pub fn to_alignments<'a, S: SymbolSequence>(
    records: &[AlignmentRecord],
    reads: &'a HashMap<String, Read<S>>,
) -> Result<Vec<LocalAlignment<'a, S>>> {
    let get = move |id: &str| {
        reads
            .get(id)
            .ok_or_else(|| PhasmError::InvalidArgument(format!("read {} is unknown", id)))
    };
    records
        .iter()
        .map(|record| record.to_alignment(get(&record.a)?, get(&record.b)?))
        .collect()
}

/// Read records from `reader`, keep those accepted by every filter, and write
/// `<a>\t<b>\t<type>\t<overlap>\t<error rate>\t<overhang>` per kept alignment.
/// Returns the number of kept alignments per type.
pub fn classify_records<S, R, W>(
    reader: R,
    filters: &[AlignmentFilter],
    mut wtr: W,
) -> Result<HashMap<AlignmentType, usize>>
where
    S: SymbolSequence + Sync,
    R: BufRead,
    W: Write,
{
    let records = parse_records(reader)?;
    let reads: HashMap<String, Read<S>> = collect_reads(&records)?;
    let alignments = to_alignments(&records, &reads)?;
    let passed = filter_alignments(&alignments, filters);
    for la in passed.iter() {
        writeln!(
            wtr,
            "{}\t{}\t{}\t{}\t{:.4}\t{}",
            la.a(),
            la.b(),
            la.classify(),
            la.overlap_length(),
            la.error_rate(),
            la.overhang()
        )?;
    }
    wtr.flush()?;
    Ok(crate::count_types(passed.iter().copied()))
}
