//! PacBio subread names, `<movie>/<well>/<start>_<end>`.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PacBioName {
    pub movie: String,
    pub well: String,
    pub pulse_start: usize,
    pub pulse_end: usize,
}

impl PacBioName {
    /// Returns `None` unless `id` has all three fields and an ordered pulse range.
    pub fn parse(id: &str) -> Option<Self> {
        let mut fields = id.split('/');
        let movie = fields.next().filter(|e| !e.is_empty())?.to_string();
        let well = fields.next().filter(|e| !e.is_empty())?.to_string();
        let mut pulses = fields.next()?.split('_');
        let pulse_start: usize = pulses.next()?.parse().ok()?;
        let pulse_end: usize = pulses.next()?.parse().ok()?;
        if fields.next().is_some() || pulses.next().is_some() || pulse_end < pulse_start {
            return None;
        }
        Some(Self {
            movie,
            well,
            pulse_start,
            pulse_end,
        })
    }
    pub fn pulse_len(&self) -> usize {
        self.pulse_end - self.pulse_start
    }
}

impl fmt::Display for PacBioName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}_{}",
            self.movie, self.well, self.pulse_start, self.pulse_end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parse_subread_name() {
        let id = "m54113_160913_184949/5570667/0_1125";
        let name = PacBioName::parse(id).unwrap();
        assert_eq!(name.movie, "m54113_160913_184949");
        assert_eq!(name.well, "5570667");
        assert_eq!(name.pulse_start, 0);
        assert_eq!(name.pulse_end, 1125);
        assert_eq!(name.pulse_len(), 1125);
        assert_eq!(name.to_string(), id);
    }
    #[test]
    fn reject_malformed() {
        assert!(PacBioName::parse("id").is_none());
        assert!(PacBioName::parse("movie/12").is_none());
        assert!(PacBioName::parse("movie/12/10").is_none());
        assert!(PacBioName::parse("movie/12/20_10").is_none());
        assert!(PacBioName::parse("movie/12/0_10/extra").is_none());
        assert!(PacBioName::parse("/12/0_10").is_none());
    }
}
