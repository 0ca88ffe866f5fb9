use std::cmp::Ordering;
use std::fmt;

/// Recognised month spellings (lowercase) and their calendar index.
const MONTH_NAMES: &[(&str, u8)] = &[
    ("januari", 1),
    ("january", 1),
    ("jan", 1),
    ("februari", 2),
    ("pebruari", 2),
    ("february", 2),
    ("feb", 2),
    ("maret", 3),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("mei", 5),
    ("may", 5),
    ("juni", 6),
    ("june", 6),
    ("jun", 6),
    ("juli", 7),
    ("july", 7),
    ("jul", 7),
    ("agustus", 8),
    ("august", 8),
    ("agu", 8),
    ("ags", 8),
    ("aug", 8),
    ("september", 9),
    ("sep", 9),
    ("sept", 9),
    ("oktober", 10),
    ("october", 10),
    ("okt", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("desember", 12),
    ("december", 12),
    ("des", 12),
    ("dec", 12),
];

/// A month value as it appears in the data, with its calendar position when
/// the label is recognisable.
///
/// Ordering is chronological for recognised months; unrecognised labels sort
/// after them, lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthLabel {
    raw: String,
    index: Option<u8>,
}

impl MonthLabel {
    /// Interpret a raw month label. Never fails: unknown labels are kept as text.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim().to_string();
        let index = calendar_index(&raw);
        MonthLabel { raw, index }
    }

    /// 1 = January … 12 = December, if recognised.
    pub fn calendar_index(&self) -> Option<u8> {
        self.index
    }
}

fn calendar_index(raw: &str) -> Option<u8> {
    let lower = raw.to_lowercase();
    if let Ok(n) = lower.parse::<f64>() {
        return (n.fract() == 0.0 && (1.0..=12.0).contains(&n)).then_some(n as u8);
    }
    MONTH_NAMES
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, idx)| *idx)
}

impl Ord for MonthLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.index, other.index) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.raw.cmp(&other.raw)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

impl PartialOrd for MonthLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(labels: &[&str]) -> Vec<String> {
        let mut months: Vec<MonthLabel> = labels.iter().map(|l| MonthLabel::parse(l)).collect();
        months.sort();
        months.into_iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn indonesian_names_sort_chronologically() {
        assert_eq!(
            sorted(&["Maret", "Januari", "Desember", "Februari", "Agustus"]),
            vec!["Januari", "Februari", "Maret", "Agustus", "Desember"]
        );
    }

    #[test]
    fn numbers_and_abbreviations_are_recognised() {
        assert_eq!(MonthLabel::parse("3").calendar_index(), Some(3));
        assert_eq!(MonthLabel::parse("12.0").calendar_index(), Some(12));
        assert_eq!(MonthLabel::parse(" OKT ").calendar_index(), Some(10));
        assert_eq!(MonthLabel::parse("May").calendar_index(), Some(5));
        assert_eq!(MonthLabel::parse("13").calendar_index(), None);
        assert_eq!(MonthLabel::parse("2.5").calendar_index(), None);
    }

    #[test]
    fn unknown_labels_sort_after_known_months() {
        assert_eq!(
            sorted(&["Q2", "Juni", "Q1", "1"]),
            vec!["1", "Juni", "Q1", "Q2"]
        );
    }

    #[test]
    fn different_spellings_stay_distinct() {
        let a = MonthLabel::parse("Jan");
        let b = MonthLabel::parse("Januari");
        assert_ne!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Less);
    }
}
