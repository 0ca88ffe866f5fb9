use std::fmt;

// ---------------------------------------------------------------------------
// Category – the fixed set of topical labels
// ---------------------------------------------------------------------------

/// Topical label assigned to every article.
///
/// Declaration order is the classification precedence order, and the derived
/// `Ord` follows it, so sorted collections list categories in that order too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Crime,
    PoliticsGovernment,
    Social,
    Economy,
    Health,
    Education,
    FloraFauna,
    Other,
}

impl Category {
    /// All categories in precedence order.
    pub const ALL: [Category; 8] = [
        Category::Crime,
        Category::PoliticsGovernment,
        Category::Social,
        Category::Economy,
        Category::Health,
        Category::Education,
        Category::FloraFauna,
        Category::Other,
    ];

    /// English display name.
    pub fn label(self) -> &'static str {
        match self {
            Category::Crime => "Crime",
            Category::PoliticsGovernment => "Politics & Government",
            Category::Social => "Social",
            Category::Economy => "Economy",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::FloraFauna => "Flora & Fauna",
            Category::Other => "Other",
        }
    }

    /// Indonesian name as used by the source newsroom data.
    pub fn local_label(self) -> &'static str {
        match self {
            Category::Crime => "Kriminal",
            Category::PoliticsGovernment => "Politik dan Pemerintahan",
            Category::Social => "Sosial",
            Category::Economy => "Ekonomi",
            Category::Health => "Kesehatan",
            Category::Education => "Pendidikan",
            Category::FloraFauna => "Flora dan Fauna",
            Category::Other => "Lainnya",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Keyword table
// ---------------------------------------------------------------------------

/// Ordered keyword groups. The first group with a matching keyword wins.
/// `Other` has no entry: it is the fallback.
pub type KeywordTable = [(Category, &'static [&'static str])];

pub const KEYWORD_TABLE: &KeywordTable = &[
    (
        Category::Crime,
        &[
            "penembak", "pencuri", "pembunuh", "tersangka", "maling", "penipuan",
            "pengeroyokan", "pengedar", "judi", "sabu", "penculikan", "cabuli",
            "narkoba", "tewas", "korupsi", "curanmor", "buron", "polres", "polsek",
            "begal", "curi", "kekerasan", "penganiayaan",
        ],
    ),
    (
        Category::PoliticsGovernment,
        &[
            "politik", "pemerintahan", "pemilu", "kpu", "dprd", "pilkades", "dpd",
            "uu", "caleg", "bupati",
        ],
    ),
    (
        Category::Social,
        &[
            "masyarakat", "bencana", "lingkungan", "angin", "roboh", "banjir",
            "kebun", "kerusuhan",
        ],
    ),
    (
        Category::Economy,
        &["ekonomi", "bisnis", "pasar", "umkm", "pangan", "industri"],
    ),
    (
        Category::Health,
        &["kesehatan", "medis", "rs", "dokter", "stunting", "obat"],
    ),
    (
        Category::Education,
        &["pendidikan", "sekolah", "pelajar", "guru", "mahasiswa"],
    ),
    (
        Category::FloraFauna,
        &["satwa", "pupuk", "hewan", "konservasi"],
    ),
];

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Classify a headline with the built-in keyword table.
pub fn classify(title: &str) -> Category {
    classify_with(KEYWORD_TABLE, title)
}

/// Classify a headline against `table`: lowercase the title, then return the
/// first category with any keyword occurring as a substring, else `Other`.
pub fn classify_with(table: &KeywordTable, title: &str) -> Category {
    let normalized = title.to_lowercase();
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
