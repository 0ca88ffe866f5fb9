use std::collections::{BTreeMap, BTreeSet};

use super::category::Category;
use super::model::Article;
use super::month::MonthLabel;

// ---------------------------------------------------------------------------
// Overall distribution
// ---------------------------------------------------------------------------

/// Count articles per category. Categories without rows are absent.
pub fn distribution<'a>(rows: impl IntoIterator<Item = &'a Article>) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for article in rows {
        *counts.entry(article.category).or_insert(0) += 1;
    }
    counts
}

/// Convert counts into percentages of their total, keeping category order.
pub fn distribution_shares(counts: &BTreeMap<Category, usize>) -> Vec<(Category, f64)> {
    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }
    counts
        .iter()
        .map(|(&category, &n)| (category, 100.0 * n as f64 / total as f64))
        .collect()
}

// ---------------------------------------------------------------------------
// Monthly percentages
// ---------------------------------------------------------------------------

/// Dense month × category percentage table.
///
/// Every month present in the input has a value for every category seen in
/// any month (0.0 where the category did not occur that month).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyShares {
    categories: Vec<Category>,
    rows: BTreeMap<MonthLabel, Vec<f64>>,
}

impl MonthlyShares {
    /// Months in chronological order.
    pub fn months(&self) -> impl Iterator<Item = &MonthLabel> {
        self.rows.keys()
    }

    /// Category columns in precedence order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Percentage of `month`'s articles in `category`; `None` for an unknown
    /// month, 0.0 for a category absent from the table.
    pub fn percent(&self, month: &MonthLabel, category: Category) -> Option<f64> {
        let row = self.rows.get(month)?;
        Some(
            self.categories
                .iter()
                .position(|&c| c == category)
                .map_or(0.0, |col| row[col]),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Group rows by month, then by category, and divide by the month total.
/// Rows without a month are skipped.
pub fn monthly_percentages<'a>(rows: impl IntoIterator<Item = &'a Article>) -> MonthlyShares {
    let mut counts: BTreeMap<&MonthLabel, BTreeMap<Category, usize>> = BTreeMap::new();
    for article in rows {
        let Some(month) = &article.month else {
            continue;
        };
        *counts
            .entry(month)
            .or_default()
            .entry(article.category)
            .or_insert(0) += 1;
    }

    let categories: Vec<Category> = counts
        .values()
        .flat_map(|per_cat| per_cat.keys().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let rows = counts
        .into_iter()
        .map(|(month, per_cat)| {
            let total: usize = per_cat.values().sum();
            let shares = categories
                .iter()
                .map(|c| match (per_cat.get(c), total) {
                    (_, 0) | (None, _) => 0.0,
                    (Some(&n), _) => 100.0 * n as f64 / total as f64,
                })
                .collect();
            (month.clone(), shares)
        })
        .collect();

    MonthlyShares { categories, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn article(title: &str, month: Option<&str>) -> Article {
        let month_cell = month.map_or(CellValue::Null, |m| CellValue::String(m.to_string()));
        Article::new(&CellValue::String(title.to_string()), &month_cell, BTreeMap::new())
    }

    fn sample() -> Vec<Article> {
        vec![
            article("Polisi tangkap maling motor", Some("Januari")),
            article("DPRD gelar rapat pemilu", Some("Januari")),
            article("Siswa SMA juara lomba sekolah", Some("Februari")),
        ]
    }

    #[test]
    fn distribution_counts_present_categories_only() {
        let rows = sample();
        let counts = distribution(&rows);
        assert_eq!(
            counts,
            BTreeMap::from([
                (Category::Crime, 1),
                (Category::PoliticsGovernment, 1),
                (Category::Education, 1),
            ])
        );
        assert!(!counts.contains_key(&Category::Other));
    }

    #[test]
    fn monthly_table_is_dense() {
        let rows = sample();
        let table = monthly_percentages(&rows);
        let jan = MonthLabel::parse("Januari");
        let feb = MonthLabel::parse("Februari");

        assert_eq!(
            table.categories(),
            &[Category::Crime, Category::PoliticsGovernment, Category::Education]
        );
        let shares = |m: &MonthLabel| -> Vec<f64> {
            table.categories().iter().filter_map(|&c| table.percent(m, c)).collect()
        };
        assert_eq!(shares(&jan), vec![50.0, 50.0, 0.0]);
        assert_eq!(shares(&feb), vec![0.0, 0.0, 100.0]);
        assert_eq!(table.percent(&feb, Category::Crime), Some(0.0));
        assert_eq!(table.percent(&feb, Category::Health), Some(0.0));
        assert_eq!(table.percent(&MonthLabel::parse("Maret"), Category::Crime), None);
    }

    #[test]
    fn months_come_out_in_calendar_order() {
        let rows = vec![
            article("a", Some("Oktober")),
            article("b", Some("Februari")),
            article("c", Some("Agustus")),
        ];
        let months: Vec<String> = monthly_percentages(&rows).months().map(|m| m.to_string()).collect();
        assert_eq!(months, vec!["Februari", "Agustus", "Oktober"]);
    }

    #[test]
    fn each_month_sums_to_one_hundred() {
        let titles = [
            "Begal beraksi", "Bupati lantik pejabat", "Banjir bandang", "Pasar murah",
            "Obat langka", "Guru teladan", "Satwa dilindungi", "Libur nasional", "Curanmor",
        ];
        let months = ["Januari", "Maret", "Maret", "Juli", "Juli", "Juli", "Desember"];
        let rows: Vec<Article> = titles
            .iter()
            .cycle()
            .take(61)
            .zip(months.iter().cycle())
            .map(|(t, m)| article(t, Some(*m)))
            .collect();

        let table = monthly_percentages(&rows);
        for month in table.months() {
            let sum: f64 = table
                .categories()
                .iter()
                .map(|&c| table.percent(month, c).unwrap())
                .sum();
            assert!((sum - 100.0).abs() < 1e-6, "{month}: {sum}");
        }
    }

    #[test]
    fn rows_without_month_are_excluded() {
        let rows = vec![
            article("Polisi tangkap maling", Some("Mei")),
            article("Guru teladan", None),
        ];
        let table = monthly_percentages(&rows);
        assert_eq!(table.months().count(), 1);
        assert_eq!(table.categories(), &[Category::Crime]);
        assert_eq!(table.percent(&MonthLabel::parse("Mei"), Category::Crime), Some(100.0));
        // The overall distribution still counts the month-less row.
        assert_eq!(distribution(&rows).get(&Category::Education), Some(&1));
    }

    #[test]
    fn empty_input_gives_empty_results() {
        let rows: Vec<Article> = Vec::new();
        assert!(distribution(&rows).is_empty());
        assert!(distribution_shares(&distribution(&rows)).is_empty());
        let table = monthly_percentages(&rows);
        assert!(table.is_empty());
        assert!(table.categories().is_empty());
    }

    #[test]
    fn shares_are_percentages_of_total() {
        let counts = BTreeMap::from([(Category::Crime, 3), (Category::Other, 1)]);
        assert_eq!(
            distribution_shares(&counts),
            vec![(Category::Crime, 75.0), (Category::Other, 25.0)]
        );
    }
}
