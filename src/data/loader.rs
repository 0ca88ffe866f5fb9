use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use calamine::{open_workbook_auto, Data, Reader};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Article, CellValue, NewsDataset};
use super::month::MonthLabel;

/// Column holding the headline text.
pub const TITLE_COLUMN: &str = "Judul_Berita";
/// Column holding the publication month.
pub const MONTH_COLUMN: &str = "Bulan";
/// File opened at start-up when no path is given.
pub const DEFAULT_DATA_FILE: &str = "Data Berita Lampung timur 2023.xlsx";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} has no '{column}' column", .path.display())]
    MissingColumn { column: &'static str, path: PathBuf },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("workbook contains no worksheet data")]
    EmptyWorkbook,
}

/// Header plus cell rows, before the article columns are located.
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and classify a news table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.ods` – first worksheet, header in row 1
/// * `.csv`     – header row, one article per record
/// * `.json`    – `[{ "Judul_Berita": "...", "Bulan": "...", ... }, ...]`
/// * `.parquet` – flat table with string/number/bool columns
pub fn load_file(path: &Path) -> Result<NewsDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => load_spreadsheet(path),
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    let dataset = into_dataset(table, path)?;
    let unrecognised: BTreeSet<&MonthLabel> = dataset
        .articles
        .iter()
        .filter_map(|a| a.month.as_ref())
        .filter(|m| m.calendar_index().is_none())
        .collect();
    if !unrecognised.is_empty() {
        log::warn!(
            "Month labels {:?} are not calendar months; they sort after the calendar months",
            unrecognised.iter().map(|m| m.to_string()).collect::<Vec<_>>()
        );
    }
    log::info!(
        "Loaded {} articles from {} with columns {:?}",
        dataset.len(),
        path.display(),
        dataset.column_names
    );
    Ok(dataset)
}

/// Locate the title and month columns and classify every row.
fn into_dataset(mut table: RawTable, path: &Path) -> Result<NewsDataset> {
    table.headers = dedupe_headers(table.headers);
    let missing = |column: &'static str| LoadError::MissingColumn {
        column,
        path: path.to_path_buf(),
    };
    let title_idx = find_column(&table.headers, TITLE_COLUMN).ok_or_else(|| missing(TITLE_COLUMN))?;
    let month_idx = find_column(&table.headers, MONTH_COLUMN).ok_or_else(|| missing(MONTH_COLUMN))?;

    let articles = table
        .rows
        .into_iter()
        .map(|row| {
            let cell = |idx: usize| row.get(idx).cloned().unwrap_or(CellValue::Null);
            let title = cell(title_idx);
            let month = cell(month_idx);
            let fields: BTreeMap<String, CellValue> = table
                .headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), cell(i)))
                .collect();
            Article::new(&title, &month, fields)
        })
        .collect();

    Ok(NewsDataset::new(articles, table.headers))
}

/// Exact header match first, then trimmed case-insensitive.
fn find_column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name).or_else(|| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    })
}

/// Repeated header names get a `.1`, `.2`, … suffix (as pandas does) so that
/// no column shadows another in `Article::fields`.
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    headers
        .into_iter()
        .map(|header| {
            let mut name = header.clone();
            let mut n = 0;
            while seen.contains(&name) {
                n += 1;
                name = format!("{header}.{n}");
            }
            seen.insert(name.clone());
            name
        })
        .collect()
}

/// Blank header cells get a positional name so every column stays addressable.
fn header_name(raw: String, idx: usize) -> String {
    if raw.trim().is_empty() {
        format!("column_{idx}")
    } else {
        raw
    }
}

/// Drop rows that carry no value at all (trailing blank spreadsheet rows).
fn push_row(rows: &mut Vec<Vec<CellValue>>, row: Vec<CellValue>) {
    if row.iter().all(CellValue::is_missing) {
        log::debug!("Skipping blank row {}", rows.len() + 1);
        return;
    }
    rows.push(row);
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

fn load_spreadsheet(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path).context("opening spreadsheet")?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::EmptyWorkbook)?
        .context("reading first worksheet")?;

    sheet_to_table(range.rows())
}

/// First sheet row is the header; the rest are articles.
fn sheet_to_table<'a>(mut sheet_rows: impl Iterator<Item = &'a [Data]>) -> Result<RawTable> {
    let headers: Vec<String> = sheet_rows
        .next()
        .ok_or(LoadError::EmptyWorkbook)?
        .iter()
        .enumerate()
        .map(|(i, c)| header_name(excel_to_cell(c).to_string(), i))
        .collect();

    let mut rows = Vec::new();
    for sheet_row in sheet_rows {
        push_row(&mut rows, sheet_row.iter().map(excel_to_cell).collect());
    }

    Ok(RawTable { headers, rows })
}

fn excel_to_cell(data: &Data) -> CellValue {
    match data {
        Data::String(s) if s.trim().is_empty() => CellValue::Null,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::Error(e) => {
            log::warn!("Spreadsheet cell error {e:?}, treating as empty");
            CellValue::Null
        }
        Data::Empty => CellValue::Null,
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .enumerate()
        .map(|(i, h)| header_name(h.to_string(), i))
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        push_row(&mut rows, record.iter().map(guess_cell_type).collect());
    }

    Ok(RawTable { headers, rows })
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.trim().is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented layout, as written by `df.to_json(orient='records')`.
/// Columns are the union of keys, in first-seen order.
fn load_json(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut headers: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let mut rows = Vec::with_capacity(records.len());
    for rec in records {
        let row = headers
            .iter()
            .map(|h| rec.get(h).map_or(CellValue::Null, json_to_cell))
            .collect();
        push_row(&mut rows, row);
    }

    Ok(RawTable { headers, rows })
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) if s.trim().is_empty() => CellValue::Null,
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        if batch.num_columns() != headers.len() {
            bail!(
                "record batch has {} columns, schema has {}",
                batch.num_columns(),
                headers.len()
            );
        }
        for row in 0..batch.num_rows() {
            let cells = batch
                .columns()
                .iter()
                .map(|col| arrow_to_cell(col, row))
                .collect();
            push_row(&mut rows, cells);
        }
    }

    Ok(RawTable { headers, rows })
}

/// Extract a single cell from an Arrow column at a given row.
fn arrow_to_cell(col: &Arc<dyn Array>, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Null;
    }
    match col.data_type() {
        DataType::Utf8 => CellValue::String(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => CellValue::String(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => CellValue::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => CellValue::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => CellValue::Float(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => CellValue::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => CellValue::Bool(col.as_boolean().value(row)),
        other => CellValue::String(format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use arrow::array::{Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use calamine::CellErrorType;

    use super::*;
    use crate::data::category::Category;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_rows_are_classified_and_passthrough_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "berita.csv",
            "No,Judul_Berita,Bulan,Sumber\n\
             1,Polisi tangkap maling motor,Januari,Radar\n\
             2,DPRD gelar rapat pemilu,Januari,Kupas\n\
             3,Pengumuman libur nasional,,Radar\n\
             ,,,\n",
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.column_names, vec!["No", "Judul_Berita", "Bulan", "Sumber"]);

        let categories: Vec<Category> = ds.articles.iter().map(|a| a.category).collect();
        assert_eq!(
            categories,
            vec![Category::Crime, Category::PoliticsGovernment, Category::Other]
        );
        assert_eq!(ds.articles[0].month.as_ref().map(|m| m.to_string()).as_deref(), Some("Januari"));
        assert!(ds.articles[2].month.is_none());
        assert_eq!(ds.articles[1].fields["Sumber"], CellValue::String("Kupas".into()));
        assert_eq!(ds.articles[0].fields["No"], CellValue::Integer(1));
    }

    #[test]
    fn header_match_falls_back_to_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "b.csv", "judul_berita, BULAN \nBanjir rendam desa,3\n");
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.articles[0].category, Category::Social);
        assert_eq!(ds.articles[0].month.as_ref().and_then(|m| m.calendar_index()), Some(3));
    }

    #[test]
    fn missing_month_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "b.csv", "Judul_Berita,Tanggal\nBanjir,2023-01-02\n");
        let err = load_file(&path).unwrap_err();
        match err.downcast_ref::<LoadError>() {
            Some(LoadError::MissingColumn { column, .. }) => assert_eq!(*column, MONTH_COLUMN),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unsupported_extension_and_missing_file_fail() {
        let err = load_file(Path::new("berita.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::UnsupportedExtension(ext)) if ext == "txt"
        ));

        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("absent.csv"));
    }

    #[test]
    fn repeated_headers_keep_every_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "b.csv",
            "Judul_Berita,Bulan,Sumber,Sumber,,column_4\n\
             Banjir rendam desa,Januari,Radar,Kupas,x,y\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(
            ds.column_names,
            vec!["Judul_Berita", "Bulan", "Sumber", "Sumber.1", "column_4", "column_4.1"]
        );

        let fields: Vec<String> = ds
            .column_names
            .iter()
            .map(|c| ds.articles[0].fields[c.as_str()].to_string())
            .collect();
        assert_eq!(fields, vec!["Banjir rendam desa", "Januari", "Radar", "Kupas", "x", "y"]);
    }

    #[test]
    fn spreadsheet_cells_map_to_cell_values() {
        assert_eq!(excel_to_cell(&Data::String("Mei".into())), CellValue::String("Mei".into()));
        assert_eq!(excel_to_cell(&Data::String("   ".into())), CellValue::Null);
        assert_eq!(excel_to_cell(&Data::Empty), CellValue::Null);
        assert_eq!(excel_to_cell(&Data::Error(CellErrorType::NA)), CellValue::Null);
        assert_eq!(excel_to_cell(&Data::Int(7)), CellValue::Integer(7));
        assert_eq!(excel_to_cell(&Data::Float(3.0)), CellValue::Float(3.0));
        assert_eq!(excel_to_cell(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(
            excel_to_cell(&Data::DateTimeIso("2023-03-01".into())),
            CellValue::String("2023-03-01".into())
        );
    }

    #[test]
    fn spreadsheet_rows_become_articles() {
        let sheet: Vec<Vec<Data>> = vec![
            vec![
                Data::String("No".into()),
                Data::String("Judul_Berita".into()),
                Data::String("Bulan".into()),
                Data::Empty,
            ],
            vec![
                Data::Float(1.0),
                Data::String("Polres amankan pelaku begal".into()),
                Data::Float(3.0),
                Data::Empty,
            ],
            vec![Data::Empty, Data::String(" ".into()), Data::Empty, Data::Empty],
            vec![
                Data::Float(2.0),
                Data::String("Kebun warga terendam".into()),
                Data::Error(CellErrorType::Ref),
            ],
        ];
        let table = sheet_to_table(sheet.iter().map(Vec::as_slice)).unwrap();
        let ds = into_dataset(table, Path::new("berita.xlsx")).unwrap();

        assert_eq!(ds.column_names, vec!["No", "Judul_Berita", "Bulan", "column_3"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.articles[0].category, Category::Crime);
        assert_eq!(ds.articles[0].month.as_ref().and_then(|m| m.calendar_index()), Some(3));
        assert_eq!(ds.articles[0].fields["No"].to_string(), "1");
        assert_eq!(ds.articles[1].category, Category::Social);
        assert!(ds.articles[1].month.is_none());
        assert_eq!(ds.articles[1].fields["column_3"], CellValue::Null);
    }

    #[test]
    fn empty_sheet_is_an_error() {
        let sheet: Vec<Vec<Data>> = Vec::new();
        let err = sheet_to_table(sheet.iter().map(Vec::as_slice)).err().unwrap();
        assert!(matches!(err.downcast_ref::<LoadError>(), Some(LoadError::EmptyWorkbook)));
    }

    #[test]
    fn json_records_load_with_union_of_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "b.json",
            r#"[
                {"Judul_Berita": "Dokter keliling desa", "Bulan": "Mei"},
                {"Judul_Berita": "Harga pupuk naik", "Bulan": null, "Halaman": 4}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.articles[0].category, Category::Health);
        assert_eq!(ds.articles[1].category, Category::FloraFauna);
        assert!(ds.articles[1].month.is_none());
        assert_eq!(ds.articles[0].fields["Halaman"], CellValue::Null);
        assert!(ds.column_names.contains(&"Halaman".to_string()));
    }

    #[test]
    fn json_must_be_an_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "b.json", r#"{"Judul_Berita": "x"}"#);
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn parquet_table_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("b.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new("Judul_Berita", DataType::Utf8, false),
            Field::new("Bulan", DataType::Utf8, true),
            Field::new("Halaman", DataType::Int64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["Begal beraksi lagi", "UMKM naik kelas"])),
                Arc::new(StringArray::from(vec![Some("Juli"), None])),
                Arc::new(Int64Array::from(vec![1, 2])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.column_names, vec!["Judul_Berita", "Bulan", "Halaman"]);
        assert_eq!(ds.articles[0].category, Category::Crime);
        assert_eq!(ds.articles[1].category, Category::Economy);
        assert!(ds.articles[1].month.is_none());
        assert_eq!(ds.articles[1].fields["Halaman"], CellValue::Integer(2));
    }
}
