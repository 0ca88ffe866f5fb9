use std::sync::Arc;

use arrow::array::{Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

const SUBJECTS: &[&str] = &[
    "Polres Lampung Timur ringkus pengedar sabu",
    "Maling motor diamuk warga",
    "Tersangka penipuan arisan ditahan",
    "Bupati resmikan jalan desa",
    "KPU tetapkan daftar caleg",
    "DPRD bahas anggaran daerah",
    "Banjir rendam puluhan rumah",
    "Angin puting beliung robohkan rumah",
    "Harga pangan stabil jelang lebaran",
    "UMKM binaan ikuti pameran",
    "Dokter puskesmas tangani stunting",
    "Guru honorer terima insentif",
    "Sekolah rusak segera diperbaiki",
    "Pupuk subsidi langka di tingkat petani",
    "Gajah liar masuk kawasan konservasi",
    "Festival budaya meriahkan ulang tahun kabupaten",
    "Pengumuman libur nasional",
];

const PLACES: &[&str] = &["di Sukadana", "di Way Jepara", "di Labuhan Maringgai", "di Pekalongan", ""];

#[derive(Debug, Serialize)]
struct SampleRow {
    #[serde(rename = "No")]
    no: i64,
    #[serde(rename = "Judul_Berita")]
    title: String,
    #[serde(rename = "Bulan")]
    month: Option<&'static str>,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let rows: Vec<SampleRow> = (1..=240)
        .map(|no| {
            let subject = rng.pick(SUBJECTS);
            let place = rng.pick(PLACES);
            // Roughly one row in twenty has no month.
            let month = (rng.next_u64() % 20 != 0).then(|| *rng.pick(&MONTHS));
            SampleRow {
                no,
                title: format!("{subject} {place}").trim_end().to_string(),
                month,
            }
        })
        .collect();

    // CSV
    let csv_path = "sample_news.csv";
    let mut writer = csv::Writer::from_path(csv_path)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    // Parquet
    let schema = Arc::new(Schema::new(vec![
        Field::new("No", DataType::Int64, false),
        Field::new("Judul_Berita", DataType::Utf8, false),
        Field::new("Bulan", DataType::Utf8, true),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.no))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.title.as_str()))),
            Arc::new(StringArray::from(rows.iter().map(|r| r.month).collect::<Vec<_>>())),
        ],
    )?;

    let parquet_path = "sample_news.parquet";
    let file = std::fs::File::create(parquet_path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;

    println!("Wrote {} articles to {csv_path} and {parquet_path}", rows.len());
    Ok(())
}
