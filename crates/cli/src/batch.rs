//! CSV batch mode: read `a,b,c` columns with polars, write `a,b,c,s,area,valid`.

use anyhow::{Context, Result};
use heron::prelude::*;
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Row counts reported after a batch run.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub rows: usize,
    pub valid: usize,
    pub invalid: usize,
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().collect())
}

pub fn run(input: &Path, out: &Path) -> Result<BatchStats> {
    tracing::info!(input = %input.display(), out = %out.display(), "batch");
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", input.display()))?;
    let (a, b, c) = (
        column_f64(&df, "a")?,
        column_f64(&df, "b")?,
        column_f64(&df, "c")?,
    );

    let mut stats = BatchStats {
        rows: df.height(),
        ..BatchStats::default()
    };
    let mut s_col = Vec::with_capacity(stats.rows);
    let mut area_col = Vec::with_capacity(stats.rows);
    let mut valid_col = Vec::with_capacity(stats.rows);
    for i in 0..stats.rows {
        let r = match (a[i], b[i], c[i]) {
            (Some(a), Some(b), Some(c)) => validate(SideLengths::new(a, b, c), InputMode::Numeric)
                .ok()
                .map(|v| compute(&v)),
            _ => None,
        };
        s_col.push(r.map(|r| r.semi_perimeter));
        area_col.push(r.map(|r| r.area));
        valid_col.push(r.is_some());
        if r.is_some() {
            stats.valid += 1;
        } else {
            stats.invalid += 1;
        }
    }

    let mut result = df!(
        "a" => a,
        "b" => b,
        "c" => c,
        "s" => s_col,
        "area" => area_col,
        "valid" => valid_col
    )?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file).finish(&mut result)?;
    tracing::info!(rows = stats.rows, valid = stats.valid, "batch_done");
    Ok(stats)
}
