use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::InputFormat;
use crate::pooling::table::{PoolField, parse_lenient_u32};
use crate::pooling::{PoolInput, PoolTable};

const COLUMNS: [PoolField; 4] = [
    PoolField::Molarity,
    PoolField::Volume,
    PoolField::Samples,
    PoolField::MeasuredConcentration,
];

pub fn load_builtin_v1() -> Result<PoolTable> {
    let content = include_str!("../../assets/pools/default_v1.tsv");
    let (table, _warnings) = parse_pool_table(content, '\t', "built-in v1")?;
    Ok(table)
}

pub fn load_pool_table(path: &Path, format: InputFormat) -> Result<(PoolTable, Vec<String>)> {
    let mut reader = super::open_maybe_gz(path)
        .with_context(|| format!("failed to open pool table {}", path.display()))?;
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .with_context(|| format!("failed to read pool table {}", path.display()))?;
    parse_pool_table(&content, format.delimiter(), &path.display().to_string())
}

pub fn parse_pool_table(
    content: &str,
    delimiter: char,
    source: &str,
) -> Result<(PoolTable, Vec<String>)> {
    let mut table = PoolTable::new();
    let mut warnings = Vec::new();
    let mut header_checked = false;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split(delimiter).map(str::trim).collect();
        if !header_checked {
            header_checked = true;
            if parts[0].eq_ignore_ascii_case("id") {
                continue;
            }
        }
        if parts.len() != 4 && parts.len() != 5 {
            bail!(
                "{}:{} malformed pool row (expected 4 or 5 columns, got {})",
                source,
                line_no,
                parts.len()
            );
        }

        let id = if parts[0].is_empty() {
            table.add_pool()
        } else {
            let id: u32 = parts[0].parse().with_context(|| {
                format!("{}:{} invalid pool id '{}'", source, line_no, parts[0])
            })?;
            table
                .insert(PoolInput::empty(id))
                .with_context(|| format!("{}:{}", source, line_no))?;
            id
        };

        for (field, raw) in COLUMNS.iter().zip(&parts[1..]) {
            if !raw.is_empty() && !is_numeric(raw) {
                warnings.push(format!(
                    "{}:{} pool {} non-numeric {:?} '{}' read as 0",
                    source, line_no, id, field, raw
                ));
            } else if *field == PoolField::Samples
                && !raw.is_empty()
                && raw.parse::<u32>().is_err()
            {
                warnings.push(format!(
                    "{}:{} pool {} samples '{}' is not a whole count, read as {}",
                    source,
                    line_no,
                    id,
                    raw,
                    parse_lenient_u32(raw)
                ));
            }
            table.set_field(id, *field, raw);
        }
    }

    Ok((table, warnings))
}

fn is_numeric(raw: &str) -> bool {
    raw.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
}
