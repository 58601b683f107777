use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;

use anyhow::Result;
use flate2::read::GzDecoder;

use crate::schema::v1::PoolcalcV1;

pub mod json_writer;
pub mod pools;
pub mod summary;
pub mod tsv_writer;

pub fn write_json(path: &Path, report: &PoolcalcV1) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

pub(crate) fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    let gz = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    if gz {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(file))
    }
}
