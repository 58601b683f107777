use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let outcome = ctx.outcome.as_ref().context("pooling results missing")?;

    writeln!(
        w,
        "pool_id\tmolarity\tvolume\tsamples\tactual_concentration\tconc_ratio\tsample_ratio\tfinal_ratio\tfinal_volume\tpercent_used\ttotal_nM_added\tlimiting"
    )?;
    for r in &outcome.results {
        writeln!(
            w,
            "{}\t{:.6}\t{:.6}\t{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{}",
            r.input.id,
            r.input.molarity,
            r.input.volume,
            r.input.samples,
            r.actual_concentration,
            r.conc_ratio,
            r.sample_ratio,
            r.final_ratio,
            r.final_volume,
            r.percent_used,
            r.total_nm_added,
            r.limiting
        )?;
    }
    w.flush()?;

    Ok(())
}
