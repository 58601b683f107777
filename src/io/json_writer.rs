use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::{Ctx, report_options};
use crate::pooling::PoolResult;
use crate::schema::v1::{FinalPool, InputMeta, Issue, PoolRecord, PoolcalcV1, UsageFlag};

pub fn build_report(ctx: &Ctx) -> Result<PoolcalcV1> {
    let outcome = ctx.outcome.as_ref().context("pooling results missing")?;

    let input_meta = InputMeta {
        source: ctx.source_label(),
        n_pools: outcome.results.len() as u64,
        excluded: ctx.excluded.clone(),
    };

    let pools = outcome.results.iter().map(pool_record).collect();

    let final_pool = outcome.summary.as_ref().map(|s| FinalPool {
        total_volume: s.total_volume,
        total_samples: s.total_samples,
        nm_per_sample: finite(s.nm_per_sample),
    });

    let issues = ctx
        .issues
        .iter()
        .map(|i| Issue {
            pool_id: i.pool_id,
            message: i.to_string(),
            global: i.is_global(),
        })
        .collect();

    let usage_flags = ctx
        .usage_flags
        .iter()
        .map(|f| UsageFlag {
            name: f.name.clone(),
            fired: f.fired,
            threshold: Some(f.threshold.clone()),
            details: f.details.clone(),
        })
        .collect();

    Ok(PoolcalcV1 {
        tool: "kira-poolcalc".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        options: report_options(&ctx.options),
        input_meta,
        pools,
        final_pool,
        issues,
        usage_flags,
        notes: ctx.notes.clone(),
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    super::write_json(path, &report)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn pool_record(r: &PoolResult) -> PoolRecord {
    PoolRecord {
        id: r.input.id,
        molarity: r.input.molarity,
        volume: r.input.volume,
        samples: r.input.samples,
        measured_concentration: if r.input.measured_concentration != 0.0 {
            Some(r.input.measured_concentration)
        } else {
            None
        },
        total_nm: finite(r.total_nm),
        actual_concentration: finite(r.actual_concentration),
        conc_ratio: finite(r.conc_ratio),
        sample_ratio: finite(r.sample_ratio),
        final_ratio: finite(r.final_ratio),
        initial_volume: finite(r.initial_volume),
        max_usage_volume: finite(r.max_usage_volume),
        limiting: r.limiting,
        final_volume: finite(r.final_volume),
        percent_used: finite(r.percent_used),
        total_nm_added: finite(r.total_nm_added),
    }
}

fn finite(v: f64) -> Option<f64> {
    if v.is_finite() { Some(v) } else { None }
}
