use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::pooling::compute;

pub struct Stage3Compute;

impl Stage3Compute {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Compute {
    fn name(&self) -> &'static str {
        "stage3_compute"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let outcome = compute(ctx.table.pools(), &ctx.options);
        if let Some(summary) = &outcome.summary {
            info!(
                pools = outcome.results.len(),
                total_samples = summary.total_samples,
                nm_per_sample = summary.nm_per_sample,
                "pooling_volumes_ready"
            );
        } else {
            info!("no pools to compute");
        }
        ctx.outcome = Some(outcome);
        Ok(())
    }
}
