use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::pooling::flags::{compute_usage_flags, usage_notes};

pub struct Stage4Flags;

impl Stage4Flags {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Flags {
    fn name(&self) -> &'static str {
        "stage4_flags"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let outcome = ctx
            .outcome
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("pooling results missing"))?;
        let flags = compute_usage_flags(outcome, &ctx.options);
        for flag in flags.iter().filter(|f| f.fired) {
            warn!(flag = %flag.name, details = ?flag.details, "usage_flag_fired");
        }
        info!(
            fired = flags.iter().filter(|f| f.fired).count(),
            "usage_flags_ready"
        );
        ctx.usage_flags = flags;
        ctx.notes = usage_notes(&ctx.options);
        Ok(())
    }
}
