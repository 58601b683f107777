use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::pooling::validate::validate_pools;

pub struct Stage2Validate;

impl Stage2Validate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Validate {
    fn name(&self) -> &'static str {
        "stage2_validate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let issues = validate_pools(ctx.table.pools(), &ctx.options);
        for issue in &issues {
            warn!(pool_id = ?issue.pool_id, global = issue.is_global(), "{}", issue);
        }
        if ctx.strict && !issues.is_empty() {
            let listed: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
            bail!("pool table rejected: {}", listed.join("; "));
        }
        ctx.warnings.extend(issues.iter().map(|i| i.to_string()));
        info!(issues = issues.len(), "pool_table_validated");
        ctx.issues = issues;
        Ok(())
    }
}
