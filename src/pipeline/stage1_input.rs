use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::ctx::{Ctx, InputFormat};
use crate::io::pools;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let (mut table, warnings) = match (&ctx.input, ctx.input_format) {
            (None, _) | (_, InputFormat::Builtin) => (pools::load_builtin_v1()?, Vec::new()),
            (Some(path), format) => pools::load_pool_table(path, format)?,
        };
        for warning in &warnings {
            warn!(%warning, "lenient_parse");
        }
        ctx.warnings.extend(warnings);

        for &id in &ctx.excluded {
            if table.get(id).is_none() {
                bail!("cannot exclude pool {}: no such pool", id);
            }
            if !table.remove_pool(id) {
                bail!("cannot exclude pool {}: at least one pool must remain", id);
            }
        }

        info!(
            pools = table.len(),
            excluded = ctx.excluded.len(),
            "pool_table_loaded"
        );
        ctx.report.input_meta.source = ctx.source_label();
        ctx.report.input_meta.n_pools = table.len() as u64;
        ctx.report.input_meta.excluded = ctx.excluded.clone();
        ctx.table = table;
        Ok(())
    }
}
