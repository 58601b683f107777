use anyhow::Result;

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let outcome = ctx
        .outcome
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("pooling results missing"))?;

    let mut out = String::new();
    out.push_str(&format!("kira-poolcalc v{}\n", version));
    out.push_str(&format!(
        "Input: {} pools ({}), final volume {:.2} µl, maximize={}, concentrations={}\n",
        outcome.results.len(),
        ctx.source_label(),
        ctx.options.desired_final_volume,
        ctx.options.maximize_volumes,
        ctx.concentration_label().to_ascii_lowercase()
    ));

    let Some(summary) = &outcome.summary else {
        out.push_str("No pools to compute\n");
        return Ok(out);
    };

    out.push_str(&format!(
        "{:>6}  {:>14}  {:>14}  {:>8}  {:>14}\n",
        "Pool",
        format!("{} nM/µl", ctx.concentration_label()),
        "Volume (µl)",
        "% used",
        "Total nM"
    ));
    for r in &outcome.results {
        let marker = if r.percent_used > 100.0 { " !" } else { "" };
        out.push_str(&format!(
            "{:>6}  {:>14.2}  {:>14.2}  {:>7.1}%  {:>14.2}{}\n",
            r.input.id,
            r.actual_concentration,
            r.final_volume,
            r.percent_used,
            r.total_nm_added,
            marker
        ));
    }

    out.push_str(&format!(
        "Final pool: {:.2} µl, {} samples, {:.4} nM per sample\n",
        summary.total_volume, summary.total_samples, summary.nm_per_sample
    ));

    for note in &ctx.notes {
        out.push_str(&format!("Note: {}\n", note));
    }

    let fired: Vec<String> = ctx
        .usage_flags
        .iter()
        .filter(|f| f.fired)
        .map(|f| match &f.details {
            Some(details) => format!("{} ({})", f.name, details),
            None => f.name.clone(),
        })
        .collect();
    if fired.is_empty() {
        out.push_str("Flags: none\n");
    } else {
        out.push_str(&format!("Flags: {}\n", fired.join(", ")));
    }

    Ok(out)
}
