use crate::math::reduce::{min_nan, sum};
use crate::pooling::{
    BASE_VOLUME, FinalPoolSummary, PoolInput, PoolResult, PoolingOptions, PoolingOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConcentration {
    pub total_nm: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceValues {
    pub lowest_concentration: f64,
    pub lowest_samples: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    pub conc_ratio: f64,
    pub sample_ratio: f64,
    pub final_ratio: f64,
    pub initial_volume: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaximizedVolumes {
    pub volumes: Vec<f64>,
    pub utilization: Vec<f64>,
    pub min_utilization: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaledVolumes {
    pub volumes: Vec<f64>,
    pub scale_factor: f64,
}

pub fn compute(pools: &[PoolInput], options: &PoolingOptions) -> PoolingOutcome {
    if pools.is_empty() {
        return PoolingOutcome::default();
    }

    let concentrations = resolve_concentrations(pools, options.use_measured_concentrations);
    let refs = reference_values(pools, &concentrations);
    let ratios: Vec<Ratios> = pools
        .iter()
        .zip(&concentrations)
        .map(|(pool, conc)| compute_ratios(pool, conc.actual, &refs))
        .collect();
    let initial: Vec<f64> = ratios.iter().map(|r| r.initial_volume).collect();

    let (max_usage, limiting) = if options.maximize_volumes {
        let capacities: Vec<f64> = pools.iter().map(|p| p.volume).collect();
        let maximized = maximize_usage(&capacities, &initial);
        let limiting: Vec<bool> = maximized
            .utilization
            .iter()
            .map(|&u| u == maximized.min_utilization)
            .collect();
        (maximized.volumes, limiting)
    } else {
        (initial, vec![false; pools.len()])
    };

    let scaled = scale_to_target(&max_usage, options.desired_final_volume);

    let mut results = Vec::with_capacity(pools.len());
    for i in 0..pools.len() {
        let pool = &pools[i];
        let final_volume = scaled.volumes[i];
        let actual = concentrations[i].actual;
        results.push(PoolResult {
            input: pool.clone(),
            total_nm: concentrations[i].total_nm,
            actual_concentration: actual,
            conc_ratio: ratios[i].conc_ratio,
            sample_ratio: ratios[i].sample_ratio,
            final_ratio: ratios[i].final_ratio,
            initial_volume: ratios[i].initial_volume,
            max_usage_volume: max_usage[i],
            limiting: limiting[i],
            final_volume,
            percent_used: final_volume / pool.volume * 100.0,
            total_nm_added: actual * final_volume,
        });
    }

    let summary = summarize(&results, options.desired_final_volume);
    PoolingOutcome {
        results,
        summary: Some(summary),
    }
}

pub fn resolve_concentration(pool: &PoolInput, use_measured: bool) -> ResolvedConcentration {
    let total_nm = pool.molarity * pool.samples as f64;
    let actual = if use_measured && pool.measured_concentration != 0.0 {
        pool.measured_concentration
    } else {
        total_nm / pool.volume
    };
    ResolvedConcentration { total_nm, actual }
}

pub fn resolve_concentrations(
    pools: &[PoolInput],
    use_measured: bool,
) -> Vec<ResolvedConcentration> {
    pools
        .iter()
        .map(|p| resolve_concentration(p, use_measured))
        .collect()
}

pub fn reference_values(
    pools: &[PoolInput],
    concentrations: &[ResolvedConcentration],
) -> ReferenceValues {
    ReferenceValues {
        lowest_concentration: min_nan(concentrations.iter().map(|c| c.actual)),
        lowest_samples: min_nan(pools.iter().map(|p| p.samples as f64)),
    }
}

pub fn compute_ratios(pool: &PoolInput, concentration: f64, refs: &ReferenceValues) -> Ratios {
    let conc_ratio = refs.lowest_concentration / concentration;
    let sample_ratio = pool.samples as f64 / refs.lowest_samples;
    let final_ratio = conc_ratio * sample_ratio;
    Ratios {
        conc_ratio,
        sample_ratio,
        final_ratio,
        initial_volume: final_ratio * BASE_VOLUME,
    }
}

pub fn maximize_usage(capacities: &[f64], initial: &[f64]) -> MaximizedVolumes {
    let utilization: Vec<f64> = capacities
        .iter()
        .zip(initial)
        .map(|(cap, init)| cap / init)
        .collect();
    let min_utilization = min_nan(utilization.iter().copied());
    let volumes = initial.iter().map(|v| v * min_utilization).collect();
    MaximizedVolumes {
        volumes,
        utilization,
        min_utilization,
    }
}

pub fn scale_to_target(volumes: &[f64], desired_final_volume: f64) -> ScaledVolumes {
    let total = sum(volumes.iter().copied());
    let scale_factor = desired_final_volume / total;
    ScaledVolumes {
        volumes: volumes.iter().map(|v| v * scale_factor).collect(),
        scale_factor,
    }
}

pub fn summarize(results: &[PoolResult], desired_final_volume: f64) -> FinalPoolSummary {
    let total_nm = sum(results.iter().map(|r| r.actual_concentration * r.final_volume));
    let total_samples: u64 = results.iter().map(|r| r.input.samples as u64).sum();
    FinalPoolSummary {
        total_volume: desired_final_volume,
        total_samples,
        nm_per_sample: total_nm / total_samples as f64,
    }
}
