use crate::pooling::{PoolingOptions, PoolingOutcome};

const EXHAUSTED_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct UsageFlag {
    pub name: String,
    pub fired: bool,
    pub threshold: String,
    pub details: Option<String>,
}

pub fn compute_usage_flags(outcome: &PoolingOutcome, options: &PoolingOptions) -> Vec<UsageFlag> {
    if outcome.is_empty() {
        return Vec::new();
    }
    vec![
        flag_over_capacity(outcome),
        flag_non_finite(outcome),
        flag_pool_exhausted(outcome, options),
    ]
}

pub fn usage_notes(options: &PoolingOptions) -> Vec<String> {
    let mut notes = Vec::new();
    if options.maximize_volumes {
        notes.push(
            "Volumes have been optimized to maximize usage of the original pools. \
             One or more pools will be completely used."
                .to_string(),
        );
    }
    if options.use_measured_concentrations {
        notes.push(
            "Calculations are based on user-provided measured concentrations \
             rather than calculated values."
                .to_string(),
        );
    }
    notes
}

fn flag_over_capacity(outcome: &PoolingOutcome) -> UsageFlag {
    let ids: Vec<u32> = outcome
        .results
        .iter()
        .filter(|r| r.percent_used > 100.0)
        .map(|r| r.id())
        .collect();
    UsageFlag {
        name: "over_capacity".to_string(),
        fired: !ids.is_empty(),
        threshold: "percent_used > 100".to_string(),
        details: pool_list(&ids),
    }
}

fn flag_non_finite(outcome: &PoolingOutcome) -> UsageFlag {
    let ids: Vec<u32> = outcome
        .results
        .iter()
        .filter(|r| !r.is_finite())
        .map(|r| r.id())
        .collect();
    UsageFlag {
        name: "non_finite".to_string(),
        fired: !ids.is_empty(),
        threshold: "any result is NaN or infinite".to_string(),
        details: pool_list(&ids),
    }
}

fn flag_pool_exhausted(outcome: &PoolingOutcome, options: &PoolingOptions) -> UsageFlag {
    let ids: Vec<u32> = if options.maximize_volumes {
        outcome
            .results
            .iter()
            .filter(|r| r.limiting && r.percent_used >= 100.0 - EXHAUSTED_TOLERANCE)
            .map(|r| r.id())
            .collect()
    } else {
        Vec::new()
    };
    UsageFlag {
        name: "pool_exhausted".to_string(),
        fired: !ids.is_empty(),
        threshold: format!("limiting pool percent_used >= 100 (tol {})", EXHAUSTED_TOLERANCE),
        details: pool_list(&ids),
    }
}

fn pool_list(ids: &[u32]) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    let joined: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    Some(format!("pools={}", joined.join(",")))
}
