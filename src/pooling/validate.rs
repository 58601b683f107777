use std::collections::BTreeSet;
use std::fmt;

use crate::pooling::engine::resolve_concentration;
use crate::pooling::{PoolInput, PoolingOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    EmptyTable,
    NonPositiveFinalVolume,
    DuplicateId,
    NegativeValue(&'static str),
    NonFiniteValue(&'static str),
    ZeroVolume,
    ZeroSamples,
    ZeroConcentration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoolIssue {
    pub pool_id: Option<u32>,
    pub kind: IssueKind,
}

impl PoolIssue {
    fn table(kind: IssueKind) -> Self {
        Self {
            pool_id: None,
            kind,
        }
    }

    fn pool(id: u32, kind: IssueKind) -> Self {
        Self {
            pool_id: Some(id),
            kind,
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(
            self.kind,
            IssueKind::ZeroSamples | IssueKind::ZeroConcentration | IssueKind::EmptyTable
        )
    }
}

impl fmt::Display for PoolIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = self.pool_id {
            write!(f, "pool {}: ", id)?;
        }
        match self.kind {
            IssueKind::EmptyTable => write!(f, "no pools to compute"),
            IssueKind::NonPositiveFinalVolume => {
                write!(f, "desired final volume must be positive")
            }
            IssueKind::DuplicateId => write!(f, "duplicate pool id"),
            IssueKind::NegativeValue(field) => write!(f, "{} is negative", field),
            IssueKind::NonFiniteValue(field) => write!(f, "{} is not finite", field),
            IssueKind::ZeroVolume => write!(f, "volume is zero (concentration undefined)"),
            IssueKind::ZeroSamples => {
                write!(f, "sample count is zero (all ratios become undefined)")
            }
            IssueKind::ZeroConcentration => {
                write!(f, "concentration is zero (all ratios become undefined)")
            }
        }
    }
}

pub fn validate_pools(pools: &[PoolInput], options: &PoolingOptions) -> Vec<PoolIssue> {
    let mut issues = Vec::new();
    if pools.is_empty() {
        issues.push(PoolIssue::table(IssueKind::EmptyTable));
    }
    if !options.desired_final_volume.is_finite() {
        issues.push(PoolIssue::table(IssueKind::NonFiniteValue(
            "desired final volume",
        )));
    } else if options.desired_final_volume <= 0.0 {
        issues.push(PoolIssue::table(IssueKind::NonPositiveFinalVolume));
    }

    let mut seen = BTreeSet::new();
    for pool in pools {
        if !seen.insert(pool.id) {
            issues.push(PoolIssue::pool(pool.id, IssueKind::DuplicateId));
        }
        let fields = [
            ("molarity", pool.molarity),
            ("volume", pool.volume),
            ("measured concentration", pool.measured_concentration),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                issues.push(PoolIssue::pool(pool.id, IssueKind::NonFiniteValue(name)));
            } else if value < 0.0 {
                issues.push(PoolIssue::pool(pool.id, IssueKind::NegativeValue(name)));
            }
        }
        if pool.volume == 0.0 {
            issues.push(PoolIssue::pool(pool.id, IssueKind::ZeroVolume));
        }
        if pool.samples == 0 {
            issues.push(PoolIssue::pool(pool.id, IssueKind::ZeroSamples));
        }
        if pool.volume != 0.0 && pool.samples != 0 {
            let conc = resolve_concentration(pool, options.use_measured_concentrations);
            if conc.actual == 0.0 {
                issues.push(PoolIssue::pool(pool.id, IssueKind::ZeroConcentration));
            }
        }
    }
    issues
}
