use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcentrationSource {
    Calculated,
    Measured,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    pub desired_final_volume: f64,
    pub maximize_volumes: bool,
    pub concentration_source: ConcentrationSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub source: String,
    pub n_pools: u64,
    pub excluded: Vec<u32>,
}

/// Non-finite values are written as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolRecord {
    pub id: u32,
    pub molarity: f64,
    pub volume: f64,
    pub samples: u32,
    pub measured_concentration: Option<f64>,
    #[serde(rename = "total_nM")]
    pub total_nm: Option<f64>,
    pub actual_concentration: Option<f64>,
    pub conc_ratio: Option<f64>,
    pub sample_ratio: Option<f64>,
    pub final_ratio: Option<f64>,
    pub initial_volume: Option<f64>,
    pub max_usage_volume: Option<f64>,
    pub limiting: bool,
    pub final_volume: Option<f64>,
    pub percent_used: Option<f64>,
    #[serde(rename = "total_nM_added")]
    pub total_nm_added: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalPool {
    pub total_volume: f64,
    pub total_samples: u64,
    #[serde(rename = "nM_per_sample")]
    pub nm_per_sample: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub pool_id: Option<u32>,
    pub message: String,
    pub global: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageFlag {
    pub name: String,
    pub fired: bool,
    pub threshold: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolcalcV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub options: Options,
    pub input_meta: InputMeta,
    pub pools: Vec<PoolRecord>,
    pub final_pool: Option<FinalPool>,
    pub issues: Vec<Issue>,
    pub usage_flags: Vec<UsageFlag>,
    pub notes: Vec<String>,
}

impl PoolcalcV1 {
    pub fn empty(tool_version: &str, options: Options) -> Self {
        Self {
            tool: "kira-poolcalc".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            options,
            input_meta: InputMeta {
                source: String::new(),
                n_pools: 0,
                excluded: Vec::new(),
            },
            pools: Vec::new(),
            final_pool: None,
            issues: Vec::new(),
            usage_flags: Vec::new(),
            notes: Vec::new(),
        }
    }
}
