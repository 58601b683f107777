pub mod engine;
pub mod flags;
pub mod table;
pub mod validate;

pub use engine::compute;
pub use table::PoolTable;

pub const BASE_VOLUME: f64 = 100.0;

pub const DEFAULT_FINAL_VOLUME: f64 = 400.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PoolInput {
    pub id: u32,
    pub molarity: f64,
    pub volume: f64,
    pub samples: u32,
    /// Lab-measured concentration (nM/µl); 0 means "not measured".
    pub measured_concentration: f64,
}

impl PoolInput {
    pub fn new(id: u32, molarity: f64, volume: f64, samples: u32) -> Self {
        Self {
            id,
            molarity,
            volume,
            samples,
            measured_concentration: 0.0,
        }
    }

    pub fn with_measured(mut self, concentration: f64) -> Self {
        self.measured_concentration = concentration;
        self
    }

    pub fn empty(id: u32) -> Self {
        Self::new(id, 0.0, 0.0, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolingOptions {
    pub desired_final_volume: f64,
    pub maximize_volumes: bool,
    pub use_measured_concentrations: bool,
}

impl Default for PoolingOptions {
    fn default() -> Self {
        Self {
            desired_final_volume: DEFAULT_FINAL_VOLUME,
            maximize_volumes: true,
            use_measured_concentrations: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoolResult {
    pub input: PoolInput,
    pub total_nm: f64,
    pub actual_concentration: f64,
    pub conc_ratio: f64,
    pub sample_ratio: f64,
    pub final_ratio: f64,
    pub initial_volume: f64,
    pub max_usage_volume: f64,
    pub limiting: bool,
    pub final_volume: f64,
    pub percent_used: f64,
    pub total_nm_added: f64,
}

impl PoolResult {
    pub fn id(&self) -> u32 {
        self.input.id
    }

    pub fn nm_per_sample(&self) -> f64 {
        self.total_nm_added / self.input.samples as f64
    }

    pub fn is_finite(&self) -> bool {
        [
            self.total_nm,
            self.actual_concentration,
            self.conc_ratio,
            self.sample_ratio,
            self.final_ratio,
            self.initial_volume,
            self.max_usage_volume,
            self.final_volume,
            self.percent_used,
            self.total_nm_added,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalPoolSummary {
    pub total_volume: f64,
    pub total_samples: u64,
    pub nm_per_sample: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoolingOutcome {
    pub results: Vec<PoolResult>,
    pub summary: Option<FinalPoolSummary>,
}

impl PoolingOutcome {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
