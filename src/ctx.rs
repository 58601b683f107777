use std::path::{Path, PathBuf};

use crate::pooling::flags::UsageFlag;
use crate::pooling::validate::PoolIssue;
use crate::pooling::{PoolTable, PoolingOptions, PoolingOutcome};
use crate::schema::v1::{ConcentrationSource, Options, PoolcalcV1};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Builtin,
    Tsv,
    Csv,
}

impl InputFormat {
    pub fn detect(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::Builtin;
        };
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        if name.ends_with(".csv") {
            Self::Csv
        } else {
            Self::Tsv
        }
    }

    pub fn delimiter(&self) -> char {
        match self {
            Self::Csv => ',',
            Self::Builtin | Self::Tsv => '\t',
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub input: Option<PathBuf>,
    pub input_format: InputFormat,
    pub options: PoolingOptions,
    pub excluded: Vec<u32>,
    pub strict: bool,
    pub write_json: bool,
    pub write_tsv: bool,
    pub table: PoolTable,
    pub issues: Vec<PoolIssue>,
    pub outcome: Option<PoolingOutcome>,
    pub usage_flags: Vec<UsageFlag>,
    pub notes: Vec<String>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: PoolcalcV1,
}

impl Ctx {
    pub fn new(
        input: Option<PathBuf>,
        out_dir: PathBuf,
        options: PoolingOptions,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("poolcalc.json");
        let tsv_path = out_dir.join("poolcalc.tsv");
        let report = PoolcalcV1::empty(tool_version, report_options(&options));
        Self {
            input_format: InputFormat::detect(input.as_deref()),
            input,
            options,
            excluded: Vec::new(),
            strict: false,
            write_json,
            write_tsv,
            table: PoolTable::new(),
            issues: Vec::new(),
            outcome: None,
            usage_flags: Vec::new(),
            notes: Vec::new(),
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
            report,
        }
    }

    pub fn source_label(&self) -> String {
        match &self.input {
            Some(path) => path.display().to_string(),
            None => "built-in".to_string(),
        }
    }

    pub fn concentration_label(&self) -> &'static str {
        if self.options.use_measured_concentrations {
            "Measured"
        } else {
            "Calculated"
        }
    }
}

pub fn report_options(options: &PoolingOptions) -> Options {
    Options {
        desired_final_volume: options.desired_final_volume,
        maximize_volumes: options.maximize_volumes,
        concentration_source: if options.use_measured_concentrations {
            ConcentrationSource::Measured
        } else {
            ConcentrationSource::Calculated
        },
    }
}
