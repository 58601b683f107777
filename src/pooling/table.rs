use std::str::FromStr;

use anyhow::{Result, bail};

use crate::pooling::{DEFAULT_FINAL_VOLUME, PoolInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolField {
    Molarity,
    Volume,
    Samples,
    MeasuredConcentration,
}

impl FromStr for PoolField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "molarity" => Ok(Self::Molarity),
            "volume" => Ok(Self::Volume),
            "samples" => Ok(Self::Samples),
            "measured_concentration" | "measuredconcentration" | "measured" => {
                Ok(Self::MeasuredConcentration)
            }
            other => bail!("unknown pool field '{}'", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoolTable {
    pools: Vec<PoolInput>,
}

impl PoolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pools(pools: Vec<PoolInput>) -> Result<Self> {
        let mut table = Self::new();
        for pool in pools {
            table.insert(pool)?;
        }
        Ok(table)
    }

    pub fn default_pools() -> Self {
        Self {
            pools: vec![
                PoolInput::new(1, 300.0, 393.3, 126).with_measured(96.11),
                PoolInput::new(2, 100.0, 488.6, 196).with_measured(40.11),
                PoolInput::new(3, 50.0, 149.7, 39).with_measured(13.03),
            ],
        }
    }

    pub fn insert(&mut self, pool: PoolInput) -> Result<()> {
        if self.get(pool.id).is_some() {
            bail!("duplicate pool id {}", pool.id);
        }
        self.pools.push(pool);
        Ok(())
    }

    pub fn next_id(&self) -> u32 {
        self.pools.iter().map(|p| p.id).max().map_or(1, |id| id + 1)
    }

    pub fn add_pool(&mut self) -> u32 {
        let id = self.next_id();
        self.pools.push(PoolInput::empty(id));
        id
    }

    /// Removes a pool by id. The last remaining pool is never removed.
    pub fn remove_pool(&mut self, id: u32) -> bool {
        if self.pools.len() <= 1 {
            return false;
        }
        let before = self.pools.len();
        self.pools.retain(|p| p.id != id);
        self.pools.len() != before
    }

    pub fn set_field(&mut self, id: u32, field: PoolField, raw: &str) -> bool {
        let Some(pool) = self.pools.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        match field {
            PoolField::Molarity => pool.molarity = parse_lenient_f64(raw),
            PoolField::Volume => pool.volume = parse_lenient_f64(raw),
            PoolField::Samples => pool.samples = parse_lenient_u32(raw),
            PoolField::MeasuredConcentration => {
                pool.measured_concentration = parse_lenient_f64(raw)
            }
        }
        true
    }

    pub fn get(&self, id: u32) -> Option<&PoolInput> {
        self.pools.iter().find(|p| p.id == id)
    }

    pub fn pools(&self) -> &[PoolInput] {
        &self.pools
    }

    pub fn into_pools(self) -> Vec<PoolInput> {
        self.pools
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

pub fn parse_lenient_f64(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

pub fn parse_lenient_u32(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<u32>() {
        return v;
    }
    let v = parse_lenient_f64(trimmed);
    if v >= 1.0 && v <= u32::MAX as f64 {
        v.trunc() as u32
    } else {
        0
    }
}

pub fn parse_final_volume(raw: &str) -> f64 {
    let v = parse_lenient_f64(raw);
    if v == 0.0 { DEFAULT_FINAL_VOLUME } else { v }
}
