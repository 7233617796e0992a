//! Runtime configuration, read from `SPECTRUM_*` environment variables.
//!
//! - `SPECTRUM_INPUT`: allocation result JSON (default `allocation_result.json`)
//! - `SPECTRUM_OUTPUT_DIR`: where reports are written (default `.`)
//! - `SPECTRUM_TOTAL_CAPACITY`: band capacity in MHz (default 1200)
//! - `SPECTRUM_TOP_N`: size of the top-regions view (default 5)
//! - `SPECTRUM_GEO_KEYS`: `code` or `iso` location keys for the map (default `code`)

use crate::error::{ReportError, Result};
use crate::regions;
use crate::utilization::DEFAULT_TOTAL_CAPACITY;
use std::path::PathBuf;

pub const INPUT_VAR: &str = "SPECTRUM_INPUT";
pub const OUTPUT_DIR_VAR: &str = "SPECTRUM_OUTPUT_DIR";
pub const TOTAL_CAPACITY_VAR: &str = "SPECTRUM_TOTAL_CAPACITY";
pub const TOP_N_VAR: &str = "SPECTRUM_TOP_N";
pub const GEO_KEYS_VAR: &str = "SPECTRUM_GEO_KEYS";

/// Identifier scheme for choropleth locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeoKeys {
    /// Region codes exactly as the allocation service emits them.
    #[default]
    Code,
    /// ISO 3166-2 subdivision codes.
    Iso,
}

impl GeoKeys {
    pub fn key(&self, code: &str) -> String {
        match self {
            GeoKeys::Code => code.to_string(),
            GeoKeys::Iso => regions::iso_code(code),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub total_capacity: f64,
    pub top_n: usize,
    pub geo_keys: GeoKeys,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("allocation_result.json"),
            output_dir: PathBuf::from("."),
            total_capacity: DEFAULT_TOTAL_CAPACITY,
            top_n: 5,
            geo_keys: GeoKeys::Code,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset or blank keys
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Config::default();

        if let Some(v) = get(INPUT_VAR) {
            config.input_path = PathBuf::from(v);
        }
        if let Some(v) = get(OUTPUT_DIR_VAR) {
            config.output_dir = PathBuf::from(v);
        }
        if let Some(v) = get(TOTAL_CAPACITY_VAR) {
            config.total_capacity = parse_capacity(&v)?;
        }
        if let Some(v) = get(TOP_N_VAR) {
            config.top_n = v.parse().map_err(|e| ReportError::Config {
                key: TOP_N_VAR,
                value: v.clone(),
                reason: format!("{}", e),
            })?;
        }
        if let Some(v) = get(GEO_KEYS_VAR) {
            config.geo_keys = match v.to_ascii_lowercase().as_str() {
                "code" => GeoKeys::Code,
                "iso" => GeoKeys::Iso,
                _ => {
                    return Err(ReportError::Config {
                        key: GEO_KEYS_VAR,
                        value: v,
                        reason: "expected `code` or `iso`".to_string(),
                    })
                }
            };
        }
        Ok(config)
    }
}

fn parse_capacity(v: &str) -> Result<f64> {
    let invalid = |reason: &str| ReportError::Config {
        key: TOTAL_CAPACITY_VAR,
        value: v.to_string(),
        reason: reason.to_string(),
    };
    let capacity: f64 = v.parse().map_err(|_| invalid("not a number"))?;
    if !capacity.is_finite() || capacity < 0.0 {
        return Err(invalid("must be a finite, non-negative number of MHz"));
    }
    Ok(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.total_capacity, 1200.0);
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn overrides() {
        let config = from_pairs(&[
            (TOTAL_CAPACITY_VAR, "960.5"),
            (TOP_N_VAR, "3"),
            (GEO_KEYS_VAR, "ISO"),
            (OUTPUT_DIR_VAR, "out"),
            (INPUT_VAR, " run.json "),
        ])
        .unwrap();
        assert_eq!(config.total_capacity, 960.5);
        assert_eq!(config.top_n, 3);
        assert_eq!(config.geo_keys, GeoKeys::Iso);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.input_path, PathBuf::from("run.json"));
    }

    #[test]
    fn blank_value_keeps_default() {
        let config = from_pairs(&[(TOTAL_CAPACITY_VAR, "  ")]).unwrap();
        assert_eq!(config.total_capacity, DEFAULT_TOTAL_CAPACITY);
    }

    #[test]
    fn zero_capacity_is_allowed() {
        let config = from_pairs(&[(TOTAL_CAPACITY_VAR, "0")]).unwrap();
        assert_eq!(config.total_capacity, 0.0);
    }

    #[test]
    fn rejects_bad_values() {
        for (key, value) in [
            (TOTAL_CAPACITY_VAR, "lots"),
            (TOTAL_CAPACITY_VAR, "-5"),
            (TOTAL_CAPACITY_VAR, "inf"),
            (TOP_N_VAR, "-1"),
            (GEO_KEYS_VAR, "name"),
        ] {
            let err = from_pairs(&[(key, value)]).unwrap_err();
            assert!(
                matches!(err, ReportError::Config { key: k, .. } if k == key),
                "{} = {} should be rejected",
                key,
                value
            );
        }
    }

    #[test]
    fn geo_keys_mapping() {
        assert_eq!(GeoKeys::Code.key("CG"), "CG");
        assert_eq!(GeoKeys::Iso.key("CG"), "IN-CT");
    }
}
