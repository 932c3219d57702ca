use crate::core::counter::{count_orbits, find_cycle};
use crate::core::graph::build_orbit_map;
use crate::core::parser::parse_orbit_pairs;
use crate::core::{ConfigProvider, OrbitReport, Storage};
use crate::utils::error::{OrbitError, Result};

pub struct OrbitEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> OrbitEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn run(&self) -> Result<OrbitReport> {
        let center = self.config.center();
        let delimiter = self.config.delimiter();

        tracing::info!("Reading orbit map from {}", self.config.input_path());
        let lines = self.storage.read_lines(self.config.input_path())?;
        tracing::debug!("Read {} lines", lines.len());

        let pairs = parse_orbit_pairs(&lines, delimiter)?;
        let pair_count = pairs.len();
        tracing::info!("Parsed {} orbit pairs", pair_count);

        let map = build_orbit_map(pairs);

        if self.config.cycle_check() {
            if let Some(path) = find_cycle(&map, center) {
                return Err(OrbitError::CyclicOrbit { path });
            }
        } else {
            tracing::warn!("Cycle check disabled; cyclic input will not terminate");
        }

        if !map.contains(center) {
            tracing::warn!("Center '{}' has no satellites in the map", center);
        }

        let report = OrbitReport {
            center: center.to_string(),
            pair_count,
            body_count: map.bodies().len(),
            direct_orbits: map.direct_orbit_count(),
            total_orbits: count_orbits(&map, center),
        };

        tracing::info!(
            "Counted {} orbits from '{}' ({} bodies, {} direct orbits in map)",
            report.total_orbits,
            report.center,
            report.body_count,
            report.direct_orbits
        );

        Ok(report)
    }
}
