pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, Settings};

pub use crate::core::{
    counter::{count_orbits, find_cycle},
    engine::OrbitEngine,
    graph::build_orbit_map,
    parser::parse_orbit_pairs,
};
pub use domain::model::{OrbitMap, OrbitPair, OrbitReport};
pub use utils::error::{OrbitError, Result};
