pub mod counter;
pub mod engine;
pub mod graph;
pub mod parser;

pub use crate::domain::model::{OrbitMap, OrbitPair, OrbitReport};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
