pub mod cli;
pub mod toml_config;

use crate::core::counter::DEFAULT_CENTER;
use crate::core::parser::DEFAULT_DELIMITER;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT_PATH: &str = "data.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "orbit-map")]
#[command(about = "Count the direct and indirect orbits in an orbit map")]
pub struct CliConfig {
    /// Body to start counting from [default: COM]
    pub center: Option<String>,

    /// Orbit map file, one CENTER)SATELLITE per line [default: data.txt]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Character separating center and satellite [default: )]
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Skip the cycle check before counting
    #[arg(long)]
    pub no_cycle_check: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// 合併後的最終設定：預設值 < TOML 檔 < 命令列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: String,
    pub center: String,
    pub delimiter: char,
    pub cycle_check: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            center: DEFAULT_CENTER.to_string(),
            delimiter: DEFAULT_DELIMITER,
            cycle_check: true,
        }
    }
}

impl Settings {
    pub fn merge_toml(mut self, file: &TomlConfig) -> Result<Self> {
        file.validate()?;

        if let Some(path) = file.input_path() {
            self.input_path = path.to_string();
        }
        if let Some(delimiter) = file.delimiter()? {
            self.delimiter = delimiter;
        }
        if let Some(center) = file.center() {
            self.center = center.to_string();
        }
        if let Some(cycle_check) = file.cycle_check() {
            self.cycle_check = cycle_check;
        }

        Ok(self)
    }

    #[cfg(feature = "cli")]
    pub fn merge_cli(mut self, args: &CliConfig) -> Result<Self> {
        if let Some(path) = &args.input {
            self.input_path = path.clone();
        }
        if let Some(raw) = &args.delimiter {
            self.delimiter = validation::parse_delimiter("--delimiter", raw)?;
        }
        if let Some(center) = &args.center {
            self.center = center.clone();
        }
        if args.no_cycle_check {
            self.cycle_check = false;
        }

        Ok(self)
    }

    /// 依序套用設定檔 (若有指定) 與命令列參數
    #[cfg(feature = "cli")]
    pub fn resolve(args: &CliConfig) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(path) = &args.config {
            tracing::info!("Loading configuration from: {}", path);
            settings = settings.merge_toml(&TomlConfig::from_file(path)?)?;
        }

        let settings = settings.merge_cli(args)?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input_path)?;
        validation::validate_delimiter("delimiter", self.delimiter)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn center(&self) -> &str {
        &self.center
    }

    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn cycle_check(&self) -> bool {
        self.cycle_check
    }
}
