use anyhow::Context;
use clap::Parser;
use orbit_map::utils::logger;
use orbit_map::{CliConfig, LocalStorage, OrbitEngine, Settings};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting orbit-map");
    tracing::debug!("CLI args: {:?}", args);

    // 合併設定檔與命令列
    let settings = match Settings::resolve(&args) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let engine = OrbitEngine::new(LocalStorage::default(), settings);

    match engine.run() {
        Ok(report) => {
            tracing::debug!(
                "Direct orbits in map: {}, indirect from '{}': {}",
                report.direct_orbits,
                report.center,
                report.indirect_orbits()
            );
            println!("{}", report.summary_line());
        }
        Err(e) => {
            tracing::error!(
                "❌ Orbit count failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    std::io::Write::flush(&mut std::io::stdout()).context("failed to flush stdout")?;
    Ok(())
}
