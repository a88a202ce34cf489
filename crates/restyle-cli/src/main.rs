mod cli;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use restyle_cache::TieredCache;
use restyle_common::RestyleError;
use restyle_config::schema::EngineConfig;
use restyle_config::{read_settings_file, FileResolver};
use restyle_css::{CompileReport, StyleCompiler};
use tracing_subscriber::EnvFilter;

use cli::Command;

fn main() -> ExitCode {
    let args = cli::parse();

    // Logs go to stderr; stdout carries the stylesheet.
    let log_directive = args.log_level.as_deref().unwrap_or("restyle=info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "restyle=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::debug!("Restyle v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = match restyle_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            EngineConfig::default()
        }
    };

    match run(args.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: EngineConfig) -> Result<(), RestyleError> {
    match command {
        Command::Compile { settings, report } => {
            let compiler = compiler_for(config, &settings)?;
            let (css, compile_report) = compiler.compile_with_report(None);
            write_css(&css)?;
            if report {
                print_report(&compile_report);
            }
        }
        Command::Preview {
            settings,
            overlay,
            report,
        } => {
            let overlay = read_settings_file(&overlay)?;
            let compiler = compiler_for(config, &settings)?;
            let (css, compile_report) = compiler.compile_with_report(Some(&overlay));
            write_css(&css)?;
            if report {
                print_report(&compile_report);
            }
        }
        Command::Metrics { settings } => {
            let metrics = match settings {
                Some(settings) => {
                    let compiler = compiler_for(config, &settings)?;
                    compiler.compile(None);
                    compiler.get_cache_metrics()
                }
                None => TieredCache::from_config(&config.cache, None).metrics(),
            };
            let json = serde_json::to_string_pretty(&metrics)
                .map_err(|e| RestyleError::Other(format!("failed to serialize metrics: {e}")))?;
            println!("{json}");
        }
        Command::Clear { scope } => {
            let compiler = StyleCompiler::new(
                config.clone(),
                Arc::new(restyle_config::StaticResolver::default()),
                TieredCache::from_config(&config.cache, None),
            );
            let removed = compiler.invalidate(&scope);
            println!("{removed}");
        }
        Command::Sweep => {
            let removed = TieredCache::from_config(&config.cache, None).sweep();
            println!("{removed}");
        }
    }
    Ok(())
}

/// A compiler over a settings file. The file is read once up front so a
/// missing or malformed file fails the command instead of compiling defaults.
fn compiler_for(config: EngineConfig, settings: &Path) -> Result<StyleCompiler, RestyleError> {
    read_settings_file(settings)?;
    Ok(StyleCompiler::from_config(
        config,
        Arc::new(FileResolver::new(settings)),
    ))
}

fn write_css(css: &str) -> Result<(), RestyleError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(css.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn print_report(report: &CompileReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => eprintln!("{json}"),
        Err(e) => tracing::warn!("failed to serialize compile report: {e}"),
    }
}
