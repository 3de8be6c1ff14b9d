mod cli;
mod replay;
mod trace;

use std::process::ExitCode;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};
use vista_common::VistaError;
use vista_config::VistaConfig;

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn build_filter(directive: &str) -> EnvFilter {
    let directive = directive
        .parse::<Directive>()
        .unwrap_or_else(|_| Directive::from(LevelFilter::INFO));
    EnvFilter::from_default_env().add_directive(directive)
}

/// Install logging before anything else so config loading is visible.
///
/// Returns a handle for swapping in the config's level later, or `None`
/// when `--log-level` or `RUST_LOG` already decided it.
fn init_logging(args: &cli::Args) -> Option<FilterHandle> {
    let explicit = args.log_level.is_some() || std::env::var_os("RUST_LOG").is_some();
    let (filter, handle) =
        reload::Layer::new(build_filter(args.log_level.as_deref().unwrap_or("vista=info")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    (!explicit).then_some(handle)
}

fn apply_config_level(handle: Option<FilterHandle>, config: &VistaConfig) {
    let Some(handle) = handle else {
        return;
    };
    let directive = format!("vista={}", config.logging.level.as_directive());
    if let Err(e) = handle.reload(build_filter(&directive)) {
        tracing::warn!(error = %e, "could not apply configured log level");
    }
}

fn load_config(args: &cli::Args) -> Result<VistaConfig, VistaError> {
    match &args.config {
        Some(path) => Ok(vista_config::load_config_from(path)?),
        None => Ok(vista_config::load_config().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default config");
            VistaConfig::default()
        })),
    }
}

fn run(args: cli::Args) -> vista_common::Result<()> {
    let log_handle = init_logging(&args);
    let config = load_config(&args)?;
    apply_config_level(log_handle, &config);

    tracing::info!(preset = %args.preset, trace = %args.trace.display(), "Starting replay");

    let entries = trace::load_trace(&args.trace)?;
    let steps = replay::replay(args.preset, &config, &entries)?;

    for step in &steps {
        if args.json {
            let line = serde_json::to_string(step).map_err(|e| VistaError::Other(e.to_string()))?;
            println!("{line}");
        } else {
            println!("{}", replay::summary_line(step));
        }
    }

    tracing::info!(steps = steps.len(), "Replay complete");
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Replay failed");
            eprintln!("vista-replay: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::ffi::OsString;

    fn args_with_config(path: &std::path::Path) -> cli::Args {
        cli::Args::try_parse_from([
            OsString::from("vista-replay"),
            OsString::from("trace.json"),
            OsString::from("--config"),
            path.as_os_str().to_owned(),
        ])
        .unwrap()
    }

    #[test]
    fn explicit_config_with_invalid_values_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[chrome]\nchrome_height = 0.0\n").unwrap();

        let err = load_config(&args_with_config(&path)).unwrap_err();
        assert!(matches!(
            err,
            VistaError::Config(vista_common::ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn explicit_config_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vista.toml");
        std::fs::write(&path, "[chrome]\nchrome_height = 72.0\n").unwrap();

        let config = load_config(&args_with_config(&path)).unwrap();
        assert_eq!(config.chrome.chrome_height, 72.0);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&args_with_config(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(
            err,
            VistaError::Config(vista_common::ConfigError::FileNotFound(_))
        ));
    }
}
