//! lse: build a keyword index from a document list and answer one
//! two-keyword OR query.
//!
//! ```text
//! lse --docs docs.txt --noise noisewords.txt deep sky
//! lse --init-config
//! ```

mod commands;
mod format;
mod request;

use std::path::{Path, PathBuf};
use std::process;

use clap::ArgMatches;
use lse_core::{LseConfig, Result, CONFIG_FILE_NAME};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::format_error;
use request::{execute, output_mode, resolve_request};

fn main() {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode(&matches)));
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "lse=debug" } else { "lse=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Write the default config file unless one already exists.
fn init_config(path: &Path) -> Result<String> {
    if path.exists() {
        return Ok(format!("{} already exists, left unchanged", path.display()));
    }
    LseConfig::write_default_if_missing(path)?;
    Ok(format!("Wrote default config to {}", path.display()))
}

fn run(matches: &ArgMatches) -> Result<String> {
    let path = config_path(matches);
    if matches.get_flag("init-config") {
        return init_config(&path);
    }

    let config = if matches.get_one::<String>("config").is_some() {
        LseConfig::from_file(&path)?
    } else {
        LseConfig::load_or_default(&path)?
    };
    let request = resolve_request(matches, config)?;
    execute(&request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_config_writes_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let msg = init_config(&path).unwrap();
        assert!(msg.starts_with("Wrote default config"));
        assert_eq!(LseConfig::from_file(&path).unwrap(), LseConfig::default());
    }

    #[test]
    fn test_init_config_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "result_limit = 2\n").unwrap();

        let msg = init_config(&path).unwrap();
        assert!(msg.contains("already exists"));
        assert_eq!(LseConfig::from_file(&path).unwrap().result_limit, 2);
    }

    #[test]
    fn test_run_init_config_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        let matches = build_cli()
            .try_get_matches_from([
                "lse".to_string(),
                "--init-config".to_string(),
                "--config".to_string(),
                path.display().to_string(),
            ])
            .unwrap();

        run(&matches).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            LseConfig::default_toml()
        );
    }

    #[test]
    fn test_run_explicit_missing_config_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let matches = build_cli()
            .try_get_matches_from([
                "lse".to_string(),
                "--config".to_string(),
                path.display().to_string(),
                "sea".to_string(),
                "sky".to_string(),
            ])
            .unwrap();
        assert!(matches!(run(&matches), Err(lse_core::Error::Io { .. })));
    }
}
