use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use flux_catalog_core::config::Config;
use flux_catalog_core::{load_universe, walk_universe, Catalog, CatalogError, Result, WalkResult};

mod args;
mod report;
use args::{Cli, Commands, ConfigAction, OutputFormat, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Generate {
            source,
            format,
            output,
        }) => handle_generate(&base_dir, &source, format, output.as_deref()),
        Some(Commands::Inspect { source, nodes_only }) => {
            handle_inspect(&base_dir, &source, nodes_only)
        }
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// RUST_LOG wins; otherwise -v/-q pick the level
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("FLUX_CATALOG_HOME") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".flux-catalog"))
        .unwrap_or_else(|| PathBuf::from(".flux-catalog"))
}

fn walk_source(base_dir: &Path, source: &Path) -> Result<WalkResult> {
    let config = Config::load(base_dir)?;
    let universe = load_universe(source, &config.to_load_options())?;
    tracing::info!(
        modules = universe.module_names().len(),
        types = universe.len(),
        "loaded type universe"
    );
    walk_universe(&universe, config.to_walk_options())
}

fn handle_generate(
    base_dir: &Path,
    source: &Path,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let catalog = walk_source(base_dir, source)?.into_catalog();

    match output {
        Some(path) => {
            // no escape codes in files; stays off for the rest of the run
            colored::control::set_override(false);
            let mut out = BufWriter::new(File::create(path)?);
            write_catalog(&mut out, &catalog, format)?;
            out.flush()?;

            println!(
                "{} {} ({} categories, {} members)",
                "Wrote:".green(),
                path.display(),
                catalog.len(),
                catalog.member_count()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_catalog(&mut out, &catalog, format)?;
        }
    }

    Ok(())
}

fn write_catalog(
    out: &mut impl Write,
    catalog: &Catalog,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => report::write_catalog_text(out, catalog),
        OutputFormat::Json => report::write_catalog_json(out, catalog),
    }
}

fn handle_inspect(base_dir: &Path, source: &Path, nodes_only: bool) -> Result<()> {
    let result = walk_source(base_dir, source)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_inspection(&mut out, &result, nodes_only)
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(CatalogError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            println!("{}", Config::path(base_dir).display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "flux-catalog", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DUMP: &str = r#"{
        "name": "ProtoFlux.Nodes",
        "types": [
            { "namespace": "ProtoFlux.Core", "name": "NodeNameAttribute" },
            { "namespace": "ProtoFlux.Core", "name": "NodeCategoryAttribute" },
            {
                "namespace": "ProtoFlux.Runtimes.Execution.Nodes.Math",
                "name": "Sin",
                "fields": [
                    {
                        "name": "Angle",
                        "is_public": true,
                        "field_type": {
                            "namespace": "ProtoFlux.Core",
                            "name": "ValueArgument`1",
                            "generic_arguments": [{ "name": "float" }]
                        }
                    }
                ],
                "attributes": [
                    { "attribute_type": "ProtoFlux.Core.NodeNameAttribute", "arguments": ["sin"] },
                    { "attribute_type": "ProtoFlux.Core.NodeCategoryAttribute", "arguments": ["Math/Trig"] }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_generate_writes_json_file() {
        let tmp = TempDir::new().unwrap();
        let dump = tmp.path().join("nodes.json");
        fs::write(&dump, DUMP).unwrap();
        let out = tmp.path().join("catalog.json");

        handle_generate(tmp.path(), &dump, OutputFormat::Json, Some(&out)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["entries"][0]["category"], "Math/Trig");
        assert_eq!(
            value["entries"][0]["members"][0],
            "ProtoFlux.Runtimes.Execution.Nodes.Math.Sin"
        );
    }

    #[test]
    fn test_generate_missing_source() {
        let tmp = TempDir::new().unwrap();
        let err = handle_generate(
            tmp.path(),
            &tmp.path().join("absent"),
            OutputFormat::Text,
            None,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_generate_honors_config_markers() {
        let tmp = TempDir::new().unwrap();
        let dump = tmp.path().join("nodes.json");
        fs::write(&dump, DUMP).unwrap();

        let mut config = Config::default();
        config
            .set("markers.node_name", "ProtoFlux.Core.MissingAttribute")
            .unwrap();
        config.save(tmp.path()).unwrap();

        let err = handle_generate(tmp.path(), &dump, OutputFormat::Text, None).unwrap_err();
        assert!(matches!(err, CatalogError::MissingMarker { .. }));
    }

    #[test]
    fn test_resolve_base_dir_prefers_flag() {
        let base = resolve_base_dir(Some(PathBuf::from("/tmp/flux")));
        assert_eq!(base, PathBuf::from("/tmp/flux"));
    }
}
