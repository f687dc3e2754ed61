//! tzen-bridge CLI - drive the .tzen interception layer against a directory

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tzen_bridge::config::{self, TzenConfig};
use tzen_bridge::host::{LanguageService, LanguageServiceHost, ModuleNameLiteral, ResolutionOptions};
use tzen_bridge::ui::{self, Icons, ResolutionRow};
use tzen_bridge::workbench::Workbench;

#[derive(Parser)]
#[command(name = "tzen-bridge")]
#[command(version = "0.0.1")]
#[command(about = "Serve .tzen files to a code-intelligence host as compilable sources")]
#[command(long_about = r#"
tzen-bridge opens a directory as a project, attaches the interception layer
and shows what the host would see for foreign files:
  • which files it is told to track
  • how imports of .tzen files resolve
  • the snapshot served in place of a .tzen file
  • where "go to definition" lands

Example usage:
  tzen-bridge files --project ./app
  tzen-bridge resolve --from ./app/src/main.ts ./widget.tzen ./util
  tzen-bridge definition --project ./app --format json
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (defaults to tzen.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List the foreign files the host would be told to track
    Files {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Resolve import specifiers as written in a file
    Resolve {
        /// File containing the imports
        #[arg(long)]
        from: PathBuf,

        /// Project root directory
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Import specifiers to resolve
        #[arg(required = true)]
        specifiers: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Show the script kind and snapshot served for a file
    Snapshot {
        /// File to inspect
        path: PathBuf,

        /// Project root directory
        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },

    /// Run a "go to definition" request through the plugin
    Definition {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// File the request is made in
        #[arg(long, default_value = "")]
        file: String,

        /// Offset of the request within the file
        #[arg(long, default_value = "0")]
        position: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn path_string(path: &Path) -> anyhow::Result<String> {
    Ok(std::path::absolute(path)?.to_string_lossy().into_owned())
}

fn settings(path: Option<&Path>) -> anyhow::Result<TzenConfig> {
    let settings = config::load_config(path)?.unwrap_or_default();
    tracing::debug!("Using config {:?}", settings);
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config;

    match cli.command {
        Commands::Init { force } => {
            let path = config_path.unwrap_or_else(config::default_config_path);
            config::write_config(&path, &TzenConfig::default(), force)?;
            ui::success(&format!("Wrote {}", path.display()));
        }

        Commands::Files { project, format } => {
            let bench = Workbench::open(&project, &settings(config_path.as_deref())?)?;
            let files = bench.external_files();

            if format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&files)?);
                return Ok(());
            }

            ui::header(&format!("Foreign files in {}", bench.project.root().display()));
            if files.is_empty() {
                ui::warn("No .tzen files found.");
            }
            for file in &files {
                ui::file_entry(file);
            }
            ui::summary_row("Total:", &files.len().to_string());
        }

        Commands::Resolve { from, project, specifiers, format } => {
            let bench = Workbench::open(&project, &settings(config_path.as_deref())?)?;
            let containing_file = path_string(&from)?;
            let literals: Vec<ModuleNameLiteral> =
                specifiers.iter().map(ModuleNameLiteral::new).collect();

            let resolutions = bench.instance.host.resolve_module_name_literals(
                &literals,
                &containing_file,
                &ResolutionOptions::default(),
            )?;

            if format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&resolutions)?);
                return Ok(());
            }

            ui::header(&format!("Resolving imports of {}", containing_file));
            let rows: Vec<ResolutionRow> = literals
                .iter()
                .zip(&resolutions)
                .map(|(literal, resolution)| ResolutionRow::new(&literal.text, resolution))
                .collect();
            println!("{}", ui::resolution_table(&rows));
        }

        Commands::Snapshot { path, project } => {
            let bench = Workbench::open(&project, &settings(config_path.as_deref())?)?;
            let file = path_string(&path)?;
            let host = &bench.instance.host;

            ui::info("File", &file);
            ui::info("Script kind", host.get_script_kind(&file).as_str());
            match host.get_script_snapshot(&file)? {
                Some(snapshot) => {
                    ui::info("Length", &snapshot.len().to_string());
                    ui::section("Snapshot");
                    println!("{}", snapshot.text());
                }
                None => ui::warn("No snapshot available"),
            }
        }

        Commands::Definition { project, file, position, format } => {
            let bench = Workbench::open(&project, &settings(config_path.as_deref())?)?;
            let result = bench
                .instance
                .service
                .get_definition_and_bound_span(&file, position)?;

            if format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            match result {
                Some(result) if !result.definitions.is_empty() => {
                    for definition in &result.definitions {
                        ui::info(
                            Icons::LINK,
                            &format!(
                                "{} [{}..{}]",
                                definition.file_name,
                                definition.text_span.start,
                                definition.text_span.end()
                            ),
                        );
                    }
                }
                _ => ui::warn("No definition found."),
            }
        }
    }

    Ok(())
}
