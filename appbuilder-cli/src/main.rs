use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use appbuilder_document::{load_document, write_export};
use appbuilder_ui::{EditorConfig, EditorSession};

mod script;

/// Headless driver for the app builder.
#[derive(Parser, Debug)]
#[command(name = "appbuilder", version, about)]
struct Cli {
    /// Editor config file (JSON). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay an edit script and export the resulting app.
    Replay {
        /// JSON list of actions.
        script: PathBuf,

        /// App title; also names the export file.
        #[arg(long)]
        title: Option<String>,

        /// Directory the export is written to.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the canvas markup for an exported document.
    ///
    /// The document is opened as an editor session, so `--config` applies here too.
    Render {
        document: PathBuf,

        /// Render as the preview would (no selection, controls disabled).
        #[arg(long)]
        preview: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    match cli.command {
        Commands::Replay {
            script,
            title,
            out_dir,
        } => {
            let actions = script::load_script(&script)?;
            let mut session = EditorSession::new(&config);
            if let Some(title) = title {
                session.set_app_name(title);
            }
            script::run_script(&mut session, &actions)
                .with_context(|| format!("replay {}", script.display()))?;

            let path = write_export(&out_dir, session.app_name(), session.current(), &config.export)?;
            println!("{}", path.display());
        }
        Commands::Render { document, preview } => {
            let snapshot = load_document(&document)?;
            let mut session = EditorSession::from_snapshot(snapshot, &config);
            if preview {
                session.toggle_preview();
            }
            println!("{}", session.render().to_markup());
        }
    }

    Ok(())
}
