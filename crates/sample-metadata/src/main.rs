mod catalog;
mod config;
mod emit;
mod error;
mod model;
mod parser;
mod record;
mod snippets;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use sample_common::platform::Platform;

use config::Config;
use error::AppError;
use model::SampleRecord;

#[derive(Parser, Debug)]
#[command(
    name = "sample-metadata",
    version,
    about = "Extract sample metadata from READMEs and export standalone sample solutions"
)]
struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build metadata for one sample from its README
    Readme {
        /// Platform code: Android, iOS, UWP, WPF, WinUI, XFA, XFI or XFU
        platform: Platform,
        /// Path to the sample's readme.md
        readme: PathBuf,
        /// Write readme.metadata.json next to the README instead of printing it
        #[arg(long)]
        write: bool,
    },

    /// Regenerate readme.metadata.json for every sample under a samples folder
    Sync {
        platform: Platform,
        /// Folder laid out as <category>/<sample>/readme.md
        samples_root: PathBuf,
    },

    /// Print every field extracted for a sample, including README-only sections
    Inspect {
        platform: Platform,
        /// A readme.md or a metadata .json file
        path: PathBuf,
    },

    /// Export a sample as a standalone solution
    Export {
        platform: Platform,
        /// Folder containing the sample's code and README
        sample_dir: PathBuf,
        /// Output folder; the platform and sample name are appended
        output_root: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    // Logs go to stderr; stdout carries JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    run(cli.command)
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Readme {
            platform,
            readme,
            write,
        } => {
            let layout_dir = layout_dir(platform)?;
            let record = record_from_readme(platform, &readme, layout_dir.as_deref())?;
            if write {
                let output = metadata_path(&readme);
                record.flush_to_json(&output)?;
                info!(sample = %record.formal_name, output = %output.display(), "metadata written");
            } else {
                println!("{}", record.to_json_string()?);
            }
        }
        Commands::Sync {
            platform,
            samples_root,
        } => {
            let layout_dir = layout_dir(platform)?;
            sync(platform, &samples_root, layout_dir.as_deref())?;
        }
        Commands::Inspect { platform, path } => {
            let record = if path.extension().is_some_and(|ext| ext == "json") {
                let mut record = SampleRecord::new();
                record.populate_from_json(&path)?;
                record
            } else {
                let layout_dir = layout_dir(platform)?;
                record_from_readme(platform, &path, layout_dir.as_deref())?
            };
            println!("{}", sample_common::files::to_json_pretty(&record)?);
        }
        Commands::Export {
            platform,
            sample_dir,
            output_root,
        } => {
            let config = load_config()?;
            let layout_dir = (platform == Platform::Android).then(|| config.android_layout_dir());
            let record = record_for_export(platform, &sample_dir, layout_dir)?;
            let template_dir = config.template_dir(platform)?;
            let output = emit::emit_standalone_solution(
                &record,
                platform,
                &sample_dir,
                &template_dir,
                &output_root,
            )
            .with_context(|| format!("exporting {}", record.formal_name))?;
            println!("{}", output.display());
        }
    }

    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    let config = Config::from_env()?;
    info!(
        repo_path = %config.repo_path.display(),
        templates_path = %config.templates_path.display(),
        "configuration loaded"
    );
    Ok(config)
}

/// Shared layout folder for Android snippet discovery. Other platforms need no configuration.
fn layout_dir(platform: Platform) -> anyhow::Result<Option<PathBuf>> {
    if platform != Platform::Android {
        return Ok(None);
    }
    Ok(Some(load_config()?.android_layout_path))
}

fn metadata_path(readme: &Path) -> PathBuf {
    readme.with_file_name(catalog::METADATA_FILE_NAME)
}

/// README population followed by snippet discovery. Unreadable READMEs are an error here.
fn record_from_readme(
    platform: Platform,
    readme: &Path,
    layout_dir: Option<&Path>,
) -> Result<SampleRecord, AppError> {
    let mut record = SampleRecord::new();
    let style = record.populate_from_readme(platform, readme)?;
    if !style.is_usable() {
        return Err(AppError::UnreadableReadme(readme.display().to_string()));
    }
    snippets::populate_snippets_from_folder(&mut record, platform, readme, layout_dir)?;
    Ok(record)
}

/// Prefer the stored metadata; fall back to the README when there is none.
fn record_for_export(
    platform: Platform,
    sample_dir: &Path,
    layout_dir: Option<&Path>,
) -> Result<SampleRecord, AppError> {
    let json = sample_dir.join(catalog::METADATA_FILE_NAME);
    if json.is_file() {
        let mut record = SampleRecord::new();
        record.populate_from_json(&json)?;
        return Ok(record);
    }
    record_from_readme(
        platform,
        &sample_dir.join(catalog::README_FILE_NAME),
        layout_dir,
    )
}

fn sync(platform: Platform, samples_root: &Path, layout_dir: Option<&Path>) -> anyhow::Result<()> {
    let mut written = 0usize;
    let mut skipped = 0usize;

    for readme in find_readmes(samples_root)? {
        let mut record = SampleRecord::new();
        let style = record.populate_from_readme(platform, &readme)?;
        if !style.is_usable() {
            skipped += 1;
            continue;
        }
        if let Err(e) =
            snippets::populate_snippets_from_folder(&mut record, platform, &readme, layout_dir)
        {
            warn!(
                readme = %readme.display(),
                error = %e,
                "snippet discovery failed, skipping sample"
            );
            skipped += 1;
            continue;
        }
        record.flush_to_json(&metadata_path(&readme))?;
        written += 1;
    }

    info!(
        platform = %platform,
        root = %samples_root.display(),
        written,
        skipped,
        "sync complete"
    );
    Ok(())
}

/// `<root>/<category>/<sample>/readme.md` paths, sorted.
fn find_readmes(samples_root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut readmes = Vec::new();
    let walker = WalkDir::new(samples_root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.with_context(|| format!("reading {}", samples_root.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let readme = entry.path().join(catalog::README_FILE_NAME);
        if readme.is_file() {
            readmes.push(readme);
        }
    }
    Ok(readmes)
}
