use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use trexo_signer::app::{app_version, constants, AppPaths, Os};
use trexo_signer::imaging::codec;
use trexo_signer::logging;
use trexo_signer::state::SignatureLibrary;
use trexo_signer::ui::wrap_html_with_style;

/// Command line front end for the Trexo PDF Signer asset library
#[derive(Debug, Parser)]
#[command(name = "trexo-signer", version, about)]
struct Cli {
    /// Config root directory (defaults to ~/.trexo-pdf-signer)
    #[arg(long, global = true, env = "TREXO_SIGNER_HOME")]
    config_dir: Option<PathBuf>,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Save an image file into the signature library as PNG
    Save {
        /// Image to import (PNG, JPEG, or anything else the decoder knows)
        image: PathBuf,
        /// Name to store it under (defaults to the file name without extension)
        #[arg(long)]
        name: Option<String>,
    },
    /// List the saved signature images
    List {
        /// Print a JSON array instead of one line per image
        #[arg(long)]
        json: bool,
    },
    /// Delete a signature image (full path or a file name inside the library)
    Delete { path: PathBuf },
    /// Wrap release-note HTML in the dark theme stylesheet
    Notes {
        /// HTML file to read (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Show version, platform and config locations
    Info,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_json);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let paths = match cli.config_dir {
        Some(dir) => AppPaths::with_root(dir),
        None => AppPaths::from_home()?,
    };

    match cli.command {
        Command::Save { image, name } => {
            let library = open_library(&paths)?;
            let name = match name {
                Some(name) => name,
                None => file_stem(&image)?,
            };

            let decoded = codec::decode_file(&image)?;
            let stored = library
                .save(&decoded, &name)
                .with_context(|| format!("Could not save signature '{}'", name))?;

            println!("{}", stored.display());
        }
        Command::List { json } => {
            let library = open_library(&paths)?;
            let report = library.scan();

            if json {
                let summaries: Vec<_> = report.images.iter().map(|s| s.summary()).collect();
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for signature in &report.images {
                    println!(
                        "{}\t{}x{}\t{}",
                        signature.name(),
                        signature.width(),
                        signature.height(),
                        signature.path().display()
                    );
                }
            }
            if !report.skipped.is_empty() {
                eprintln!("{} file(s) could not be read", report.skipped.len());
            }
        }
        Command::Delete { path } => {
            let library = open_library(&paths)?;
            let target = if is_bare_file_name(&path) {
                library.dir().join(&path)
            } else {
                path
            };

            if library.delete(&target) {
                println!("Deleted {}", target.display());
            } else {
                eprintln!("Not deleted: {}", target.display());
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Notes { file } => {
            let html = match file {
                Some(file) => std::fs::read_to_string(&file)
                    .with_context(|| format!("Could not read {}", file.display()))?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("Could not read release notes from stdin")?;
                    buffer
                }
            };
            println!("{}", wrap_html_with_style(&html));
        }
        Command::Info => {
            let version = app_version();
            println!("{}", constants::app_title(&version));
            println!("{}", constants::APP_DESCRIPTION);
            println!();
            println!("Platform:          {}", Os::current());
            println!("Config directory:  {}", paths.root().display());
            println!("Config file:       {}", paths.config_file().display());
            println!("Signature images:  {}", paths.signature_images_dir().display());
            println!("Trusted certs:     {}", paths.trusted_certs_dir().display());
            println!("Profiles:          {}", paths.profiles_file().display());
            println!("Website:           {}", constants::APP_WEBSITE);
            println!("Releases:          {}", constants::APP_RELEASES_URL);
            println!("Issues:            {}", constants::APP_ISSUES_URL);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn open_library(paths: &AppPaths) -> Result<SignatureLibrary> {
    paths.ensure_root()?;
    Ok(SignatureLibrary::open_default(paths)?)
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .with_context(|| format!("No file name in {}", path.display()))
}

fn is_bare_file_name(path: &Path) -> bool {
    path.parent().is_some_and(|parent| parent.as_os_str().is_empty())
}
