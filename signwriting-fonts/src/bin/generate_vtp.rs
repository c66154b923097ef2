//! Generate a VOLT project
//!
//! Reads a TTX dump of a SignWriting font and writes the VOLT project
//! (glyph definitions, groups and positioning lookups) to stdout or a file.

use std::{io::Write, path::PathBuf, process::ExitCode};

use clap::Parser;
use signwriting_fonts::{Error, GlyphTable, Project, VtpGenerator};

#[derive(Parser, Debug)]
#[command(version, about = "Generate a VOLT project for a SignWriting TTX dump.")]
struct Args {
    /// Path to the input TTX font file.
    #[arg(long)]
    ttx: PathBuf,

    /// A TOML file listing the groups and lookups; defaults to the built-in
    /// SignWriting project.
    #[arg(short, long)]
    project: Option<PathBuf>,

    /// Write the project here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let project = match &args.project {
        Some(path) => Project::load(path)?,
        None => Project::signwriting()?,
    };
    let table = GlyphTable::load(&args.ttx)?;

    let mut vtp = Vec::new();
    VtpGenerator::from_project(&table, &project).generate(&mut vtp)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &vtp)?;
            log::info!("wrote {} bytes to {}", vtp.len(), path.display());
        }
        None => std::io::stdout().lock().write_all(&vtp)?,
    }
    Ok(())
}
