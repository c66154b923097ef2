//! Rewrite a SignWriting TTX dump
//!
//! Fixes glyph names, replaces the box glyph, hollows out the number glyphs,
//! scales all other outlines and zeroes advance widths, then writes the
//! result as a new TTX file ready to be compiled.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use signwriting_fonts::{rewrite::SCALE_FACTOR, Error, GlyphTable, RewriteOptions, Rewriter};

#[derive(Parser, Debug)]
#[command(version, about = "Rewrite a SignWriting TTX dump for compilation.")]
struct Args {
    /// Path to the input TTX font file.
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the output TTX font file.
    #[arg(short, long)]
    output: PathBuf,

    /// A file containing the TTGlyph to use for the box glyph.
    #[arg(long)]
    box_template: Option<PathBuf>,

    /// The factor applied to every scaled outline.
    #[arg(long, default_value_t = SCALE_FACTOR)]
    scale: f64,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let options = RewriteOptions {
        box_template: args.box_template,
        scale: args.scale,
        ..Default::default()
    };
    let rewriter = Rewriter::new(&options)?;
    let table = GlyphTable::load(&args.input)?;
    log::info!(
        "rewriting {} glyphs from {}",
        table.glyphs().len(),
        args.input.display()
    );
    let table = rewriter.run(table)?;
    table.save(&args.output)?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}
