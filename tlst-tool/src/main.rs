use std::{fs::create_dir_all, path::PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::info;

use convert::{convert_all, Direction};
use files::gather_files;

mod convert;
mod files;

#[derive(Parser)]
#[command(version)]
/// Converts TLST track lists to JSON and back
pub struct Args {
    #[arg(required = true)]
    /// Files to convert, or a single directory to search recursively
    input: Vec<PathBuf>,
    #[arg(short = 'x', long)]
    /// In directory mode, extract .tlst files to json instead of building .json files
    extract: bool,
    #[arg(short, long)]
    /// Output file or directory, default is next to the input
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let env = Env::new().default_filter_or("info");
    env_logger::init_from_env(env);
    let args = Args::parse();

    let dir_mode = args.input.len() == 1 && args.input[0].is_dir();
    let paths = if dir_mode {
        let direction = if args.extract {
            Direction::Extract
        } else {
            Direction::Build
        };
        let paths = gather_files(&args.input[0], direction.input_extension());
        info!(
            "found {} .{} files in {:?}",
            paths.len(),
            direction.input_extension(),
            args.input[0]
        );
        if let Some(out) = &args.output {
            create_dir_all(out)
                .with_context(|| format!("could not create output directory {out:?}"))?;
        }
        paths
    } else {
        args.input
    };

    let failed = convert_all(&paths, args.output.as_deref());
    if failed > 0 {
        bail!("{failed} of {} files failed to convert", paths.len());
    }
    Ok(())
}
