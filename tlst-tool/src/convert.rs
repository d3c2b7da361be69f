use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use log::{error, info};
use tlst::TrackList;

use crate::files::{has_extension, JSON_EXTENSION, TLST_EXTENSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// tlst -> json
    Extract,
    /// json -> tlst
    Build,
}

impl Direction {
    pub fn from_path(path: &Path) -> Option<Self> {
        if has_extension(path, TLST_EXTENSION) {
            Some(Self::Extract)
        } else if has_extension(path, JSON_EXTENSION) {
            Some(Self::Build)
        } else {
            None
        }
    }

    pub fn input_extension(self) -> &'static str {
        match self {
            Self::Extract => TLST_EXTENSION,
            Self::Build => JSON_EXTENSION,
        }
    }

    pub fn output_extension(self) -> &'static str {
        match self {
            Self::Extract => JSON_EXTENSION,
            Self::Build => TLST_EXTENSION,
        }
    }
}

/// where to put the converted file: next to the input, inside the output
/// directory, or exactly at the output path
pub fn output_path(input: &Path, output: Option<&Path>, direction: Direction) -> PathBuf {
    let swapped = input.with_extension(direction.output_extension());
    match output {
        None => swapped,
        Some(out) if out.is_dir() => match swapped.file_name() {
            Some(name) => out.join(name),
            None => out.to_owned(),
        },
        Some(out) => out.to_owned(),
    }
}

/// converts a single file, returns the path of the written file
pub fn convert_file(input: &Path, output: Option<&Path>) -> anyhow::Result<PathBuf> {
    let Some(direction) = Direction::from_path(input) else {
        bail!("{input:?} is neither a .tlst nor a .json file");
    };
    let out_path = output_path(input, output, direction);
    match direction {
        Direction::Extract => {
            let data = fs::read(input).with_context(|| format!("error reading {input:?}"))?;
            let tracks = TrackList::from_bytes(&data)
                .with_context(|| format!("error parsing {input:?}"))?;
            let out_file = BufWriter::new(
                File::create(&out_path)
                    .with_context(|| format!("error creating {out_path:?}"))?,
            );
            tracks
                .write_json(out_file)
                .with_context(|| format!("error writing {out_path:?}"))?;
        }
        Direction::Build => {
            let f = File::open(input).with_context(|| format!("error opening {input:?}"))?;
            let tracks = TrackList::from_json_reader(std::io::BufReader::new(f))
                .with_context(|| format!("error parsing {input:?}"))?;
            // encode before touching the output, so a failure doesn't leave a broken file
            let data = tracks
                .to_bytes()
                .with_context(|| format!("error encoding {input:?}"))?;
            fs::write(&out_path, data).with_context(|| format!("error writing {out_path:?}"))?;
        }
    }
    Ok(out_path)
}

/// converts every file on its own, a failing file doesn't stop the others,
/// returns how many files failed
pub fn convert_all(paths: &[PathBuf], output: Option<&Path>) -> usize {
    let mut failed = 0;
    for path in paths.iter() {
        info!("{path:?}");
        match convert_file(path, output) {
            Ok(out_path) => info!("wrote {out_path:?}"),
            Err(e) => {
                error!("{e:?}");
                failed += 1;
            }
        }
    }
    failed
}
