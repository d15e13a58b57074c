//! Plain-text dump of cross-validation folds.
//!
//! ```text
//! fold1
//! 1.0,2.0,yes
//! 4.5,5.5,no
//!
//! fold2
//! ...
//! ```
//!
//! Features are written in shortest round-trip form, so reading a dump back
//! reproduces every value exactly.

use crate::core::{Example, Label};
use crate::evaluation::Folds;
use crate::io::DataError;
use crate::io::dataset_reader::parse_features;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::info;

const FOLD_PREFIX: &str = "fold";

pub fn write_folds(path: &Path, folds: &Folds) -> Result<(), DataError> {
    let file = File::create(path).map_err(|e| DataError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_folds_to(&mut out, folds)
        .and_then(|_| out.flush())
        .map_err(|e| DataError::io(path, e))?;
    info!(path = %path.display(), folds = folds.len(), "folds written");
    Ok(())
}

pub fn write_folds_to<W: Write>(mut out: W, folds: &Folds) -> std::io::Result<()> {
    for (i, fold) in folds.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{FOLD_PREFIX}{}", i + 1)?;
        for example in fold {
            for value in example.features() {
                write!(out, "{value:?},")?;
            }
            match example.label() {
                Some(label) => writeln!(out, "{label}")?,
                None => writeln!(out)?,
            }
        }
    }
    Ok(())
}

pub fn read_folds(path: &Path) -> Result<Folds, DataError> {
    let file = File::open(path).map_err(|e| DataError::io(path, e))?;
    parse_folds(file, path)
}

/// Inverse of [`write_folds_to`]. Fold headers must appear in order
/// (`fold1`, `fold2`, ...); blank lines between blocks are optional.
pub fn parse_folds<R: Read>(reader: R, source: &Path) -> Result<Folds, DataError> {
    let malformed = |line: u64, reason: String| DataError::MalformedFoldFile {
        path: source.to_path_buf(),
        line,
        reason,
    };

    let mut folds: Vec<Vec<Example>> = Vec::new();
    for (i, raw) in BufReader::new(reader).lines().enumerate() {
        let line_no = i as u64 + 1;
        let raw = raw.map_err(|e| DataError::io(source, e))?;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(number) = line.strip_prefix(FOLD_PREFIX) {
            let expected = folds.len() + 1;
            if number.parse::<usize>().ok() != Some(expected) {
                return Err(malformed(
                    line_no,
                    format!("expected header '{FOLD_PREFIX}{expected}', found '{line}'"),
                ));
            }
            folds.push(Vec::new());
            continue;
        }

        let Some(current) = folds.last_mut() else {
            return Err(malformed(line_no, "example before first fold header".into()));
        };

        let Some((values, raw_label)) = line.rsplit_once(',') else {
            return Err(malformed(line_no, "missing ',' before class label".into()));
        };
        let label = raw_label
            .trim()
            .parse::<Label>()
            .map_err(|_| DataError::ParseLabel {
                path: source.to_path_buf(),
                line: line_no,
                value: raw_label.to_string(),
            })?;
        let features = if values.is_empty() {
            Vec::new()
        } else {
            parse_features(values.split(',').map(str::trim), source, line_no)?
        };
        current.push(Example::labeled(features, label));
    }

    Ok(Folds::from_parts(folds))
}
