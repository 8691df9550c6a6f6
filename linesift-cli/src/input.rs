//! Input path resolution

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Expands the supplied file arguments into concrete input paths,
/// preserving the order the arguments were given in.
///
/// Arguments containing glob metacharacters are expanded, with matches
/// sorted within each pattern. Plain paths pass through untouched, so a
/// missing file is reported by name when routing opens it rather than
/// silently dropped here.
pub fn resolve_inputs(args: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for arg in args {
        if !is_pattern(arg) {
            files.push(PathBuf::from(arg));
            continue;
        }

        let paths = glob(arg).with_context(|| format!("Invalid glob pattern: {arg}"))?;

        let mut matches = Vec::new();
        for path in paths {
            let path = path.with_context(|| format!("Error resolving pattern: {arg}"))?;
            if path.is_file() {
                matches.push(path);
            }
        }

        if matches.is_empty() {
            anyhow::bail!("No files found matching pattern: {arg}");
        }

        matches.sort();
        files.extend(matches);
    }

    Ok(files)
}

fn is_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}
