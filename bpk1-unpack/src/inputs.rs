use std::error::Error;
use std::path::{Path, PathBuf};

use glob::glob;
use tracing::warn;

/// Turns command line arguments into input files. An argument naming an existing path, or one
/// without glob metacharacters, is taken verbatim; any other argument is expanded as a glob
/// pattern (matches sorted).
pub fn expand_inputs(arguments: &[String]) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut files = Vec::new();
    for argument in arguments {
        if !argument.contains(['*', '?', '[']) || Path::new(argument).exists() {
            files.push(PathBuf::from(argument));
            continue;
        }

        let mut matches = glob(argument)?.collect::<Result<Vec<_>, _>>()?;
        if matches.is_empty() {
            warn!("No files match {argument}");
        }
        matches.sort();
        files.extend(matches);
    }
    Ok(files)
}
