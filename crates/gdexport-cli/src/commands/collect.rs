//! Collect artifact names and publish them as step outputs.

use anyhow::{Context, Result};
use gdexport_config::{Extraction, ProjectPaths, collect_outputs};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use super::project_root;
use crate::output::{self, Format};
use crate::workflow;

/// Read the project, then publish warnings and outputs.
pub fn run(project_path: &Path, format: Format, output_file: Option<&Path>) -> Result<()> {
    let extraction = collect(project_path)?;
    let format = format.resolve(output_file.is_some());

    if format.annotates() {
        annotate_warnings(&mut io::stdout().lock(), &extraction)?;
    }

    let mut sink = output::sink(format, output_file)?;
    sink.emit(&extraction.outputs)
}

pub fn collect(project_path: &Path) -> Result<Extraction> {
    let paths = ProjectPaths::resolve(project_root(project_path))
        .with_context(|| format!("Failed to resolve project path: {}", project_path.display()))?;
    info!(root = %paths.root().display(), "Collecting export outputs");

    Ok(collect_outputs(&paths)?)
}

fn annotate_warnings(out: &mut impl Write, extraction: &Extraction) -> io::Result<()> {
    for warning in &extraction.warnings {
        writeln!(out, "{}", workflow::warning(&warning.to_string()))?;
    }
    Ok(())
}
