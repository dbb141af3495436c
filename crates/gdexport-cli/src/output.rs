//! Output sinks: where the collected outputs are published.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use gdexport_core::ArtifactOutputs;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use uuid::Uuid;

use crate::workflow;

/// How outputs are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `github` when an output file is configured, `legacy` otherwise.
    Auto,
    /// Append to the runner's output file.
    Github,
    /// Print `::set-output` workflow commands.
    Legacy,
    /// Print a single JSON object.
    Json,
}

impl Format {
    pub fn resolve(self, has_output_file: bool) -> Format {
        match self {
            Format::Auto if has_output_file => Format::Github,
            Format::Auto => Format::Legacy,
            other => other,
        }
    }

    /// Whether warnings are printed as workflow annotations on stdout.
    pub fn annotates(self) -> bool {
        !matches!(self, Format::Json)
    }
}

/// Destination for a run's outputs.
pub trait OutputSink {
    fn emit(&mut self, outputs: &ArtifactOutputs) -> Result<()>;
}

/// Appends `name=value` entries to the runner's output file.
pub struct GithubOutputFile<W: Write> {
    writer: W,
}

impl GithubOutputFile<std::fs::File> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open output file: {}", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> GithubOutputFile<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Format one output file entry. Multi-line values use a heredoc block.
pub fn file_entry(name: &str, value: &str) -> Result<String> {
    if !value.contains(['\n', '\r']) {
        return Ok(format!("{name}={value}\n"));
    }
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    if name.contains(&delimiter) || value.contains(&delimiter) {
        bail!("Unexpected input: output '{name}' contains the delimiter {delimiter}");
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

impl<W: Write> OutputSink for GithubOutputFile<W> {
    fn emit(&mut self, outputs: &ArtifactOutputs) -> Result<()> {
        for (name, value) in outputs.entries() {
            self.writer
                .write_all(file_entry(name, &value)?.as_bytes())
                .with_context(|| format!("Failed to write output '{name}'"))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Prints `::set-output` commands.
pub struct WorkflowCommands<W: Write> {
    writer: W,
}

impl<W: Write> WorkflowCommands<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WorkflowCommands<W> {
    fn emit(&mut self, outputs: &ArtifactOutputs) -> Result<()> {
        for (name, value) in outputs.entries() {
            writeln!(self.writer, "{}", workflow::set_output(name, &value))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Prints the outputs as one JSON object.
pub struct JsonOutput<W: Write> {
    writer: W,
}

impl<W: Write> JsonOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for JsonOutput<W> {
    fn emit(&mut self, outputs: &ArtifactOutputs) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, outputs)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Build the sink for a resolved format.
pub fn sink(format: Format, output_file: Option<&Path>) -> Result<Box<dyn OutputSink>> {
    match format.resolve(output_file.is_some()) {
        Format::Github => {
            let Some(path) = output_file else {
                bail!("GITHUB_OUTPUT is not set; pass --output-file or choose another --format");
            };
            Ok(Box::new(GithubOutputFile::open(path)?))
        }
        Format::Auto | Format::Legacy => Ok(Box::new(WorkflowCommands::new(io::stdout()))),
        Format::Json => Ok(Box::new(JsonOutput::new(io::stdout()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdexport_core::Platform;

    fn sample() -> ArtifactOutputs {
        let mut outputs = ArtifactOutputs::new();
        outputs.record(Platform::WindowsDesktop, "MyGame.zip");
        outputs.record(Platform::Html5, "MyGame Web.zip");
        outputs.itch_project = Some("studio/my-game".to_string());
        outputs
    }

    #[test]
    fn test_format_resolution() {
        assert_eq!(Format::Auto.resolve(true), Format::Github);
        assert_eq!(Format::Auto.resolve(false), Format::Legacy);
        assert_eq!(Format::Json.resolve(true), Format::Json);
        assert!(!Format::Json.annotates());
        assert!(Format::Legacy.annotates());
    }

    #[test]
    fn test_github_output_file() {
        let mut sink = GithubOutputFile::new(Vec::new());
        sink.emit(&sample()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "require_wine=true\n\
             windows_artifact=MyGame.zip\n\
             html5_artifact=MyGame Web.zip\n\
             itch_project=studio/my-game\n"
        );
    }

    #[test]
    fn test_multiline_entry_uses_heredoc() {
        let entry = file_entry("itch_project", "a\nb").unwrap();
        let mut lines = entry.lines();
        let header = lines.next().unwrap();
        let delimiter = header.strip_prefix("itch_project<<").unwrap();
        assert!(delimiter.starts_with("ghadelimiter_"));
        assert_eq!(lines.next(), Some("a"));
        assert_eq!(lines.next(), Some("b"));
        assert_eq!(lines.next(), Some(delimiter));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_workflow_commands() {
        let mut sink = WorkflowCommands::new(Vec::new());
        sink.emit(&ArtifactOutputs::new()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "::set-output name=require_wine::false\n");
    }

    #[test]
    fn test_json_output() {
        let mut sink = JsonOutput::new(Vec::new());
        sink.emit(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(value["require_wine"], true);
        assert_eq!(value["windows_artifact"], "MyGame.zip");
        assert_eq!(value["itch_project"], "studio/my-game");
        assert!(value.get("linux_artifact").is_none());
    }

    #[test]
    fn test_github_format_requires_file() {
        assert!(sink(Format::Github, None).is_err());
    }

    #[test]
    fn test_github_output_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        std::fs::write(&path, "earlier=1\n").unwrap();

        let mut out = sink(Format::Auto, Some(&path)).unwrap();
        out.emit(&ArtifactOutputs::new()).unwrap();
        drop(out);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "earlier=1\nrequire_wine=false\n");
    }
}
