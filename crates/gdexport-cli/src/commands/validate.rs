//! Check a project's export presets without publishing anything.

use anyhow::{Context, Result};
use gdexport_config::presets::presets;
use gdexport_config::project::load_export_presets;
use gdexport_config::{Document, Preset, ProjectPaths};
use gdexport_core::{Platform, archive_name};
use std::io::{self, Write};
use std::path::Path;

use super::project_root;

/// Print one line per preset describing what a run would publish.
pub fn run(project_path: &Path) -> Result<()> {
    let paths = ProjectPaths::resolve(project_root(project_path))
        .with_context(|| format!("Failed to resolve project path: {}", project_path.display()))?;
    let doc = load_export_presets(&paths)?;

    println!("Export presets in {}:", paths.root().display());
    report(&mut io::stdout().lock(), &doc)?;
    Ok(())
}

fn report(out: &mut impl Write, doc: &Document) -> io::Result<()> {
    let mut count = 0;
    for preset in presets(doc) {
        count += 1;
        writeln!(out, "  [{}] {}", preset.section(), describe(&preset))?;
    }
    if count == 0 {
        writeln!(out, "  (no presets)")?;
    }
    Ok(())
}

fn describe(preset: &Preset<'_>) -> String {
    let label = preset.platform().unwrap_or("<no platform>");
    if !preset.is_configured() {
        return format!("{} ({label}): skipped, no export path", preset.display_name());
    }
    let Some(name) = preset.name() else {
        return format!("({label}): error, missing name");
    };
    let archive = archive_name(name);
    let Some(platform) = preset.platform() else {
        return format!("{archive}: error, missing platform");
    };
    match platform.parse::<Platform>() {
        Ok(platform) => format!("{archive} -> {}", platform.slot()),
        Err(_) => format!("{archive} ({label}): no output for platform"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let doc = Document::parse(
            "[preset.0]\nname=\"Game\"\nplatform=\"Windows Desktop\"\nexport_path=\"g.exe\"\n\
             [preset.0.options]\nx=1\n\
             [preset.1]\nname=\"Web\"\nplatform=\"HTML5\"\nexport_path=\"\"\n\
             [preset.2]\nname=\"Box\"\nplatform=\"Xbox\"\nexport_path=\"b\"\n",
        );
        let mut out = Vec::new();
        report(&mut out, &doc).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "  [preset.0] Game.zip -> windows_artifact\n\
             \x20 [preset.1] Web (HTML5): skipped, no export path\n\
             \x20 [preset.2] Box.zip (Xbox): no output for platform\n"
        );
    }

    #[test]
    fn test_report_missing_fields_are_errors() {
        let doc = Document::parse(
            "[preset.0]\nname=\"Game\"\nexport_path=\"g\"\n\
             [preset.1]\nplatform=\"Android\"\nexport_path=\"a.apk\"\n",
        );
        let mut out = Vec::new();
        report(&mut out, &doc).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "  [preset.0] Game.zip: error, missing platform\n\
             \x20 [preset.1] (Android): error, missing name\n"
        );
    }

    #[test]
    fn test_report_empty() {
        let mut out = Vec::new();
        report(&mut out, &Document::parse("")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  (no presets)\n");
    }
}
