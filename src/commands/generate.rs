use std::io::Write;

use console::style;
use miette::Result;

use stencil::config::load_user_config;
use stencil::error::StencilError;
use stencil::materialize::{FileReport, GenerationReport, LINE_ENDING};
use stencil::options::{parse_extra_options, GenerationOptions};
use stencil::template::HelperRegistry;
use stencil::GenerateRequest;

pub struct GenerateArgs {
    pub schematic: String,
    pub name: String,
    pub no_style: bool,
    pub no_format: bool,
    pub test: bool,
    pub dry_run: bool,
    pub component: Option<String>,
    pub set: Vec<String>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let config = load_user_config()?;
    let start_dir = std::env::current_dir().map_err(|e| StencilError::Io {
        context: "getting current directory".into(),
        source: e,
    })?;

    let options = GenerationOptions {
        style: config.defaults.style && !args.no_style,
        test: config.defaults.test || args.test,
        format: config.defaults.format && !args.no_format,
        dry_run: args.dry_run,
        component: args.component,
        extra: parse_extra_options(&args.set)?,
    };

    let mut request = GenerateRequest::new(args.schematic, args.name, options, start_dir);
    request.manifest = config.manifest.clone();

    let store = config.template_store();
    let report = stencil::generate(&request, store.as_ref(), &HelperRegistry::default())?;

    print_outcome(
        &report,
        args.dry_run,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .map_err(|e| StencilError::Io {
        context: "writing report".to_string(),
        source: e,
    })?;
    Ok(())
}

/// Write the report to `out` and the dry-run notice, if any, to `notes`.
fn print_outcome(
    report: &GenerationReport,
    dry_run: bool,
    out: &mut impl Write,
    notes: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(out, "{}", styled_report(report))?;
    if dry_run {
        writeln!(
            notes,
            "{} Dry run: no files written.",
            style("\u{2139}").blue().bold()
        )?;
    }
    Ok(())
}

fn styled_report(report: &GenerationReport) -> String {
    report
        .files
        .iter()
        .map(|file| {
            // Pad to the widest label so paths line up.
            let label = format!("{:<8}", file.label());
            let label = match file {
                FileReport::Created { .. } => style(label).green(),
                FileReport::Exists { .. } | FileReport::Canceled { .. } => style(label).dim(),
            };
            format!("{label} {}", file.detail())
        })
        .collect::<Vec<_>>()
        .join(LINE_ENDING)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn report() -> GenerationReport {
        GenerationReport {
            files: vec![
                FileReport::Created {
                    relative_path: PathBuf::from("src/a.ts"),
                    bytes: 3,
                },
                FileReport::Canceled { key: "test".into() },
            ],
        }
    }

    fn outcome(dry_run: bool) -> (String, String) {
        let (mut out, mut notes) = (Vec::new(), Vec::new());
        print_outcome(&report(), dry_run, &mut out, &mut notes).unwrap();
        (
            console::strip_ansi_codes(&String::from_utf8(out).unwrap()).into_owned(),
            console::strip_ansi_codes(&String::from_utf8(notes).unwrap()).into_owned(),
        )
    }

    #[test]
    fn dry_run_stdout_matches_real_run() {
        let (dry_out, dry_notes) = outcome(true);
        let (real_out, real_notes) = outcome(false);

        assert_eq!(dry_out, real_out);
        assert!(dry_out.contains("CREATED  src/a.ts (3 bytes)"));
        assert!(!dry_out.contains("Dry run"));
        assert!(dry_notes.contains("Dry run: no files written."));
        assert!(real_notes.is_empty());
    }
}
