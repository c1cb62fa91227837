//! Sweep command handler

use super::Inputs;
use advising::config::Config;
use advising::core::eligibility::Evaluator;
use advising::core::report::{render_report, write_report, ReportContext, ReportFormat};
use advising::{debug, error, info};
use std::error::Error;
use std::path::{Path, PathBuf};

/// Options for one sweep run
pub struct SweepOptions<'a> {
    /// Only list eligible courses
    pub available: bool,
    /// Output format name (text, md, json)
    pub format: &'a str,
    /// Explicit output file
    pub output: Option<&'a Path>,
    /// Write into the configured reports directory
    pub save: bool,
    /// Extra what-if course codes
    pub simulate: &'a [String],
}

/// Evaluate the whole catalog and print or write the report
pub fn run(catalog_path: &Path, session_path: &Path, options: &SweepOptions, config: &Config) {
    match sweep(catalog_path, session_path, options, config) {
        Ok(Some(path)) => println!("✓ Report generated: {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            error!("Sweep failed: {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn sweep(
    catalog_path: &Path,
    session_path: &Path,
    options: &SweepOptions,
    config: &Config,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let format: ReportFormat = options.format.parse()?;
    let inputs = Inputs::load(catalog_path, session_path)?;
    let context = inputs.context(options.simulate);
    let student = &inputs.session.student;

    let evaluator = Evaluator::new(&inputs.catalog, config.evaluation_options());
    debug!(
        "{} mutual concurrent pairs in catalog",
        evaluator.mutual_pairs().len()
    );
    let results = evaluator.evaluate_all(student, &context);
    info!("Evaluated {} courses for {}", results.len(), student.student_id);

    let ctx = ReportContext::new(student, &inputs.catalog, &results)
        .with_available_only(options.available);

    let target = match (options.output, options.save) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, true) => Some(default_report_path(config, &student.student_id, format)),
        (None, false) => None,
    };

    if let Some(path) = target {
        write_report(format, &ctx, &path)?;
        return Ok(Some(path));
    }

    print!("{}", render_report(format, &ctx)?);
    Ok(None)
}

/// `<reports_dir>/<student_id>_eligibility.<ext>`
fn default_report_path(config: &Config, student_id: &str, format: ReportFormat) -> PathBuf {
    PathBuf::from(&config.paths.reports_dir)
        .join(format!("{student_id}_eligibility.{}", format.extension()))
}
