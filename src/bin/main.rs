//! Command-line entry point: loads a context document, optionally runs the
//! full pipeline non-interactively, and otherwise hands off to the
//! interactive text menu.

use std::process::ExitCode;

use anyhow::{bail, Context as _};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ahp_aem_com::ahp::AhpSolver;
use ahp_aem_com::console;
use ahp_aem_com::context::Context;
use ahp_aem_com::orchestrator::Orchestrator;
use ahp_aem_com::validator::Validator;

#[derive(Parser)]
#[command(name = "ahp-aem-com")]
#[command(about = "Group AHP / AEM-COM consensus engine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Context document to load (required).
    #[arg(short, long)]
    file: Option<String>,

    /// Output path for the result JSON: a `.json` file, or a directory that
    /// receives a timestamped file.
    #[arg(short, long)]
    output: Option<String>,

    /// Run AHP and AEM-COM non-interactively, then exit.
    #[arg(short, long)]
    auto: bool,

    /// Enable debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.auto && cli.file.is_none() {
        bail!(ahp_aem_com::AhpError::Usage(
            "-a/--auto requires -f/--file".into()
        ));
    }

    let Some(file) = cli.file else {
        bail!(ahp_aem_com::AhpError::Usage(
            "-f/--file is required".into()
        ));
    };

    let mut context = Context::from_json_file(&file)
        .with_context(|| format!("loading context document from {file}"))?;

    if !cli.auto {
        console::run_menu(&mut context).context("running interactive menu")?;
        return Ok(());
    }

    let report = Validator::new(context.group_model()).validate(true);
    info!(percent = report.percent, "validation report");
    for issue in &report.issues {
        info!(issue = %issue, "validation issue");
    }

    let ahp_result = AhpSolver::solve(context.group_model()).context("running AHP")?;
    console::print_ahp_result(&ahp_result);
    context.set_ahp_result(ahp_result);

    let aem_com_result = Orchestrator::run_full(context.group_model())
        .context("running AEM-COM orchestrator")?;
    if let Some(criteria) = &aem_com_result.criteria_result {
        console::print_run_result("criteria level", &criteria.run);
    }
    for alt in &aem_com_result.alternatives_results {
        console::print_run_result(
            &format!("alternatives for criterion '{}'", alt.criterion_id),
            &alt.run,
        );
    }
    context.set_aem_com_result(aem_com_result);

    if let Some(output) = cli.output {
        let out_file = context
            .save_result_json(&output)
            .context("saving result JSON")?;
        info!(path = %out_file.display(), "result written");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert()
    }

    #[test]
    fn auto_without_file_is_rejected() {
        let cli = Cli::parse_from(["ahp-aem-com", "-a"]);
        assert!(run(cli).is_err());
    }
}
