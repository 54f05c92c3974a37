//! Console rendering and the interactive text menu (ambient, out of the
//! core's scope per spec section 1 — I/O at the edges only). Grounded in
//! the teacher's `PrometheeProblem::print` (tabled tables) and
//! `original_source/console/interaction/main_menu.py` (menu loop).

use std::io::{self, Write};

use tabled::settings::Style;

use crate::ahp::AhpSolver;
use crate::context::Context;
use crate::entities::{AemComRunResult, AhpResult};
use crate::orchestrator::Orchestrator;
use crate::validator::Validator;

pub fn print_matrix(title: &str, items: &[String], matrix: &[Vec<f64>]) {
    let mut builder = tabled::builder::Builder::default();

    let mut header = vec![title.to_string()];
    header.extend(items.iter().cloned());
    builder.push_record(header);

    for (i, row) in matrix.iter().enumerate() {
        let mut record = vec![items[i].clone()];
        record.extend(row.iter().map(|v| format!("{v:.4}")));
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    println!("{table}");
}

pub fn print_ahp_result(result: &AhpResult) {
    println!("\nCriteria weights:");
    let mut builder = tabled::builder::Builder::default();
    builder.push_record(["criterion", "weight"]);
    for (id, w) in &result.criteria_weights {
        builder.push_record([id.clone(), format!("{w:.4}")]);
    }
    let mut table = builder.build();
    table.with(Style::modern());
    println!("{table}");
    println!(
        "Criteria consistency: CR={:.4} ({:.2}%)",
        result.criteria_consistency_ratio, result.criteria_consistency_percent
    );

    println!("\nGlobal alternative weights:");
    let mut builder = tabled::builder::Builder::default();
    builder.push_record(["alternative", "weight"]);
    for (id, w) in &result.global_alt_weights {
        builder.push_record([id.clone(), format!("{w:.4}")]);
    }
    let mut table = builder.build();
    table.with(Style::modern());
    println!("{table}");
}

pub fn print_run_result(title: &str, run: &AemComRunResult) {
    println!(
        "\n{title}: GCOMPI initial={:.6} final={:.6} min={:.6} iterations={}",
        run.gcompi_initial, run.gcompi_final, run.gcompi_min, run.iterations
    );
    print_matrix("final P'", &run.items, &run.final_matrix);
}

/// Non-interactive-capable text menu. Returns when the user quits.
pub fn run_menu(context: &mut Context) -> io::Result<()> {
    loop {
        println!("\n1) Validate context");
        println!("2) Run AHP");
        println!("3) Run AEM-COM (per settings.aem_com.apply_to)");
        println!("4) Print loaded criteria-level matrices");
        println!("5) Save result JSON");
        println!("6) Quit");
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match line.trim() {
            "1" => {
                let validator = Validator::new(context.group_model());
                let report = validator.validate(true);
                println!("Validity: {}%", report.percent);
                for issue in &report.issues {
                    println!(" - {issue}");
                }
            }
            "2" => match AhpSolver::solve(context.group_model()) {
                Ok(result) => {
                    print_ahp_result(&result);
                    context.set_ahp_result(result);
                }
                Err(e) => println!("AHP failed: {e}"),
            },
            "3" => match Orchestrator::run_full(context.group_model()) {
                Ok(result) => {
                    if let Some(criteria) = &result.criteria_result {
                        print_run_result("criteria level", &criteria.run);
                    }
                    for alt in &result.alternatives_results {
                        print_run_result(
                            &format!("alternatives for criterion '{}'", alt.criterion_id),
                            &alt.run,
                        );
                    }
                    context.set_aem_com_result(result);
                }
                Err(e) => println!("AEM-COM failed: {e}"),
            },
            "4" => {
                for m in &context.group_model().pairwise_matrices.criteria_level {
                    print_matrix(
                        m.expert_id.as_deref().unwrap_or("expert"),
                        &m.items,
                        &m.matrix,
                    );
                }
            }
            "5" => {
                print!("Output path: ");
                io::stdout().flush()?;
                let mut path = String::new();
                io::stdin().read_line(&mut path)?;
                match context.save_result_json(path.trim()) {
                    Ok(out) => println!("Saved to {}", out.display()),
                    Err(e) => println!("Save failed: {e}"),
                }
            }
            "6" | "q" | "quit" => return Ok(()),
            other => println!("Unrecognized option: {other}"),
        }
    }
}
