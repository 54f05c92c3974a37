//! End-to-end: JSON ingest -> AHP solve -> AEM-COM orchestration -> result
//! payload, covering invariant 8 (global weights normalization) and the
//! orchestrator's declared-order guarantee across the full pipeline.

use ahp_aem_com::ahp::AhpSolver;
use ahp_aem_com::context::Context;
use ahp_aem_com::orchestrator::Orchestrator;
use ahp_aem_com::validator::Validator;

fn document() -> &'static str {
    r#"
    {
      "problem": {"id": "p1", "name": "Pick a vendor", "description": "vendor selection", "goal": "choose best"},
      "experts": [
        {"id": "e1", "name": "Alice", "role": "lead", "weight": 0.6},
        {"id": "e2", "name": "Bob", "role": "reviewer", "weight": 0.4}
      ],
      "model": {
        "criteria": [
          {"id": "cost", "name": "Cost", "description": ""},
          {"id": "quality", "name": "Quality", "description": ""}
        ],
        "alternatives": [
          {"id": "a1", "name": "Vendor A", "description": ""},
          {"id": "a2", "name": "Vendor B", "description": ""},
          {"id": "a3", "name": "Vendor C", "description": ""}
        ]
      },
      "settings": {
        "ahp_scale": "saaty_1_9",
        "aem_com": {
          "permissibility": 0.3,
          "apply_to": ["criteria", "alternatives_by_criterion"],
          "max_iterations": 50,
          "initial_mode": "aij",
          "strict_decrease": false
        }
      },
      "pairwise_matrices": {
        "criteria_level": [
          {"expert_id": "e1", "items": ["cost", "quality"], "matrix": [[1.0, 2.0], [0.5, 1.0]]},
          {"expert_id": "e2", "items": ["cost", "quality"], "matrix": [[1.0, 3.0], [0.3333333333333333, 1.0]]}
        ],
        "alternative_level": [
          {
            "expert_id": "e1", "criterion_id": "cost",
            "items": ["a1", "a2", "a3"],
            "matrix": [[1.0, 2.0, 4.0], [0.5, 1.0, 2.0], [0.25, 0.5, 1.0]]
          },
          {
            "expert_id": "e2", "criterion_id": "cost",
            "items": ["a1", "a2", "a3"],
            "matrix": [[1.0, 3.0, 5.0], [0.3333333333333333, 1.0, 2.0], [0.2, 0.5, 1.0]]
          },
          {
            "expert_id": "e1", "criterion_id": "quality",
            "items": ["a1", "a2", "a3"],
            "matrix": [[1.0, 0.5, 2.0], [2.0, 1.0, 3.0], [0.5, 0.3333333333333333, 1.0]]
          },
          {
            "expert_id": "e2", "criterion_id": "quality",
            "items": ["a1", "a2", "a3"],
            "matrix": [[1.0, 0.3333333333333333, 1.0], [3.0, 1.0, 2.0], [1.0, 0.5, 1.0]]
          }
        ]
      }
    }
    "#
}

#[test]
fn full_pipeline_produces_normalized_global_weights_and_ordered_results() {
    let model = ahp_aem_com::ingest::load_from_str(document()).unwrap();

    let report = Validator::new(&model).validate(true);
    assert_eq!(report.percent, 100);
    assert!(report.issues.is_empty());

    let ahp_result = AhpSolver::solve(&model).unwrap();
    let total: f64 = ahp_result.global_alt_weights.values().sum();
    assert!((total - 1.0).abs() < 1e-9);

    let aem_result = Orchestrator::run_full(&model).unwrap();
    assert!(aem_result.criteria_result.is_some());
    assert_eq!(aem_result.alternatives_results.len(), 2);
    assert_eq!(aem_result.alternatives_results[0].criterion_id, "cost");
    assert_eq!(aem_result.alternatives_results[1].criterion_id, "quality");

    let mut context = Context::new(model);
    context.set_ahp_result(ahp_result);
    context.set_aem_com_result(aem_result);

    let payload = context.build_result_payload().unwrap();
    assert!(payload["result"]["aem_com"]["summary"]["gcompi_final_total"].is_number());
    assert!(payload["ahp_result"]["global_alt_weights"].is_object());
}
