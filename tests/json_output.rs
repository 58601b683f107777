use kira_poolcalc::ctx::Ctx;
use kira_poolcalc::io::json_writer::build_report;
use kira_poolcalc::pooling::flags::{compute_usage_flags, usage_notes};
use kira_poolcalc::pooling::{PoolInput, PoolTable, PoolingOptions, compute};

fn make_ctx(pools: Vec<PoolInput>, options: PoolingOptions) -> Ctx {
    let mut ctx = Ctx::new(
        None,
        std::path::PathBuf::from("out"),
        options,
        true,
        true,
        "0.0.0-test",
    );
    ctx.table = PoolTable::from_pools(pools).unwrap();
    let outcome = compute(ctx.table.pools(), &ctx.options);
    ctx.usage_flags = compute_usage_flags(&outcome, &ctx.options);
    ctx.notes = usage_notes(&ctx.options);
    ctx.outcome = Some(outcome);
    ctx
}

#[test]
fn json_report_populated() {
    let ctx = make_ctx(
        PoolTable::default_pools().into_pools(),
        PoolingOptions::default(),
    );
    let report = build_report(&ctx).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["tool"], "kira-poolcalc");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["options"]["concentration_source"], "calculated");
    assert_eq!(json["options"]["maximize_volumes"], true);
    assert_eq!(json["input_meta"]["source"], "built-in");
    assert_eq!(json["input_meta"]["n_pools"], 3);
    assert_eq!(json["pools"].as_array().unwrap().len(), 3);
    assert_eq!(json["pools"][2]["limiting"], true);
    assert!(json["pools"][0]["total_nM_added"].is_number());
    assert_eq!(json["final_pool"]["total_samples"], 361);
    assert!(json["final_pool"]["nM_per_sample"].is_number());
    assert_eq!(json["usage_flags"].as_array().unwrap().len(), 3);
    assert_eq!(json["notes"].as_array().unwrap().len(), 1);
}

#[test]
fn non_finite_values_become_null() {
    let ctx = make_ctx(
        vec![
            PoolInput::new(1, 10.0, 50.0, 0),
            PoolInput::new(2, 10.0, 50.0, 12),
        ],
        PoolingOptions::default(),
    );
    let json = serde_json::to_value(build_report(&ctx).unwrap()).unwrap();
    assert!(json["pools"][0]["final_volume"].is_null());
    assert!(json["pools"][1]["sample_ratio"].is_null());
    assert!(json["final_pool"]["nM_per_sample"].is_null());
}

#[test]
fn report_requires_results() {
    let ctx = Ctx::new(
        None,
        std::path::PathBuf::from("out"),
        PoolingOptions::default(),
        false,
        false,
        "0.0.0-test",
    );
    assert!(build_report(&ctx).is_err());
}
