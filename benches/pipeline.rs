//! Full-pipeline benchmark: raw profile → expansion → alignment → assessment.

use churn_risk::config::RiskConfig;
use churn_risk::features::prepare_input;
use churn_risk::model::LogisticModel;
use churn_risk::{FeatureSchema, RawProfile, RiskEngine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn trained_schema() -> FeatureSchema {
    FeatureSchema::from_columns(
        [
            "tenure",
            "MonthlyCharges",
            "TotalCharges",
            "Contract_Month-to-month",
            "Contract_One year",
            "Contract_Two year",
            "InternetService_DSL",
            "InternetService_Fiber optic",
            "InternetService_No",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect(),
    )
}

fn bench_prepare_input(c: &mut Criterion) {
    let schema = trained_schema();
    let profile = RawProfile {
        tenure: 24,
        monthly_charges: 85.0,
        total_charges: 2040.0,
        contract: "One year".to_string(),
        internet_service: "DSL".to_string(),
    };

    c.bench_function("prepare_input", |b| {
        b.iter(|| prepare_input(black_box(&profile), black_box(&schema)))
    });
}

fn bench_profile_to_assessment(c: &mut Criterion) {
    let schema = trained_schema();
    let model = LogisticModel {
        weights: vec![0.02; schema.len()],
        intercept: -1.0,
    };
    let engine = RiskEngine::new(RiskConfig::default());
    let profile = RawProfile {
        tenure: 1,
        monthly_charges: 95.0,
        total_charges: 95.0,
        contract: "Month-to-month".to_string(),
        internet_service: "Fiber optic".to_string(),
    };

    c.bench_function("profile_to_assessment", |b| {
        b.iter(|| {
            let v = prepare_input(black_box(&profile), &schema);
            engine.assess(&v, &model)
        })
    });
}

criterion_group!(benches, bench_prepare_input, bench_profile_to_assessment);
criterion_main!(benches);
