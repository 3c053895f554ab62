// Unit tests for AI Match

use ai_match::core::{
    evaluation::{assess_risks, confidence, data_health_score, readiness_score, recommend_path},
    scoring::{budget_match, geo_proximity, industry_match, match_reasons, semantic_similarity, FALLBACK_REASON, REASON_THRESHOLD},
    EvaluationEngine, MatchWeights, MatchingEngine,
};
use ai_match::models::{
    Confidentiality, DataSummary, DeliveryPath, DemandFeatures, EnterpriseStatus, EnterpriseType,
    Kpi, RiskLevel, ScoreBreakdown, VendorFeatures, HOME_REGION,
};
use chrono::NaiveDate;
use std::collections::HashMap;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn kpi() -> Kpi {
    Kpi {
        name: "recall".to_string(),
        target: "90%".to_string(),
        metric: "recall".to_string(),
    }
}

fn data(count: u64, labeled_ratio: f64, types: &[&str]) -> DataSummary {
    DataSummary {
        types: tags(types),
        counts: HashMap::from([("records".to_string(), count)]),
        labeled_ratio,
        size_bytes: 1_024_000,
        health_score: None,
    }
}

/// A spread of demands from empty to fully specified
fn demand_variants() -> Vec<DemandFeatures> {
    let mut variants = vec![DemandFeatures::default()];

    for (i, industry) in ["制造业", "医疗", "航天", ""].iter().enumerate() {
        for (j, scenario) in ["图像识别", "自然语言处理", "未知场景"].iter().enumerate() {
            let mut demand = DemandFeatures {
                title: format!("Demand {}-{}", i, j),
                description: "d".repeat(40 * (i + j)),
                industry_tags: if industry.is_empty() { vec![] } else { tags(&[*industry]) },
                scenario_tags: tags(&[*scenario]),
                budget_max: Some(25_000.0 * (i * 3 + j) as f64),
                budget_min: if j > 0 { Some(10_000.0) } else { None },
                confidentiality: if i % 2 == 0 { Confidentiality::Public } else { Confidentiality::Secret },
                ..Default::default()
            };
            if j == 2 {
                demand.kpis = vec![kpi()];
                demand.timeline_start = NaiveDate::from_ymd_opt(2026, 3, 1);
                demand.timeline_end = NaiveDate::from_ymd_opt(2026, 9, 1);
            }
            if i > 0 {
                demand.data_summary = Some(data(3_000 * i as u64 * (j as u64 + 1), 0.3 * j as f64, &["image", "csv", "text"][..i.min(3)]));
            }
            variants.push(demand);
        }
    }

    variants
}

#[test]
fn test_evaluation_scores_in_range() {
    let engine = EvaluationEngine::with_defaults();

    for demand in demand_variants() {
        let result = engine.evaluate_demand(&demand);

        for score in [
            result.feasibility_score,
            result.readiness_score,
            result.data_health_score,
            result.overall_score,
        ] {
            assert!((0.0..=100.0).contains(&score), "score out of range: {}", score);
        }
        assert!((0.0..=1.0).contains(&result.confidence));
        assert!(!result.notes.is_empty());

        let expected = result.feasibility_score * 0.40
            + result.readiness_score * 0.35
            + result.data_health_score * 0.25;
        assert!((result.overall_score - expected).abs() < 0.02);
    }
}

#[test]
fn test_evaluation_is_idempotent() {
    let engine = EvaluationEngine::with_defaults();
    for demand in demand_variants() {
        assert_eq!(engine.evaluate_demand(&demand), engine.evaluate_demand(&demand));
    }
}

#[test]
fn test_data_health_without_summary() {
    assert_eq!(data_health_score(None), 30.0);
    assert_eq!(data_health_score(Some(&data(12_000, 0.2, &["image", "csv"]))), 90.0);
    assert_eq!(data_health_score(Some(&data(999, 0.0, &["image", "csv", "text"]))), 65.0);
}

#[test]
fn test_readiness_includes_data_share() {
    let demand = DemandFeatures {
        description: "需".repeat(101),
        kpis: vec![kpi()],
        ..Default::default()
    };
    // 40 + 15 + 15 + 5
    assert_eq!(readiness_score(&demand, 50.0), 75.0);
}

#[test]
fn test_description_length_counts_characters() {
    // 100 multi-byte characters are more than 100 bytes but not "> 100 characters"
    let demand = DemandFeatures {
        description: "需".repeat(100),
        ..Default::default()
    };
    assert_eq!(readiness_score(&demand, 0.0), 40.0);
    assert_eq!(confidence(&demand), 0.5);
}

#[test]
fn test_zero_budget_counts_as_undeclared() {
    let demand = DemandFeatures {
        budget_min: Some(0.0),
        budget_max: Some(0.0),
        ..Default::default()
    };
    assert_eq!(readiness_score(&demand, 0.0), 40.0);
    assert_eq!(budget_match(demand.declared_budget_max()), 0.7);
}

#[test]
fn test_risk_levels() {
    let mut demand = DemandFeatures {
        budget_max: Some(500_000.0),
        timeline_end: NaiveDate::from_ymd_opt(2026, 12, 31),
        kpis: vec![kpi()],
        ..Default::default()
    };
    assert_eq!(assess_risks(&demand, 80.0), (RiskLevel::Low, vec![]));

    // 15 data + 10 secrecy
    demand.confidentiality = Confidentiality::Confidential;
    let (level, factors) = assess_risks(&demand, 60.0);
    assert_eq!(level, RiskLevel::Medium);
    assert_eq!(factors.len(), 2);

    // 30 data + 10 secrecy + 10 timeline
    demand.timeline_end = None;
    let (level, _) = assess_risks(&demand, 40.0);
    assert_eq!(level, RiskLevel::High);
}

#[test]
fn test_recommend_path_requires_healthy_data_for_direct() {
    assert_eq!(recommend_path(95.0, 95.0, 70.0), DeliveryPath::Direct);
    assert_eq!(recommend_path(100.0, 100.0, 69.0), DeliveryPath::Pilot);
    assert_eq!(recommend_path(50.0, 50.0, 50.0), DeliveryPath::Poc);
}

#[test]
fn test_match_weights_sum_to_one() {
    let weights = MatchWeights::default();
    assert!((weights.sum() - 1.0).abs() < 1e-9);
    assert_eq!(
        0.25 + 0.30 + 0.20 + 0.10 + 0.05 + 0.10,
        weights.industry_match
            + weights.semantic_similarity
            + weights.success_rate
            + weights.budget_match
            + weights.geo_proximity
            + weights.credit_score
    );
}

#[test]
fn test_dimension_scores() {
    assert_eq!(industry_match(&tags(&["零售"]), &tags(&["零售"])), 1.0);
    assert_eq!(semantic_similarity(&tags(&["NLP"]), &tags(&["nlp", "ocr"])), 0.5);
    assert_eq!(geo_proximity(HOME_REGION, "上海市", HOME_REGION), 0.5);
}

#[test]
fn test_reason_invariants() {
    let values = [0.0, 45.0, 69.99, 70.0, 85.0, 100.0];

    for (i, &a) in values.iter().enumerate() {
        for &b in &values[i..] {
            let breakdown = ScoreBreakdown {
                industry_match: a,
                semantic_similarity: b,
                success_rate: (a + b) / 2.0,
                budget_match: 70.0 - a / 10.0,
                geo_proximity: b,
                credit_score: a,
            };
            let reasons = match_reasons(&breakdown);
            let qualifying = breakdown
                .dimensions()
                .iter()
                .filter(|(_, score)| *score >= REASON_THRESHOLD)
                .count();

            assert!(reasons.len() <= 3);
            if qualifying == 0 {
                assert_eq!(reasons, vec![FALLBACK_REASON]);
            } else {
                assert_eq!(reasons.len(), qualifying.min(3));
                assert!(!reasons.iter().any(|r| r == FALLBACK_REASON));
            }
        }
    }
}

#[test]
fn test_match_scores_in_range_and_sorted() {
    let engine = MatchingEngine::with_default_weights();
    let vendors: Vec<VendorFeatures> = (0..24)
        .map(|i| VendorFeatures {
            id: i,
            name: format!("Vendor {}", i),
            enterprise_type: if i % 5 == 0 { EnterpriseType::Both } else { EnterpriseType::Supply },
            status: EnterpriseStatus::Verified,
            industry_tags: if i % 3 == 0 { vec![] } else { tags(&["制造业", "医疗"][..(i % 2 + 1) as usize]) },
            ai_capabilities: tags(&["图像识别", "OCR", "自然语言处理"][..(i % 3) as usize]),
            credit_score: (i * 4) as f64 + 5.0,
            address: if i % 2 == 0 { "重庆市".to_string() } else { "杭州市".to_string() },
            contact_email: None,
        })
        .collect();

    for demand in demand_variants() {
        let matches = engine.match_vendors(&demand, &vendors, 50);
        assert_eq!(matches.len(), vendors.len());

        for m in &matches {
            assert!((0.0..=100.0).contains(&m.score.total_score));
            for (_, score) in m.score.score_breakdown.dimensions() {
                assert!((0.0..=100.0).contains(&score));
            }
        }
        assert!(matches
            .windows(2)
            .all(|w| w[0].score.total_score >= w[1].score.total_score));
    }
}
