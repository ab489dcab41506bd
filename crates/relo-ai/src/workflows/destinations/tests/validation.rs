use super::common::*;
use crate::workflows::destinations::domain::{ValidationError, Weights};
use crate::workflows::destinations::service::{DestinationServiceError, RecommendationRequest};

#[test]
fn weights_that_are_not_multiples_of_ten_are_rejected() {
    // Sum is 100, granularity is wrong.
    let error = weights(33, 33, 34).validate().expect_err("expected rejection");
    assert_eq!(error, ValidationError::WeightGranularity);
}

#[test]
fn weights_that_do_not_sum_to_one_hundred_are_rejected() {
    let error = weights(30, 30, 30).validate().expect_err("expected rejection");
    assert_eq!(error, ValidationError::WeightSum { sum: 90 });
}

#[test]
fn valid_triples_and_the_unset_triple_pass() {
    assert!(weights(50, 20, 30).validate().is_ok());
    assert!(weights(100, 0, 0).validate().is_ok());
    assert!(Weights::default().validate().is_ok());
}

#[test]
fn unsupported_language_is_rejected_at_the_boundary() {
    let mut user = profile("Korean", "2");
    user.language = "Klingon".to_string();

    let error = user.validate().expect_err("expected rejection");
    assert_eq!(
        error,
        ValidationError::UnsupportedLanguage("Klingon".to_string())
    );
}

#[test]
fn job_field_codes_outside_the_taxonomy_are_rejected() {
    let mut user = profile("Korean", "2");
    user.job_field.code = "12".to_string();

    let error = user.validate().expect_err("expected rejection");
    assert_eq!(error, ValidationError::InvalidJobField("12".to_string()));
}

#[test]
fn quality_weights_must_be_non_negative_and_sum_to_one_hundred() {
    let mut user = profile("Korean", "2");
    user.quality_of_life_weights.safety = -5.0;
    user.quality_of_life_weights.income = 45.0;
    assert_eq!(
        user.validate().expect_err("expected rejection"),
        ValidationError::NegativeQualityWeight
    );

    let mut user = profile("Korean", "2");
    user.quality_of_life_weights.safety = 10.0;
    let error = user.validate().expect_err("expected rejection");
    assert!(matches!(error, ValidationError::QualityWeightSum { .. }));
}

#[test]
fn service_rejects_invalid_weights_before_scoring() {
    let service = seed_service();
    let request = RecommendationRequest {
        profile: profile("Korean", "2"),
        weights: weights(33, 33, 34),
        top_k: None,
    };

    let error = service.recommend(&request).expect_err("expected rejection");
    assert!(matches!(
        error,
        DestinationServiceError::Validation(ValidationError::WeightGranularity)
    ));
}

#[test]
fn service_surfaces_catalog_failures() {
    use std::sync::Arc;

    use crate::workflows::destinations::service::DestinationService;

    let service =
        DestinationService::new(Arc::new(UnavailableCatalog)).expect("service builds");
    let request = RecommendationRequest {
        profile: profile("Korean", "2"),
        weights: weights(30, 30, 40),
        top_k: None,
    };

    let error = service.recommend(&request).expect_err("expected failure");
    assert!(matches!(error, DestinationServiceError::Catalog(_)));
}

#[test]
fn service_returns_an_empty_report_for_an_empty_catalog() {
    use std::sync::Arc;

    use crate::workflows::destinations::catalog::StaticCountryCatalog;
    use crate::workflows::destinations::service::DestinationService;

    let service = DestinationService::new(Arc::new(StaticCountryCatalog::new(Vec::new())))
        .expect("service builds");
    let request = RecommendationRequest {
        profile: profile("Korean", "2"),
        weights: weights(30, 30, 40),
        top_k: None,
    };

    let report = service.recommend(&request).expect("empty catalog is valid");
    assert_eq!(report.total_candidates, 0);
    assert!(report.recommendations.is_empty());
}
