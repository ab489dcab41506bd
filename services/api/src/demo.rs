use std::sync::Arc;

use clap::Args;
use relo_ai::error::AppError;
use relo_ai::workflows::destinations::{
    DestinationService, JobField, QualityOfLifeWeights, Recommendation, RecommendationReport,
    RecommendationRequest, StaticCountryCatalog, UserProfile, ValidationError, Weights,
};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Declared language of the user
    #[arg(long, default_value = "Korean")]
    pub(crate) language: String,
    /// ISCO-08 major-group code for the user's job field (0-9)
    #[arg(long, default_value = "2")]
    pub(crate) job_field: String,
    /// Weight for language compatibility (multiple of 10)
    #[arg(long, default_value_t = 0)]
    pub(crate) language_weight: u32,
    /// Weight for job-market fit (multiple of 10)
    #[arg(long, default_value_t = 0)]
    pub(crate) job_weight: u32,
    /// Weight for quality of life (multiple of 10)
    #[arg(long, default_value_t = 0)]
    pub(crate) quality_weight: u32,
    /// Number of destinations to print
    #[arg(long, default_value_t = 5)]
    pub(crate) top_k: usize,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        language,
        job_field,
        language_weight,
        job_weight,
        quality_weight,
        top_k,
    } = args;

    let job_field = JobField::from_code(job_field.trim())
        .ok_or(ValidationError::InvalidJobField(job_field.clone()))
        .map_err(relo_ai::workflows::destinations::DestinationServiceError::from)?;

    let request = RecommendationRequest {
        profile: UserProfile {
            language,
            job_field,
            quality_of_life_weights: QualityOfLifeWeights::even_split(),
        },
        weights: Weights {
            language: language_weight,
            job: job_weight,
            quality_of_life: quality_weight,
        },
        top_k: Some(top_k),
    };

    let service = DestinationService::new(Arc::new(StaticCountryCatalog::seed()))
        .map_err(relo_ai::workflows::destinations::DestinationServiceError::from)?;
    let report = service.recommend(&request)?;

    render_report(&request, &report);
    Ok(())
}

fn render_report(request: &RecommendationRequest, report: &RecommendationReport) {
    println!("Destination recommendation demo");
    println!(
        "Profile: language {}, job field {} ({})",
        request.profile.language, request.profile.job_field.code, request.profile.job_field.name_en
    );
    println!(
        "Applied weights: language {:.0}%, job {:.0}%, quality of life {:.0}%",
        report.applied_weights.language * 100.0,
        report.applied_weights.job * 100.0,
        report.applied_weights.quality_of_life * 100.0
    );
    println!(
        "Candidates considered: {}",
        report.total_candidates
    );

    println!("\nRanked destinations");
    for recommendation in &report.recommendations {
        render_recommendation(recommendation);
    }
}

fn render_recommendation(recommendation: &Recommendation) {
    println!(
        "{}. {} ({}) | total {:.2}",
        recommendation.rank,
        recommendation.country.name,
        recommendation.country.code,
        recommendation.total_score
    );
    println!(
        "   language {:.2} | job {:.2} | quality of life {:.2}",
        recommendation.breakdown.language_score,
        recommendation.breakdown.job_score,
        recommendation.breakdown.quality_of_life_score
    );
    for reason in &recommendation.reasons {
        println!("   - {reason}");
    }
}
