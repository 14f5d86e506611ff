//! CRS scoring: input validation, CLB conversion, the four section calculators, and the
//! aggregator that assembles a [`ScoreBreakdown`].
//!
//! All grids are immutable constants, so a [`ScoringEngine`] can be shared across threads and
//! requests without locking.

pub mod breakdown;
pub mod domain;
pub mod language;
pub mod router;
pub mod sections;
pub mod validation;

#[cfg(test)]
mod tests;

pub use breakdown::{LanguageLevels, ScoreBreakdown, ScoreFactor, Section, SectionScore};
pub use domain::{
    ApplicantInput, ApplicantRecord, CanadianEducation, ClbLevels, LanguageInput, LanguageResult,
    LanguageSkill, LanguageTest, MaritalStatus, RawScore, SkillScores, SpouseProfile,
};
pub use router::scoring_router;
pub use validation::{ApplicantValidator, ValidationError};

use tracing::info;

/// Stateless engine: validate, convert language results, score sections, sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    validator: ApplicantValidator,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw input and score it. Nothing is scored if validation fails.
    pub fn calculate(&self, input: &ApplicantInput) -> Result<ScoreBreakdown, ValidationError> {
        let record = self.validator.validate(input)?;
        Ok(self.score(&record))
    }

    /// Score an already validated record.
    pub fn score(&self, record: &ApplicantRecord) -> ScoreBreakdown {
        let first_language = language::convert_result(&record.first_language);
        let second_language = record
            .second_language
            .as_ref()
            .map(language::convert_result);
        let spouse_language = record
            .spouse
            .as_ref()
            .filter(|_| record.has_spouse())
            .and_then(|spouse| spouse.language.as_ref())
            .map(language::convert_result);

        let core_human_capital =
            sections::core_human_capital(record, &first_language, second_language.as_ref());
        let spouse_factors = sections::spouse_factors(record, spouse_language.as_ref());
        let skill_transferability = sections::skill_transferability(record, &first_language);
        let additional_points = sections::additional_points(record);

        let total = core_human_capital.points
            + spouse_factors.points
            + skill_transferability.points
            + additional_points.points;

        info!(
            total,
            core = core_human_capital.points,
            spouse = spouse_factors.points,
            transferability = skill_transferability.points,
            additional = additional_points.points,
            "calculated CRS score"
        );

        ScoreBreakdown {
            total,
            core_human_capital,
            spouse_factors,
            skill_transferability,
            additional_points,
            language_levels: LanguageLevels {
                first_language,
                second_language,
                spouse_language,
            },
        }
    }
}

/// Validate and score one applicant with a default engine.
pub fn calculate(input: &ApplicantInput) -> Result<ScoreBreakdown, ValidationError> {
    ScoringEngine::new().calculate(input)
}
