use tracing::debug;

use super::tables::{
    CombinationTier, EDUCATION_CANADIAN_EXPERIENCE_TIERS, EDUCATION_LANGUAGE_TIERS,
    FOREIGN_CANADIAN_EXPERIENCE_TIERS, FOREIGN_EXPERIENCE_LANGUAGE_TIERS, TRANSFERABILITY_CAP,
};
use crate::scoring::breakdown::{ScoreFactor, Section, SectionScore};
use crate::scoring::domain::{ApplicantRecord, ClbLevels};

/// Points from the first tier both factors reach.
fn combination(tiers: &[CombinationTier], primary: u8, secondary: u8) -> u32 {
    tiers
        .iter()
        .find(|tier| primary >= tier.primary_min && secondary >= tier.secondary_min)
        .map(|tier| tier.points)
        .unwrap_or(0)
}

/// Section C. Details carry the four uncapped bonuses; `points` is capped at 100.
pub(crate) fn skill_transferability(
    record: &ApplicantRecord,
    first_language: &ClbLevels,
) -> SectionScore {
    let best_clb = first_language.highest();
    let education = record.education_level;
    let canadian = record.canadian_experience_years;
    let foreign = record.foreign_experience_years;

    let mut section = SectionScore::new(Section::SkillTransferability);
    section.record(
        ScoreFactor::EducationLanguage,
        combination(&EDUCATION_LANGUAGE_TIERS, education, best_clb),
    );
    section.record(
        ScoreFactor::EducationCanadianExperience,
        combination(&EDUCATION_CANADIAN_EXPERIENCE_TIERS, education, canadian),
    );
    section.record(
        ScoreFactor::ForeignExperienceLanguage,
        combination(&FOREIGN_EXPERIENCE_LANGUAGE_TIERS, foreign, best_clb),
    );
    section.record(
        ScoreFactor::ForeignCanadianExperience,
        combination(&FOREIGN_CANADIAN_EXPERIENCE_TIERS, foreign, canadian),
    );

    let raw = section.detail_sum();
    section.points = raw.min(TRANSFERABILITY_CAP);
    debug!(raw, points = section.points, best_clb, "scored skill transferability");
    section
}
