use tracing::debug;

use super::tables::{
    lookup, SPOUSE_CANADIAN_EXPERIENCE_POINTS, SPOUSE_EDUCATION_POINTS, SPOUSE_LANGUAGE_LADDER,
};
use super::language_points;
use crate::scoring::breakdown::{ScoreFactor, Section, SectionScore};
use crate::scoring::domain::{ApplicantRecord, ClbLevels};

pub fn spouse_education_points(education_level: u8) -> u32 {
    lookup(&SPOUSE_EDUCATION_POINTS, education_level, 1).unwrap_or(0)
}

pub fn spouse_canadian_experience_points(years: u8) -> u32 {
    lookup(&SPOUSE_CANADIAN_EXPERIENCE_POINTS, years, 0).unwrap_or(0)
}

/// Section B. An applicant without a spouse gets an empty, zero-point section; a spouse with
/// no recorded details scores 0 on each line.
pub(crate) fn spouse_factors(
    record: &ApplicantRecord,
    spouse_language: Option<&ClbLevels>,
) -> SectionScore {
    let mut section = SectionScore::new(Section::SpouseFactors);
    if !record.has_spouse() {
        return section;
    }
    let spouse = record.spouse.as_ref();

    section.record(
        ScoreFactor::SpouseEducation,
        spouse
            .and_then(|spouse| spouse.education_level)
            .map(spouse_education_points)
            .unwrap_or(0),
    );
    section.record(
        ScoreFactor::SpouseLanguage,
        spouse_language
            .map(|levels| language_points(&SPOUSE_LANGUAGE_LADDER, levels, true))
            .unwrap_or(0),
    );
    section.record(
        ScoreFactor::SpouseCanadianExperience,
        spouse_canadian_experience_points(
            spouse
                .map(|spouse| spouse.canadian_experience_years)
                .unwrap_or(0),
        ),
    );

    section.points = section.detail_sum();
    debug!(points = section.points, "scored spouse factors");
    section
}
