use tracing::debug;

use super::tables::{lookup, CANADIAN_EXPERIENCE_POINTS};
use super::{
    age_points, education_points, language_points, FIRST_LANGUAGE_LADDER, SECOND_LANGUAGE_LADDER,
};
use crate::scoring::breakdown::{ScoreFactor, Section, SectionScore};
use crate::scoring::domain::{ApplicantRecord, ClbLevels};

/// Canadian work experience points for 0-5 years in the applicant's spouse column.
pub fn canadian_experience_points(years: u8, has_spouse: bool) -> u32 {
    lookup(&CANADIAN_EXPERIENCE_POINTS, years, 0)
        .map(|columns| columns.pick(has_spouse))
        .unwrap_or(0)
}

/// Section A. Uncapped; the input domain bounds it.
pub(crate) fn core_human_capital(
    record: &ApplicantRecord,
    first_language: &ClbLevels,
    second_language: Option<&ClbLevels>,
) -> SectionScore {
    let has_spouse = record.has_spouse();
    let mut section = SectionScore::new(Section::CoreHumanCapital);

    section.record(ScoreFactor::Age, age_points(record.age));
    section.record(
        ScoreFactor::Education,
        education_points(record.education_level, has_spouse),
    );
    section.record(
        ScoreFactor::FirstLanguage,
        language_points(&FIRST_LANGUAGE_LADDER, first_language, has_spouse),
    );
    section.record(
        ScoreFactor::SecondLanguage,
        second_language
            .map(|levels| language_points(&SECOND_LANGUAGE_LADDER, levels, has_spouse))
            .unwrap_or(0),
    );
    section.record(
        ScoreFactor::CanadianExperience,
        canadian_experience_points(record.canadian_experience_years, has_spouse),
    );

    section.points = section.detail_sum();
    debug!(points = section.points, has_spouse, "scored core human capital");
    section
}
