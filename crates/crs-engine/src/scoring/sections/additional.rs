use tracing::debug;

use super::tables::{
    ARRANGED_EMPLOYMENT_POINTS, CANADIAN_EDUCATION_LONG_POINTS, CANADIAN_EDUCATION_SHORT_POINTS,
    CANADIAN_FAMILY_POINTS, FRENCH_SKILLS_POINTS, PROVINCIAL_NOMINATION_POINTS,
};
use crate::scoring::breakdown::{ScoreFactor, Section, SectionScore};
use crate::scoring::domain::{ApplicantRecord, CanadianEducation};

pub fn canadian_education_points(education: CanadianEducation) -> u32 {
    match education {
        CanadianEducation::OneOrTwoYear => CANADIAN_EDUCATION_SHORT_POINTS,
        CanadianEducation::ThreeYearPlus => CANADIAN_EDUCATION_LONG_POINTS,
        CanadianEducation::None | CanadianEducation::SecondaryOrLess => 0,
    }
}

fn flag(enabled: bool, points: u32) -> u32 {
    if enabled {
        points
    } else {
        0
    }
}

/// Section D.
pub(crate) fn additional_points(record: &ApplicantRecord) -> SectionScore {
    let mut section = SectionScore::new(Section::AdditionalPoints);

    section.record(
        ScoreFactor::ProvincialNomination,
        flag(record.has_provincial_nomination, PROVINCIAL_NOMINATION_POINTS),
    );
    section.record(ScoreFactor::ArrangedEmployment, ARRANGED_EMPLOYMENT_POINTS);
    section.record(
        ScoreFactor::CanadianEducation,
        canadian_education_points(record.canadian_education),
    );
    section.record(
        ScoreFactor::CanadianFamily,
        flag(record.has_canadian_family, CANADIAN_FAMILY_POINTS),
    );
    section.record(
        ScoreFactor::FrenchSkills,
        flag(record.has_french_language_skills, FRENCH_SKILLS_POINTS),
    );

    section.points = section.detail_sum();
    debug!(points = section.points, "scored additional points");
    section
}
