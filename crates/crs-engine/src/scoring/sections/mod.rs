//! Per-section point calculators. Each one is total: any input the validator accepts yields a
//! score, and keys outside a grid score 0.

mod additional;
mod human_capital;
mod spouse;
pub mod tables;
mod transferability;

pub(crate) use additional::additional_points;
pub use additional::canadian_education_points;
pub(crate) use human_capital::core_human_capital;
pub use human_capital::canadian_experience_points;
pub(crate) use spouse::spouse_factors;
pub use spouse::{spouse_canadian_experience_points, spouse_education_points};
pub(crate) use transferability::skill_transferability;

pub use tables::{
    LanguageLadder, SpouseColumns, FIRST_LANGUAGE_LADDER, SECOND_LANGUAGE_LADDER,
    SPOUSE_LANGUAGE_LADDER,
};

use tables::{lookup, AGE_POINTS, EDUCATION_POINTS, MIN_TABLE_AGE};

use super::domain::ClbLevels;

/// Age points; 0 outside the 17-45 grid.
pub fn age_points(age: u8) -> u32 {
    lookup(&AGE_POINTS, age, MIN_TABLE_AGE).unwrap_or(0)
}

/// Education points for levels 1-8 in the applicant's spouse column.
pub fn education_points(education_level: u8, has_spouse: bool) -> u32 {
    lookup(&EDUCATION_POINTS, education_level, 1)
        .map(|columns| columns.pick(has_spouse))
        .unwrap_or(0)
}

/// Sum a ladder over all four skills.
pub fn language_points(ladder: &LanguageLadder, levels: &ClbLevels, has_spouse: bool) -> u32 {
    levels
        .iter()
        .map(|(_, clb)| ladder.points_for(*clb, has_spouse))
        .sum()
}
