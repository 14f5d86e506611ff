//! CRS point grids. Every lookup falls back to 0 outside the published keys.

/// Youngest age carried in [`AGE_POINTS`].
pub(crate) const MIN_TABLE_AGE: u8 = 17;

/// Points for ages 17 through 45; the peak is 135 at 35.
pub(crate) const AGE_POINTS: [u32; 29] = [
    0, 90, 95, 100, 105, 110, 112, 114, 116, 118, 120, 122, 124, 126, 128, 130, 132, 134, 135,
    131, 127, 123, 119, 115, 111, 107, 103, 99, 95,
];

/// A pair of columns: the applicant has an accompanying spouse, or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpouseColumns {
    pub with_spouse: u32,
    pub without_spouse: u32,
}

impl SpouseColumns {
    pub const fn pick(self, has_spouse: bool) -> u32 {
        if has_spouse {
            self.with_spouse
        } else {
            self.without_spouse
        }
    }
}

const fn cols(with_spouse: u32, without_spouse: u32) -> SpouseColumns {
    SpouseColumns {
        with_spouse,
        without_spouse,
    }
}

/// Education levels 1 through 8.
pub(crate) const EDUCATION_POINTS: [SpouseColumns; 8] = [
    cols(0, 0),
    cols(28, 30),
    cols(84, 90),
    cols(91, 98),
    cols(112, 120),
    cols(119, 128),
    cols(126, 135),
    cols(140, 150),
];

/// Canadian work experience, 0 through 5 years.
///
/// Kept exactly as shipped. At 3 and 4 years the with-spouse column exceeds the
/// without-spouse column, the reverse of every other row and of the education grid. Whether
/// that is a transcription slip in the source grid is unconfirmed; do not reorder without the
/// official table in hand.
pub(crate) const CANADIAN_EXPERIENCE_POINTS: [SpouseColumns; 6] = [
    cols(0, 0),
    cols(35, 40),
    cols(63, 70),
    cols(84, 80),
    cols(105, 100),
    cols(119, 120),
];

/// Spouse education levels 1 through 8.
pub(crate) const SPOUSE_EDUCATION_POINTS: [u32; 8] = [0, 2, 6, 7, 8, 9, 10, 10];

/// Spouse Canadian work experience, 0 through 5 years.
pub(crate) const SPOUSE_CANADIAN_EXPERIENCE_POINTS: [u32; 6] = [0, 5, 7, 8, 9, 10];

/// Per-skill CLB ladder: the first step whose minimum the level reaches pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageLadder {
    pub steps: &'static [(u8, SpouseColumns)],
}

impl LanguageLadder {
    pub fn points_for(&self, clb: u8, has_spouse: bool) -> u32 {
        self.steps
            .iter()
            .find(|(minimum, _)| clb >= *minimum)
            .map(|(_, points)| points.pick(has_spouse))
            .unwrap_or(0)
    }
}

/// First official language, keyed on CLB 9/8/7/6.
///
/// Another build of this calculator keyed the same payouts at CLB 7/6/5/4, which scores the
/// same applicant very differently. Confirm against the current official grid before editing;
/// the calculators only ever read this constant.
pub const FIRST_LANGUAGE_LADDER: LanguageLadder = LanguageLadder {
    steps: &[
        (9, cols(31, 32)),
        (8, cols(22, 23)),
        (7, cols(16, 17)),
        (6, cols(8, 9)),
    ],
};

/// Second official language, keyed on CLB 9/7/6; at most 24 across four skills.
pub const SECOND_LANGUAGE_LADDER: LanguageLadder = LanguageLadder {
    steps: &[(9, cols(6, 6)), (7, cols(3, 3)), (6, cols(1, 1))],
};

/// Spouse language: a flat 5 per skill from CLB 4.
pub const SPOUSE_LANGUAGE_LADDER: LanguageLadder = LanguageLadder {
    steps: &[(4, cols(5, 5))],
};

/// One tier of a skill-transferability combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CombinationTier {
    pub primary_min: u8,
    pub secondary_min: u8,
    pub points: u32,
}

const fn tier(primary_min: u8, secondary_min: u8, points: u32) -> CombinationTier {
    CombinationTier {
        primary_min,
        secondary_min,
        points,
    }
}

/// Education level with best first-language CLB.
pub(crate) const EDUCATION_LANGUAGE_TIERS: [CombinationTier; 3] =
    [tier(5, 7, 50), tier(4, 7, 25), tier(3, 7, 13)];

/// Education level with Canadian experience years.
pub(crate) const EDUCATION_CANADIAN_EXPERIENCE_TIERS: [CombinationTier; 3] =
    [tier(5, 1, 50), tier(4, 1, 25), tier(3, 1, 13)];

/// Foreign experience years with best first-language CLB.
pub(crate) const FOREIGN_EXPERIENCE_LANGUAGE_TIERS: [CombinationTier; 3] =
    [tier(3, 7, 50), tier(2, 7, 25), tier(1, 7, 13)];

/// Foreign experience years with Canadian experience years.
pub(crate) const FOREIGN_CANADIAN_EXPERIENCE_TIERS: [CombinationTier; 3] =
    [tier(3, 2, 50), tier(2, 2, 25), tier(1, 1, 13)];

/// Ceiling on the skill-transferability section.
pub(crate) const TRANSFERABILITY_CAP: u32 = 100;

pub(crate) const PROVINCIAL_NOMINATION_POINTS: u32 = 600;
pub(crate) const CANADIAN_EDUCATION_SHORT_POINTS: u32 = 15;
pub(crate) const CANADIAN_EDUCATION_LONG_POINTS: u32 = 30;
pub(crate) const CANADIAN_FAMILY_POINTS: u32 = 15;
pub(crate) const FRENCH_SKILLS_POINTS: u32 = 25;
/// Arranged employment no longer earns points; the line stays in the breakdown at zero.
pub(crate) const ARRANGED_EMPLOYMENT_POINTS: u32 = 0;

/// `table[key - offset]`, or `None` outside the table.
pub(crate) fn lookup<T: Copy>(table: &[T], key: u8, offset: u8) -> Option<T> {
    key.checked_sub(offset)
        .and_then(|index| table.get(usize::from(index)))
        .copied()
}
