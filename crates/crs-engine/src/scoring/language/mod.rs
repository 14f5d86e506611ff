//! Language test score to Canadian Language Benchmark conversion.

mod tables;

pub use tables::{NumericLadder, ScoreBand};

use super::domain::{ClbLevels, LanguageResult, LanguageSkill, LanguageTest, RawScore};
use serde::{Deserialize, Serialize};
use tables::*;

/// Highest CLB level the grids award.
pub const MAX_CLB: u8 = 10;

/// Convert one raw skill score to its CLB level. Unknown band tokens and unusable numbers
/// resolve to 0.
pub fn convert(test: LanguageTest, skill: LanguageSkill, raw: &RawScore) -> u8 {
    let level = match raw {
        RawScore::Band(token) => score_bands(test, skill)
            .iter()
            .chain(band_aliases(test, skill))
            .find(|band| band.token == token.trim())
            .map(|band| band.clb)
            .unwrap_or(0),
        RawScore::Numeric(score) => match numeric_ladder(test, skill) {
            Some(ladder) => climb(ladder, *score),
            None => 0,
        },
    };

    level.min(MAX_CLB)
}

/// Convert all four skills of a language result.
pub fn convert_result(result: &LanguageResult) -> ClbLevels {
    result
        .scores
        .map(|skill, raw| convert(result.test, skill, raw))
}

/// Dropdown tokens accepted for a test and skill, highest band first.
pub fn score_bands(test: LanguageTest, skill: LanguageSkill) -> &'static [ScoreBand] {
    match (test, skill) {
        (LanguageTest::Ielts, _) => IELTS_BANDS,
        (LanguageTest::Celpip, _) => CELPIP_BANDS,
        (LanguageTest::PteCore, _) => PTE_CORE_BANDS,
        (LanguageTest::Tef, LanguageSkill::Listening) => TEF_LISTENING_BANDS,
        (LanguageTest::Tef, _) => TEF_SPEAKING_WRITING_READING_BANDS,
        (LanguageTest::Tcf, LanguageSkill::Listening) => TCF_LISTENING_BANDS,
        (LanguageTest::Tcf, LanguageSkill::Reading) => TCF_READING_BANDS,
        (LanguageTest::Tcf, LanguageSkill::Speaking | LanguageSkill::Writing) => {
            TCF_SPEAKING_WRITING_BANDS
        }
        (LanguageTest::NotApplicable, _) => &[],
    }
}

fn band_aliases(test: LanguageTest, skill: LanguageSkill) -> &'static [ScoreBand] {
    match (test, skill) {
        (LanguageTest::Tcf, LanguageSkill::Speaking | LanguageSkill::Writing) => {
            TCF_SPEAKING_WRITING_ALIASES
        }
        _ => &[],
    }
}

/// Threshold ladder used for native-scale scores.
pub fn numeric_ladder(test: LanguageTest, skill: LanguageSkill) -> Option<&'static NumericLadder> {
    let ladder = match (test, skill) {
        (LanguageTest::Ielts, _) => &IELTS_LADDER,
        (LanguageTest::Celpip, _) => &CELPIP_LADDER,
        (LanguageTest::PteCore, _) => &PTE_CORE_LADDER,
        (LanguageTest::Tef, LanguageSkill::Listening) => &TEF_LISTENING_LADDER,
        (LanguageTest::Tef, _) => &TEF_SPEAKING_WRITING_READING_LADDER,
        (LanguageTest::Tcf, LanguageSkill::Listening) => &TCF_LISTENING_LADDER,
        (LanguageTest::Tcf, LanguageSkill::Reading) => &TCF_READING_LADDER,
        (LanguageTest::Tcf, LanguageSkill::Speaking | LanguageSkill::Writing) => {
            &TCF_SPEAKING_WRITING_LADDER
        }
        (LanguageTest::NotApplicable, _) => return None,
    };
    Some(ladder)
}

/// Native-scale maximum for one skill of a test.
pub fn max_score(test: LanguageTest, skill: LanguageSkill) -> Option<f32> {
    match (test, skill) {
        (LanguageTest::Ielts, _) => Some(9.0),
        (LanguageTest::Celpip, _) => Some(12.0),
        (LanguageTest::PteCore, _) => Some(90.0),
        (LanguageTest::Tef, LanguageSkill::Listening) => Some(360.0),
        (LanguageTest::Tef, _) => Some(450.0),
        (LanguageTest::Tcf, LanguageSkill::Listening | LanguageSkill::Reading) => Some(699.0),
        (LanguageTest::Tcf, LanguageSkill::Speaking | LanguageSkill::Writing) => Some(20.0),
        (LanguageTest::NotApplicable, _) => None,
    }
}

/// Test-wide display bound: the largest per-skill maximum.
pub fn max_score_for_test(test: LanguageTest) -> Option<f32> {
    LanguageSkill::ordered()
        .into_iter()
        .filter_map(|skill| max_score(test, skill))
        .reduce(f32::max)
}

fn climb(ladder: &NumericLadder, score: f32) -> u8 {
    if !score.is_finite() || score <= 0.0 {
        return 0;
    }

    if let Some((_, level)) = ladder.steps.iter().find(|(threshold, _)| score >= *threshold) {
        return *level;
    }

    // Below the ladder the fallback never outranks the lowest rung.
    let floor = ladder.steps.last().map(|(_, level)| *level).unwrap_or(0);
    match ladder.below_divisor {
        Some(divisor) if divisor > 0.0 => ((score / divisor).floor() as u8).min(floor),
        _ => 0,
    }
}

/// Band token as exposed to front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandView {
    pub token: String,
    pub clb: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCatalogEntry {
    pub skill: LanguageSkill,
    pub max_score: f32,
    pub bands: Vec<BandView>,
}

/// Everything a form needs to render score pickers for one test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageTestCatalog {
    pub test: LanguageTest,
    pub label: String,
    pub max_score: f32,
    pub skills: Vec<SkillCatalogEntry>,
}

pub fn catalog(test: LanguageTest) -> Option<LanguageTestCatalog> {
    let test_max = max_score_for_test(test)?;
    let skills = LanguageSkill::ordered()
        .into_iter()
        .filter_map(|skill| {
            let skill_max = max_score(test, skill)?;
            Some(SkillCatalogEntry {
                skill,
                max_score: skill_max,
                bands: score_bands(test, skill)
                    .iter()
                    .map(|band| BandView {
                        token: band.token.to_string(),
                        clb: band.clb,
                    })
                    .collect(),
            })
        })
        .collect();

    Some(LanguageTestCatalog {
        test,
        label: test.label().to_string(),
        max_score: test_max,
        skills,
    })
}

pub fn full_catalog() -> Vec<LanguageTestCatalog> {
    LanguageTest::ordered()
        .into_iter()
        .filter_map(catalog)
        .collect()
}
