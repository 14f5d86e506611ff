use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::ClbLevels;

/// The four categories of the CRS grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    CoreHumanCapital,
    SpouseFactors,
    SkillTransferability,
    AdditionalPoints,
}

impl Section {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::CoreHumanCapital,
            Self::SpouseFactors,
            Self::SkillTransferability,
            Self::AdditionalPoints,
        ]
    }

    pub const fn code(self) -> char {
        match self {
            Self::CoreHumanCapital => 'A',
            Self::SpouseFactors => 'B',
            Self::SkillTransferability => 'C',
            Self::AdditionalPoints => 'D',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CoreHumanCapital => "Core Human Capital Factors",
            Self::SpouseFactors => "Spouse/Common-law Partner Factors",
            Self::SkillTransferability => "Skill Transferability Factors",
            Self::AdditionalPoints => "Additional Points",
        }
    }
}

/// Sub-factors that can appear in a section's detail map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreFactor {
    Age,
    Education,
    FirstLanguage,
    SecondLanguage,
    CanadianExperience,
    SpouseEducation,
    SpouseLanguage,
    SpouseCanadianExperience,
    EducationLanguage,
    EducationCanadianExperience,
    ForeignExperienceLanguage,
    ForeignCanadianExperience,
    ProvincialNomination,
    ArrangedEmployment,
    CanadianEducation,
    CanadianFamily,
    FrenchSkills,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Education => "Level of education",
            Self::FirstLanguage => "First official language",
            Self::SecondLanguage => "Second official language",
            Self::CanadianExperience => "Canadian work experience",
            Self::SpouseEducation => "Spouse level of education",
            Self::SpouseLanguage => "Spouse official language",
            Self::SpouseCanadianExperience => "Spouse Canadian work experience",
            Self::EducationLanguage => "Education + language proficiency",
            Self::EducationCanadianExperience => "Education + Canadian work experience",
            Self::ForeignExperienceLanguage => "Foreign work experience + language proficiency",
            Self::ForeignCanadianExperience => {
                "Foreign work experience + Canadian work experience"
            }
            Self::ProvincialNomination => "Provincial nomination",
            Self::ArrangedEmployment => "Arranged employment",
            Self::CanadianEducation => "Post-secondary education in Canada",
            Self::CanadianFamily => "Sibling in Canada",
            Self::FrenchSkills => "French-language skills",
        }
    }
}

/// Point total and itemized detail for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    pub section: Section,
    pub title: String,
    pub points: u32,
    pub details: BTreeMap<ScoreFactor, u32>,
}

impl SectionScore {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            title: section.label().to_string(),
            points: 0,
            details: BTreeMap::new(),
        }
    }

    /// Record a sub-factor without touching the section total.
    pub(crate) fn record(&mut self, factor: ScoreFactor, points: u32) {
        self.details.insert(factor, points);
    }

    pub(crate) fn detail_sum(&self) -> u32 {
        self.details.values().sum()
    }

    pub fn detail(&self, factor: ScoreFactor) -> Option<u32> {
        self.details.get(&factor).copied()
    }
}

/// CLB levels the engine derived while scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageLevels {
    pub first_language: ClbLevels,
    pub second_language: Option<ClbLevels>,
    pub spouse_language: Option<ClbLevels>,
}

/// Final CRS score with the four sections that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: u32,
    pub core_human_capital: SectionScore,
    pub spouse_factors: SectionScore,
    pub skill_transferability: SectionScore,
    pub additional_points: SectionScore,
    pub language_levels: LanguageLevels,
}

impl ScoreBreakdown {
    pub fn section(&self, section: Section) -> &SectionScore {
        match section {
            Section::CoreHumanCapital => &self.core_human_capital,
            Section::SpouseFactors => &self.spouse_factors,
            Section::SkillTransferability => &self.skill_transferability,
            Section::AdditionalPoints => &self.additional_points,
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = &SectionScore> {
        Section::ordered()
            .into_iter()
            .map(move |section| self.section(section))
    }
}
