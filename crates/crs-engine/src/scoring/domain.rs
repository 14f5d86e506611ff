use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Marital status categories offered on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Annulled,
    CommonLaw,
    Divorced,
    LegallySeparated,
    Married,
    Single,
    Widowed,
}

impl MaritalStatus {
    /// Form select codes, 1 through 7.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Annulled),
            2 => Some(Self::CommonLaw),
            3 => Some(Self::Divorced),
            4 => Some(Self::LegallySeparated),
            5 => Some(Self::Married),
            6 => Some(Self::Single),
            7 => Some(Self::Widowed),
            _ => None,
        }
    }

    pub const fn has_spouse(self) -> bool {
        matches!(self, Self::CommonLaw | Self::Married)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Annulled => "Annulled Marriage",
            Self::CommonLaw => "Common-Law",
            Self::Divorced => "Divorced / Separated",
            Self::LegallySeparated => "Legally Separated",
            Self::Married => "Married",
            Self::Single => "Never Married / Single",
            Self::Widowed => "Widowed",
        }
    }
}

/// Highest credential earned in Canada, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanadianEducation {
    None,
    SecondaryOrLess,
    OneOrTwoYear,
    ThreeYearPlus,
}

impl CanadianEducation {
    /// Form select codes: -1, 0, 1 and 3. Code 2 is not offered.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::None),
            0 => Some(Self::SecondaryOrLess),
            1 => Some(Self::OneOrTwoYear),
            3 => Some(Self::ThreeYearPlus),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No Canadian education",
            Self::SecondaryOrLess => "Secondary (high school) or less",
            Self::OneOrTwoYear => "1- or 2-year diploma or certificate",
            Self::ThreeYearPlus => "3-year or longer degree, diploma or certificate",
        }
    }
}

/// Approved language tests. `NotApplicable` stands for "no test taken".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageTest {
    Ielts,
    Celpip,
    Tef,
    Tcf,
    PteCore,
    NotApplicable,
}

impl LanguageTest {
    pub const fn ordered() -> [Self; 5] {
        [Self::Ielts, Self::Celpip, Self::Tef, Self::Tcf, Self::PteCore]
    }

    /// Form select codes: 0 for not applicable, 1 through 5 for the tests.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::NotApplicable),
            1 => Some(Self::Ielts),
            2 => Some(Self::Celpip),
            3 => Some(Self::Tef),
            4 => Some(Self::Tcf),
            5 => Some(Self::PteCore),
            _ => None,
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "ielts" => Some(Self::Ielts),
            "celpip" => Some(Self::Celpip),
            "tef" => Some(Self::Tef),
            "tcf" => Some(Self::Tcf),
            "pte" | "ptecore" => Some(Self::PteCore),
            "na" | "none" | "notapplicable" => Some(Self::NotApplicable),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ielts => "IELTS - General Training",
            Self::Celpip => "CELPIP - General",
            Self::Tef => "TEF Canada",
            Self::Tcf => "TCF Canada",
            Self::PteCore => "PTE Core",
            Self::NotApplicable => "Not applicable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSkill {
    Speaking,
    Writing,
    Reading,
    Listening,
}

impl LanguageSkill {
    pub const fn ordered() -> [Self; 4] {
        [Self::Speaking, Self::Writing, Self::Reading, Self::Listening]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Speaking => "speaking",
            Self::Writing => "writing",
            Self::Reading => "reading",
            Self::Listening => "listening",
        }
    }
}

/// One value per language skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillScores<T> {
    pub speaking: T,
    pub writing: T,
    pub reading: T,
    pub listening: T,
}

impl<T> SkillScores<T> {
    pub fn get(&self, skill: LanguageSkill) -> &T {
        match skill {
            LanguageSkill::Speaking => &self.speaking,
            LanguageSkill::Writing => &self.writing,
            LanguageSkill::Reading => &self.reading,
            LanguageSkill::Listening => &self.listening,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(LanguageSkill, &T) -> U) -> SkillScores<U> {
        SkillScores {
            speaking: f(LanguageSkill::Speaking, &self.speaking),
            writing: f(LanguageSkill::Writing, &self.writing),
            reading: f(LanguageSkill::Reading, &self.reading),
            listening: f(LanguageSkill::Listening, &self.listening),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (LanguageSkill, &T)> {
        LanguageSkill::ordered()
            .into_iter()
            .map(move |skill| (skill, self.get(skill)))
    }
}

/// Canadian Language Benchmark levels (0-10) for each skill.
pub type ClbLevels = SkillScores<u8>;

impl ClbLevels {
    pub fn highest(&self) -> u8 {
        self.iter().map(|(_, level)| *level).max().unwrap_or(0)
    }
}

/// A skill score as entered: either a band token from the dropdown or a native-scale number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScore {
    Band(String),
    Numeric(f32),
}

impl RawScore {
    pub fn band(token: impl Into<String>) -> Self {
        Self::Band(token.into())
    }

    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, Self::Band(token) if token.trim().is_empty())
    }
}

/// Test type plus the four raw skill scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageResult {
    pub test: LanguageTest,
    pub scores: SkillScores<RawScore>,
}

/// Language block exactly as submitted by the form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInput {
    #[serde(default)]
    pub exam: Option<i32>,
    #[serde(default)]
    pub speaking: Option<RawScore>,
    #[serde(default)]
    pub writing: Option<RawScore>,
    #[serde(default)]
    pub reading: Option<RawScore>,
    #[serde(default)]
    pub listening: Option<RawScore>,
}

impl LanguageInput {
    pub(crate) fn skill(&self, skill: LanguageSkill) -> Option<&RawScore> {
        match skill {
            LanguageSkill::Speaking => self.speaking.as_ref(),
            LanguageSkill::Writing => self.writing.as_ref(),
            LanguageSkill::Reading => self.reading.as_ref(),
            LanguageSkill::Listening => self.listening.as_ref(),
        }
    }

    /// A test counts as declared when it names one of the five approved tests.
    pub(crate) fn declared_test(&self) -> Option<LanguageTest> {
        self.exam
            .and_then(LanguageTest::from_code)
            .filter(|test| *test != LanguageTest::NotApplicable)
    }
}

/// Raw candidate input using the form's select codes. Only the validator turns this into an
/// [`ApplicantRecord`]. Every field may be absent so missing answers surface as violations
/// rather than parse failures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantInput {
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub assessed_on: Option<NaiveDate>,
    #[serde(default)]
    pub marital_status: Option<i32>,
    #[serde(default)]
    pub spouse_is_canadian_citizen: Option<bool>,
    #[serde(default)]
    pub spouse_accompanying: Option<bool>,
    #[serde(default)]
    pub education_level: Option<i32>,
    #[serde(default = "no_canadian_education")]
    pub canadian_education: i32,
    #[serde(default)]
    pub first_language: Option<LanguageInput>,
    #[serde(default)]
    pub second_language: Option<LanguageInput>,
    #[serde(default)]
    pub canadian_experience: i32,
    #[serde(default)]
    pub foreign_experience: i32,
    #[serde(default)]
    pub spouse_education_level: Option<i32>,
    #[serde(default)]
    pub spouse_language: Option<LanguageInput>,
    #[serde(default)]
    pub spouse_canadian_experience: Option<i32>,
    #[serde(default)]
    pub has_canadian_family: bool,
    #[serde(default)]
    pub has_provincial_nomination: bool,
    #[serde(default)]
    pub has_french_language_skills: bool,
}

fn no_canadian_education() -> i32 {
    -1
}

/// Spouse or common-law partner details, present only when the applicant has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpouseProfile {
    pub is_canadian_citizen: Option<bool>,
    pub accompanying: Option<bool>,
    /// 1-8 scale; `None` scores as "less than secondary".
    pub education_level: Option<u8>,
    pub canadian_experience_years: u8,
    pub language: Option<LanguageResult>,
}

/// The validated, well-typed applicant consumed by the section calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub age: u8,
    pub marital_status: MaritalStatus,
    /// 1 (less than secondary) through 8 (doctoral).
    pub education_level: u8,
    pub canadian_education: CanadianEducation,
    pub first_language: LanguageResult,
    pub second_language: Option<LanguageResult>,
    /// Capped at 5.
    pub canadian_experience_years: u8,
    /// Capped at 3.
    pub foreign_experience_years: u8,
    pub spouse: Option<SpouseProfile>,
    pub has_canadian_family: bool,
    pub has_provincial_nomination: bool,
    pub has_french_language_skills: bool,
}

impl ApplicantRecord {
    pub fn has_spouse(&self) -> bool {
        self.marital_status.has_spouse()
    }
}
