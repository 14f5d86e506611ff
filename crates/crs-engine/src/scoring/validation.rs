use chrono::NaiveDate;
use tracing::warn;

use super::domain::{
    ApplicantInput, ApplicantRecord, CanadianEducation, LanguageInput, LanguageResult,
    LanguageSkill, LanguageTest, MaritalStatus, RawScore, SkillScores, SpouseProfile,
};
use super::language::max_score;

pub const MIN_AGE: i32 = 17;
pub const MAX_AGE: i32 = 45;
pub const MAX_EDUCATION_LEVEL: i32 = 8;
pub const MAX_CANADIAN_EXPERIENCE_YEARS: i32 = 5;
pub const MAX_FOREIGN_EXPERIENCE_YEARS: i32 = 3;

/// Every constraint the input broke, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("applicant input is invalid: {}", .violations.join("; "))]
pub struct ValidationError {
    violations: Vec<String>,
}

impl ValidationError {
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<String> {
        self.violations
    }
}

/// Which language block a check belongs to; drives the wording of messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LanguageRole {
    First,
    Second,
    Spouse,
}

impl LanguageRole {
    const fn label(self) -> &'static str {
        match self {
            Self::First => "First language",
            Self::Second => "Second language",
            Self::Spouse => "Spouse language",
        }
    }

    const fn required_suffix(self) -> &'static str {
        match self {
            Self::First => "",
            Self::Second => " when second language test is selected",
            Self::Spouse => " when spouse language test is selected",
        }
    }
}

#[derive(Default)]
struct Violations {
    messages: Vec<String>,
}

impl Violations {
    fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    fn in_range(&mut self, value: i32, min: i32, max: i32, field: &str) -> Option<u8> {
        if (min..=max).contains(&value) {
            u8::try_from(value).ok()
        } else {
            self.push(format!(
                "{field} must be between {min} and {max} (found {value})"
            ));
            None
        }
    }
}

/// Turns raw form input into an [`ApplicantRecord`], reporting all problems at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicantValidator;

impl ApplicantValidator {
    pub fn validate(&self, input: &ApplicantInput) -> Result<ApplicantRecord, ValidationError> {
        let mut violations = Violations::default();

        let age = resolve_age(input, &mut violations);

        let marital_status = match input.marital_status {
            None => {
                violations.push("Marital status is required");
                None
            }
            Some(code) => {
                let status = MaritalStatus::from_code(code);
                if status.is_none() {
                    violations.push(format!("Marital status code {code} is not recognised"));
                }
                status
            }
        };

        let education_level = match input.education_level {
            None => {
                violations.push("Education level is required");
                None
            }
            Some(level) => violations.in_range(level, 1, MAX_EDUCATION_LEVEL, "Education level"),
        };

        let canadian_education = CanadianEducation::from_code(input.canadian_education);
        if canadian_education.is_none() {
            violations.push(format!(
                "Canadian education code {} is not recognised",
                input.canadian_education
            ));
        }

        let first_language = match &input.first_language {
            Some(block) => first_language(block, &mut violations),
            None => first_language(&LanguageInput::default(), &mut violations),
        };

        let second_language = input
            .second_language
            .as_ref()
            .and_then(|block| optional_language(block, LanguageRole::Second, &mut violations));

        let canadian_experience_years = violations.in_range(
            input.canadian_experience,
            0,
            MAX_CANADIAN_EXPERIENCE_YEARS,
            "Canadian work experience years",
        );
        let foreign_experience_years = violations.in_range(
            input.foreign_experience,
            0,
            MAX_FOREIGN_EXPERIENCE_YEARS,
            "Foreign work experience years",
        );

        let spouse = match marital_status {
            Some(status) if status.has_spouse() => spouse_profile(input, &mut violations),
            _ => None,
        };

        let record = match (
            age,
            marital_status,
            education_level,
            canadian_education,
            first_language,
            canadian_experience_years,
            foreign_experience_years,
        ) {
            (
                Some(age),
                Some(marital_status),
                Some(education_level),
                Some(canadian_education),
                Some(first_language),
                Some(canadian_experience_years),
                Some(foreign_experience_years),
            ) if violations.messages.is_empty() => ApplicantRecord {
                age,
                marital_status,
                education_level,
                canadian_education,
                first_language,
                second_language,
                canadian_experience_years,
                foreign_experience_years,
                spouse,
                has_canadian_family: input.has_canadian_family,
                has_provincial_nomination: input.has_provincial_nomination,
                has_french_language_skills: input.has_french_language_skills,
            },
            _ => {
                warn!(
                    violations = violations.messages.len(),
                    "rejected applicant input"
                );
                return Err(ValidationError::new(violations.messages));
            }
        };

        Ok(record)
    }
}

fn resolve_age(input: &ApplicantInput, violations: &mut Violations) -> Option<u8> {
    let age = match (input.age, input.birth_date, input.assessed_on) {
        (Some(age), _, _) => age,
        (None, Some(birth_date), Some(assessed_on)) => {
            match age_on(birth_date, assessed_on) {
                Some(age) => age,
                None => {
                    violations.push("Birth date cannot be after the assessment date");
                    return None;
                }
            }
        }
        (None, Some(_), None) => {
            violations.push("Assessment date is required to derive age from birth date");
            return None;
        }
        (None, None, _) => {
            violations.push("Age is required");
            return None;
        }
    };

    violations.in_range(age, MIN_AGE, MAX_AGE, "Age")
}

/// Whole years between `birth_date` and `assessed_on`.
pub fn age_on(birth_date: NaiveDate, assessed_on: NaiveDate) -> Option<i32> {
    assessed_on
        .years_since(birth_date)
        .and_then(|years| i32::try_from(years).ok())
}

fn first_language(block: &LanguageInput, violations: &mut Violations) -> Option<LanguageResult> {
    let role = LanguageRole::First;
    let test = match block.exam {
        None => {
            violations.push("First language test type is required");
            None
        }
        Some(code) => match LanguageTest::from_code(code) {
            Some(LanguageTest::NotApplicable) | None => {
                violations.push(format!(
                    "First language test code {code} is not an approved test"
                ));
                None
            }
            Some(test) => Some(test),
        },
    };

    let scores = skill_scores(block, role, test, violations);
    Some(LanguageResult {
        test: test?,
        scores: scores?,
    })
}

/// Second and spouse blocks only count when they name an approved test.
fn optional_language(
    block: &LanguageInput,
    role: LanguageRole,
    violations: &mut Violations,
) -> Option<LanguageResult> {
    if let Some(code) = block.exam {
        if LanguageTest::from_code(code).is_none() {
            violations.push(format!(
                "{} test code {code} is not recognised",
                role.label()
            ));
            return None;
        }
    }

    let test = block.declared_test()?;
    let scores = skill_scores(block, role, Some(test), violations)?;
    Some(LanguageResult { test, scores })
}

fn skill_scores(
    block: &LanguageInput,
    role: LanguageRole,
    test: Option<LanguageTest>,
    violations: &mut Violations,
) -> Option<SkillScores<RawScore>> {
    // Check every skill before bailing so each missing score is reported.
    let scores = SkillScores::<()>::default()
        .map(|skill, _| checked_skill(block.skill(skill), role, skill, test, violations));

    Some(SkillScores {
        speaking: scores.speaking?,
        writing: scores.writing?,
        reading: scores.reading?,
        listening: scores.listening?,
    })
}

fn checked_skill(
    raw: Option<&RawScore>,
    role: LanguageRole,
    skill: LanguageSkill,
    test: Option<LanguageTest>,
    violations: &mut Violations,
) -> Option<RawScore> {
    let raw = match raw {
        Some(raw) if !raw.is_blank() => raw,
        _ => {
            violations.push(format!(
                "{} {} score is required{}",
                role.label(),
                skill.label(),
                role.required_suffix()
            ));
            return None;
        }
    };

    if let (RawScore::Numeric(value), Some(test)) = (raw, test) {
        let max = max_score(test, skill).unwrap_or(0.0);
        if !value.is_finite() || *value < 0.0 || *value > max {
            violations.push(format!(
                "{} {} score {} is outside 0-{} for {}",
                role.label(),
                skill.label(),
                value,
                max,
                test.label()
            ));
            return None;
        }
    }

    Some(raw.clone())
}

fn spouse_profile(input: &ApplicantInput, violations: &mut Violations) -> Option<SpouseProfile> {
    let education_level = input.spouse_education_level.and_then(|level| {
        violations.in_range(level, 1, MAX_EDUCATION_LEVEL, "Spouse education level")
    });
    let canadian_experience_years = violations
        .in_range(
            input.spouse_canadian_experience.unwrap_or(0),
            0,
            MAX_CANADIAN_EXPERIENCE_YEARS,
            "Spouse Canadian work experience years",
        )
        .unwrap_or(0);
    let language = input
        .spouse_language
        .as_ref()
        .and_then(|block| optional_language(block, LanguageRole::Spouse, violations));

    Some(SpouseProfile {
        is_canadian_citizen: input.spouse_is_canadian_citizen,
        accompanying: input.spouse_accompanying,
        education_level,
        canadian_experience_years,
        language,
    })
}
