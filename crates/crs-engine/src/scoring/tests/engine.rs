use super::common::*;
use crate::scoring::domain::{ApplicantInput, LanguageInput, RawScore};
use crate::scoring::{calculate, ScoreFactor, Section};

#[test]
fn single_bachelor_scores_435() {
    let breakdown = engine().calculate(&single_input()).expect("valid input");

    let core = &breakdown.core_human_capital;
    assert_eq!(core.detail(ScoreFactor::Age), Some(124));
    assert_eq!(core.detail(ScoreFactor::Education), Some(120));
    assert_eq!(core.detail(ScoreFactor::FirstLanguage), Some(128));
    assert_eq!(core.detail(ScoreFactor::SecondLanguage), Some(0));
    assert_eq!(core.detail(ScoreFactor::CanadianExperience), Some(0));
    assert_eq!(core.points, 372);

    assert_eq!(breakdown.spouse_factors.points, 0);
    assert!(breakdown.spouse_factors.details.is_empty());

    let transferability = &breakdown.skill_transferability;
    assert_eq!(transferability.detail(ScoreFactor::EducationLanguage), Some(50));
    assert_eq!(
        transferability.detail(ScoreFactor::EducationCanadianExperience),
        Some(0)
    );
    assert_eq!(
        transferability.detail(ScoreFactor::ForeignExperienceLanguage),
        Some(13)
    );
    assert_eq!(
        transferability.detail(ScoreFactor::ForeignCanadianExperience),
        Some(0)
    );
    assert_eq!(transferability.points, 63);

    assert_eq!(breakdown.additional_points.points, 0);
    assert_eq!(breakdown.total, 435);
}

#[test]
fn married_applicant_uses_spouse_columns_and_caps_transferability() {
    let breakdown = engine().calculate(&married_input()).expect("valid input");

    let core = &breakdown.core_human_capital;
    assert_eq!(core.detail(ScoreFactor::Age), Some(135));
    assert_eq!(core.detail(ScoreFactor::Education), Some(126));
    assert_eq!(core.detail(ScoreFactor::FirstLanguage), Some(124));
    assert_eq!(core.detail(ScoreFactor::SecondLanguage), Some(24));
    assert_eq!(core.detail(ScoreFactor::CanadianExperience), Some(84));
    assert_eq!(core.points, 493);

    let spouse = &breakdown.spouse_factors;
    assert_eq!(spouse.detail(ScoreFactor::SpouseEducation), Some(8));
    assert_eq!(spouse.detail(ScoreFactor::SpouseLanguage), Some(20));
    assert_eq!(spouse.detail(ScoreFactor::SpouseCanadianExperience), Some(7));
    assert_eq!(spouse.points, 35);

    let transferability = &breakdown.skill_transferability;
    let raw: u32 = transferability.details.values().sum();
    assert_eq!(raw, 150);
    assert_eq!(transferability.points, 100);

    let additional = &breakdown.additional_points;
    assert_eq!(additional.detail(ScoreFactor::CanadianEducation), Some(30));
    assert_eq!(additional.detail(ScoreFactor::CanadianFamily), Some(15));
    assert_eq!(additional.detail(ScoreFactor::FrenchSkills), Some(25));
    assert_eq!(additional.points, 70);

    assert_eq!(breakdown.total, 698);
}

#[test]
fn total_is_sum_of_sections() {
    for input in [single_input(), married_input()] {
        let breakdown = calculate(&input).expect("valid input");
        let summed: u32 = breakdown.sections().map(|section| section.points).sum();
        assert_eq!(breakdown.total, summed);
    }
}

#[test]
fn calculate_is_idempotent() {
    let input = married_input();
    let first = calculate(&input).expect("valid input");
    let second = calculate(&input).expect("valid input");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).expect("serializes"),
        serde_json::to_vec(&second).expect("serializes")
    );
}

#[test]
fn provincial_nomination_adds_exactly_600() {
    let baseline = ApplicantInput {
        age: Some(17),
        marital_status: Some(SINGLE),
        education_level: Some(1),
        first_language: Some(uniform_block(IELTS, "0-3.5")),
        ..ApplicantInput::default()
    };
    let nominated = ApplicantInput {
        has_provincial_nomination: true,
        ..baseline.clone()
    };

    let without = calculate(&baseline).expect("valid input");
    let with = calculate(&nominated).expect("valid input");

    assert_eq!(without.total, 0);
    assert_eq!(with.total, 600);
    assert_eq!(
        with.additional_points
            .detail(ScoreFactor::ProvincialNomination),
        Some(600)
    );

    let json = serde_json::to_value(&with).expect("serializes");
    assert_eq!(
        json["additional_points"]["details"]["provincialNomination"],
        serde_json::json!(600)
    );
}

#[test]
fn arranged_employment_stays_in_breakdown_at_zero() {
    let breakdown = calculate(&married_input()).expect("valid input");
    assert_eq!(
        breakdown
            .additional_points
            .detail(ScoreFactor::ArrangedEmployment),
        Some(0)
    );
}

#[test]
fn single_applicant_ignores_spouse_fields() {
    let mut input = single_input();
    input.spouse_education_level = Some(8);
    input.spouse_canadian_experience = Some(5);
    input.spouse_language = Some(uniform_block(IELTS, "7.5-9.0"));

    let breakdown = calculate(&input).expect("valid input");

    assert_eq!(breakdown.spouse_factors.points, 0);
    assert!(breakdown.spouse_factors.details.is_empty());
    assert!(breakdown.language_levels.spouse_language.is_none());
}

#[test]
fn spouse_language_honours_selected_test_type() {
    let mut input = married_input();
    input.spouse_language = Some(LanguageInput {
        exam: Some(TEF),
        speaking: Some(RawScore::band("181-225")),
        writing: Some(RawScore::band("181-225")),
        reading: Some(RawScore::band("181-225")),
        listening: Some(RawScore::band("145-180")),
    });

    let breakdown = calculate(&input).expect("valid input");

    // TEF bands at CLB 4; read as English tokens they would all be unknown.
    assert_eq!(
        breakdown.spouse_factors.detail(ScoreFactor::SpouseLanguage),
        Some(20)
    );
    let levels = breakdown
        .language_levels
        .spouse_language
        .expect("spouse levels reported");
    assert_eq!(levels.highest(), 4);
}

#[test]
fn married_without_spouse_details_scores_zero_lines() {
    let input = ApplicantInput {
        marital_status: Some(MARRIED),
        spouse_education_level: None,
        spouse_language: None,
        spouse_canadian_experience: None,
        ..single_input()
    };

    let breakdown = calculate(&input).expect("valid input");

    let spouse = &breakdown.spouse_factors;
    assert_eq!(spouse.points, 0);
    assert_eq!(spouse.details.len(), 3);
    assert!(spouse.details.values().all(|points| *points == 0));
}

#[test]
fn second_language_levels_reported_only_when_declared() {
    let single = calculate(&single_input()).expect("valid input");
    assert!(single.language_levels.second_language.is_none());

    let married = calculate(&married_input()).expect("valid input");
    let second = married
        .language_levels
        .second_language
        .expect("second language levels");
    assert_eq!(second.speaking, 9);
    assert_eq!(second.listening, 9);
}

#[test]
fn sections_are_reported_in_grid_order() {
    let breakdown = calculate(&single_input()).expect("valid input");
    let codes: Vec<char> = breakdown
        .sections()
        .map(|section| section.section.code())
        .collect();
    assert_eq!(codes, vec!['A', 'B', 'C', 'D']);
    assert_eq!(
        breakdown.section(Section::SkillTransferability).title,
        "Skill Transferability Factors"
    );
}

#[test]
fn score_accepts_records_built_without_the_validator() {
    let mut applicant = record(&single_input());
    applicant.has_french_language_skills = true;

    let breakdown = engine().score(&applicant);

    assert_eq!(breakdown.total, 435 + 25);
}
