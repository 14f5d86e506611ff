use chrono::{Local, NaiveDate};
use clap::Args;
use crs_engine::error::AppError;
use crs_engine::scoring::language::{catalog, full_catalog, LanguageTestCatalog};
use crs_engine::scoring::{
    ApplicantInput, ClbLevels, LanguageTest, ScoreBreakdown, ScoringEngine, Section,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Applicant profile in the form's JSON shape
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Date used to derive age from a birth date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) assessed_on: Option<NaiveDate>,
    /// Print the breakdown as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TablesArgs {
    /// Limit output to one test (ielts, celpip, tef, tcf, pte)
    #[arg(long, value_parser = crate::infra::parse_language_test)]
    pub(crate) test: Option<LanguageTest>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        assessed_on,
        json,
    } = args;

    let raw = std::fs::read_to_string(&input)?;
    let breakdown = score_payload(&raw, assessed_on)?;
    info!(path = %input.display(), total = breakdown.total, "scored applicant profile");

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!("{}", render_breakdown(&breakdown));
    }

    Ok(())
}

pub(crate) fn run_tables(args: TablesArgs) -> Result<(), AppError> {
    let catalogs: Vec<LanguageTestCatalog> = match args.test {
        Some(test) => catalog(test).into_iter().collect(),
        None => full_catalog(),
    };

    let rendered: Vec<String> = catalogs.iter().map(render_catalog).collect();
    println!("{}", rendered.join("\n\n"));
    Ok(())
}

/// Parse a form payload and score it; `assessed_on` only fills a missing assessment date.
pub(crate) fn score_payload(
    raw: &str,
    assessed_on: Option<NaiveDate>,
) -> Result<ScoreBreakdown, AppError> {
    let mut input: ApplicantInput = serde_json::from_str(raw)?;
    if input.assessed_on.is_none() {
        input.assessed_on = Some(assessed_on.unwrap_or_else(|| Local::now().date_naive()));
    }

    Ok(ScoringEngine::new().calculate(&input)?)
}

pub(crate) fn render_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut lines = vec![format!("CRS score: {}", breakdown.total)];

    for section in breakdown.sections() {
        lines.push(String::new());
        lines.push(format!(
            "{}. {}: {}",
            section.section.code(),
            section.title,
            section.points
        ));
        for (factor, points) in &section.details {
            lines.push(format!("   - {}: {}", factor.label(), points));
        }

        let raw: u32 = section.details.values().sum();
        if section.section == Section::SkillTransferability && raw > section.points {
            lines.push(format!("   (bonuses total {raw}, capped at {})", section.points));
        }
    }

    let levels = &breakdown.language_levels;
    lines.push(String::new());
    lines.push("Language levels (CLB)".to_string());
    lines.push(format!("   - First language: {}", render_levels(&levels.first_language)));
    if let Some(second) = &levels.second_language {
        lines.push(format!("   - Second language: {}", render_levels(second)));
    }
    if let Some(spouse) = &levels.spouse_language {
        lines.push(format!("   - Spouse language: {}", render_levels(spouse)));
    }

    lines.join("\n")
}

fn render_levels(levels: &ClbLevels) -> String {
    levels
        .iter()
        .map(|(skill, level)| format!("{} {}", skill.label(), level))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn render_catalog(entry: &LanguageTestCatalog) -> String {
    let mut lines = vec![format!("{} (max {})", entry.label, entry.max_score)];
    for skill in &entry.skills {
        let bands = skill
            .bands
            .iter()
            .map(|band| format!("{}=CLB {}", band.token, band.clb))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "   - {} (max {}): {}",
            skill.skill.label(),
            skill.max_score,
            bands
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"{
        "birthDate": "1996-03-15",
        "maritalStatus": 6,
        "educationLevel": 5,
        "firstLanguage": {
            "exam": 1,
            "speaking": "7.0",
            "writing": "7.0",
            "reading": "7.0",
            "listening": "7.0"
        },
        "foreignExperience": 1
    }"#;

    fn assessed_on() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 3, 15)
    }

    #[test]
    fn score_payload_uses_cli_assessment_date() {
        let breakdown = score_payload(PROFILE, assessed_on()).expect("valid profile");

        assert_eq!(breakdown.total, 435);
    }

    #[test]
    fn score_payload_reports_malformed_json() {
        let err = score_payload("{ not json", assessed_on()).expect_err("rejected");
        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn score_payload_reports_violations() {
        let payload = r#"{ "maritalStatus": 6, "educationLevel": 5, "firstLanguage": {} }"#;
        let err = score_payload(payload, None).expect_err("rejected");

        match err {
            AppError::Validation(err) => {
                assert_eq!(err.violations()[0], "Age is required");
                assert_eq!(err.violations().len(), 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn render_breakdown_itemizes_sections() {
        let breakdown = score_payload(PROFILE, assessed_on()).expect("valid profile");

        let text = render_breakdown(&breakdown);

        assert!(text.starts_with("CRS score: 435"));
        assert!(text.contains("A. Core Human Capital Factors: 372"));
        assert!(text.contains("   - Age: 124"));
        assert!(text.contains("C. Skill Transferability Factors: 63"));
        assert!(text.contains("   - Arranged employment: 0"));
        assert!(text.contains("First language: speaking 9, writing 9, reading 9, listening 9"));
        assert!(!text.contains("capped at"));
        assert!(!text.contains("Second language:"));
    }

    #[test]
    fn render_catalog_lists_bands_per_skill() {
        let entry = catalog(LanguageTest::Tef).expect("tef catalog");

        let text = render_catalog(&entry);

        assert!(text.starts_with("TEF Canada (max 450)"));
        assert!(text.contains("   - listening (max 360): 316-360=CLB 10"));
        assert_eq!(text.lines().count(), 5);
    }
}
