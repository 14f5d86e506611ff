use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::scoring::domain::{ApplicantInput, ApplicantRecord, LanguageInput, RawScore};
use crate::scoring::validation::ApplicantValidator;
use crate::scoring::{scoring_router, ScoringEngine};

pub(super) const IELTS: i32 = 1;
pub(super) const CELPIP: i32 = 2;
pub(super) const TEF: i32 = 3;
pub(super) const TCF: i32 = 4;

pub(super) const MARRIED: i32 = 5;
pub(super) const SINGLE: i32 = 6;

/// The same band token for all four skills.
pub(super) fn uniform_block(exam: i32, token: &str) -> LanguageInput {
    LanguageInput {
        exam: Some(exam),
        speaking: Some(RawScore::band(token)),
        writing: Some(RawScore::band(token)),
        reading: Some(RawScore::band(token)),
        listening: Some(RawScore::band(token)),
    }
}

pub(super) fn numeric_block(exam: i32, score: f32) -> LanguageInput {
    LanguageInput {
        exam: Some(exam),
        speaking: Some(RawScore::Numeric(score)),
        writing: Some(RawScore::Numeric(score)),
        reading: Some(RawScore::Numeric(score)),
        listening: Some(RawScore::Numeric(score)),
    }
}

/// 29-year-old single bachelor's graduate, IELTS 7.0 across the board, one year abroad.
pub(super) fn single_input() -> ApplicantInput {
    ApplicantInput {
        age: Some(29),
        marital_status: Some(SINGLE),
        education_level: Some(5),
        canadian_education: -1,
        first_language: Some(uniform_block(IELTS, "7.0")),
        canadian_experience: 0,
        foreign_experience: 1,
        ..ApplicantInput::default()
    }
}

/// 35-year-old married master's graduate with a French second language and a working spouse.
pub(super) fn married_input() -> ApplicantInput {
    ApplicantInput {
        age: Some(35),
        marital_status: Some(MARRIED),
        spouse_is_canadian_citizen: Some(false),
        spouse_accompanying: Some(true),
        education_level: Some(7),
        canadian_education: 3,
        first_language: Some(uniform_block(IELTS, "7.5-9.0")),
        second_language: Some(LanguageInput {
            exam: Some(TEF),
            speaking: Some(RawScore::band("371-392")),
            writing: Some(RawScore::band("371-392")),
            reading: Some(RawScore::band("371-392")),
            listening: Some(RawScore::band("298-315")),
        }),
        canadian_experience: 3,
        foreign_experience: 2,
        spouse_education_level: Some(5),
        spouse_language: Some(uniform_block(CELPIP, "7")),
        spouse_canadian_experience: Some(2),
        has_canadian_family: true,
        has_provincial_nomination: false,
        has_french_language_skills: true,
        ..ApplicantInput::default()
    }
}

pub(super) fn record(input: &ApplicantInput) -> ApplicantRecord {
    ApplicantValidator
        .validate(input)
        .expect("fixture input is valid")
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new()
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn router() -> axum::Router {
    scoring_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
