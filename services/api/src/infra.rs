use chrono::NaiveDate;
use crs_engine::scoring::LanguageTest;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_language_test(raw: &str) -> Result<LanguageTest, String> {
    match LanguageTest::from_name(raw) {
        Some(LanguageTest::NotApplicable) | None => Err(format!(
            "'{raw}' is not an approved language test (ielts, celpip, tef, tcf, pte)"
        )),
        Some(test) => Ok(test),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_trims_and_reports_bad_values() {
        assert_eq!(
            parse_date(" 2025-03-15 "),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date"))
        );
        let err = parse_date("15/03/2025").expect_err("rejected");
        assert!(err.contains("15/03/2025"));
    }

    #[test]
    fn parse_language_test_only_accepts_approved_tests() {
        assert_eq!(parse_language_test("celpip"), Ok(LanguageTest::Celpip));
        assert_eq!(parse_language_test("pte_core"), Ok(LanguageTest::PteCore));
        assert!(parse_language_test("not applicable").is_err());
        assert!(parse_language_test("toefl").is_err());
    }
}
