//! Worksheet settings: a flat key-value structure loaded once at startup and
//! passed by reference into the generation driver. There is no hidden global
//! configuration state.

use crate::error::SheetError;
use crate::numbers::OperandRange;
use crate::pagesize::{self, PageSize};
use crate::problem::Operator;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Everything the worksheet generator can be told about one run. Any subset
/// of the keys may appear in the settings file; the rest keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Smallest operand the sampler may draw
    pub min_number: i64,
    /// Largest operand the sampler may draw
    pub max_number: i64,
    /// The operator symbol for every problem on the sheet
    pub math_operator: String,
    /// Smallest acceptable problem answer
    pub min_problem_answer: i64,
    /// Largest acceptable problem answer
    pub max_problem_answer: i64,
    /// Title drawn at the top of the page
    pub title: String,
    /// Number of problem columns
    pub columns: usize,
    /// Number of problems stacked in each column
    pub problems_per_column: usize,
    /// Paper size name, e.g. `"a4"` or `"letter"`
    pub page_size: String,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            min_number: 2,
            max_number: 28,
            math_operator: "+".to_string(),
            min_problem_answer: 4,
            max_problem_answer: 30,
            title: "Math Practice".to_string(),
            columns: 2,
            problems_per_column: 8,
            page_size: "a4".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Settings, SheetError> {
        let text = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&text)?;
        Ok(settings)
    }

    /// The configured operator, parsed. Fails with
    /// [SheetError::InvalidOperator] for unrecognized symbols.
    pub fn operator(&self) -> Result<Operator, SheetError> {
        self.math_operator.parse()
    }

    /// The configured operand and answer bounds, validated
    pub fn operand_range(&self) -> Result<OperandRange, SheetError> {
        OperandRange::new(
            self.min_number,
            self.max_number,
            self.min_problem_answer,
            self.max_problem_answer,
        )
    }

    /// The configured paper size; unknown names fall back to A4 with a
    /// warning
    pub fn page_size(&self) -> PageSize {
        pagesize::by_name(&self.page_size).unwrap_or_else(|| {
            log::warn!("unknown page size {:?}, using a4", self.page_size);
            pagesize::A4
        })
    }

    /// The total number of problems on the sheet
    pub fn problem_count(&self) -> usize {
        self.columns * self.problems_per_column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_worksheet() {
        let settings = Settings::default();
        assert_eq!(settings.min_number, 2);
        assert_eq!(settings.max_number, 28);
        assert_eq!(settings.math_operator, "+");
        assert_eq!(settings.min_problem_answer, 4);
        assert_eq!(settings.max_problem_answer, 30);
        assert_eq!(settings.problem_count(), 16);
        assert_eq!(settings.page_size(), pagesize::A4);
    }

    #[test]
    fn partial_json_overrides_keep_remaining_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "math_operator": "*", "max_number": 9 }"#)
                .expect("valid settings json");
        assert_eq!(settings.operator().expect("valid operator"), Operator::Mul);
        assert_eq!(settings.max_number, 9);
        assert_eq!(settings.min_number, 2);
        assert_eq!(settings.columns, 2);
    }

    #[test]
    fn loads_partial_settings_from_a_json_file() {
        let path = std::env::temp_dir().join("mathsheet-settings-load.json");
        fs::write(&path, r#"{ "title": "Quiz Time", "columns": 1 }"#)
            .expect("temp dir is writable");
        let settings = Settings::load(&path).expect("settings load");
        fs::remove_file(&path).ok();

        assert_eq!(settings.title, "Quiz Time");
        assert_eq!(settings.columns, 1);
        assert_eq!(settings.max_number, 28);
    }

    #[test]
    fn missing_settings_file_is_an_io_error() {
        let path = std::env::temp_dir().join("mathsheet-no-such-settings.json");
        assert!(matches!(Settings::load(&path), Err(SheetError::Io(_))));
    }

    #[test]
    fn malformed_settings_file_is_a_config_error() {
        let path = std::env::temp_dir().join("mathsheet-settings-malformed.json");
        fs::write(&path, "{ this is not json").expect("temp dir is writable");
        let result = Settings::load(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(SheetError::Config(_))));
    }

    #[test]
    fn bad_operator_surfaces_at_parse_time() {
        let settings: Settings = serde_json::from_str(r#"{ "math_operator": "x" }"#)
            .expect("structurally valid json");
        assert!(matches!(
            settings.operator(),
            Err(SheetError::InvalidOperator(_))
        ));
    }

    #[test]
    fn degenerate_bounds_surface_through_operand_range() {
        let settings: Settings =
            serde_json::from_str(r#"{ "min_number": 9, "max_number": 2 }"#)
                .expect("structurally valid json");
        assert!(matches!(
            settings.operand_range(),
            Err(SheetError::InvalidRange { .. })
        ));
    }
}
