use crate::domain::model::PLACEHOLDER;

/// Validation failures carry only the reason; callers attach the file path.
pub type ValidationResult = std::result::Result<(), String>;

pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(format!(
            "{}: value cannot be empty or whitespace-only",
            field_name
        ));
    }
    Ok(())
}

pub fn validate_placeholder(field_name: &str, template: &str) -> ValidationResult {
    match template.matches(PLACEHOLDER).count() {
        1 => Ok(()),
        0 => Err(format!(
            "{}: '{}' is missing the {} placeholder",
            field_name, template, PLACEHOLDER
        )),
        n => Err(format!(
            "{}: '{}' contains {} placeholders, expected exactly one",
            field_name, template, n
        )),
    }
}
