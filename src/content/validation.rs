//! Validation of movement configuration before it reaches the controller.

use super::data::{FORMS_SCHEMA_VERSION, FormsFile};
use crate::forms::{Form, FormTable};

/// A rejected configuration value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Form name, or `dash` / `file` for shared settings.
    pub source: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.source, self.field, self.message)
    }
}

/// Push an error when `$ok` is false.
macro_rules! check_field {
    ($errors:expr, $source:expr, $field:expr, $value:expr, $ok:expr, $expected:expr) => {
        if !$ok {
            $errors.push(ValidationError {
                source: $source.to_string(),
                field: $field,
                message: format!("expected {}, got {}", $expected, $value),
            });
        }
    };
}

fn check_non_negative(
    errors: &mut Vec<ValidationError>,
    source: &str,
    field: &'static str,
    value: f32,
) {
    check_field!(
        errors,
        source,
        field,
        value,
        value.is_finite() && value >= 0.0,
        "a finite value >= 0"
    );
}

/// Validate every form and the dash settings.
/// Returns a list of validation errors, empty if the file is usable.
pub fn validate_forms_file(file: &FormsFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_field!(
        errors,
        "file",
        "schema_version",
        file.schema_version,
        file.schema_version == FORMS_SCHEMA_VERSION,
        FORMS_SCHEMA_VERSION
    );

    // Each form exactly once
    for form in Form::ALL {
        let count = file.forms.iter().filter(|def| def.form == form).count();
        check_field!(
            errors,
            format!("{:?}", form),
            "form",
            format!("{} definitions", count),
            count == 1,
            "exactly one definition"
        );
    }

    for def in &file.forms {
        let source = format!("{:?}", def.form);
        let params = &def.params;

        for (field, value) in params.non_negative_fields() {
            check_non_negative(&mut errors, &source, field, value);
        }
        for (field, value) in params.gravity_multipliers() {
            check_non_negative(&mut errors, &source, field, value);
        }
        check_non_negative(
            &mut errors,
            &source,
            "wall_jump_force.x",
            params.wall_jump_force.x,
        );
        check_non_negative(
            &mut errors,
            &source,
            "wall_jump_force.y",
            params.wall_jump_force.y,
        );

        // The acceleration curve is undefined for non-positive exponents
        check_field!(
            errors,
            source,
            "vel_power",
            params.vel_power,
            params.vel_power.is_finite() && params.vel_power > 0.0,
            "a finite value > 0"
        );
    }

    check_non_negative(&mut errors, "dash", "power", file.dash.power);
    check_non_negative(&mut errors, "dash", "cooldown", file.dash.cooldown);
    check_field!(
        errors,
        "dash",
        "duration",
        file.dash.duration,
        file.dash.duration.is_finite() && file.dash.duration > 0.0,
        "a finite value > 0"
    );

    errors
}

/// Validate and convert a parsed file into the runtime table.
pub fn build_form_table(file: FormsFile) -> Result<FormTable, Vec<ValidationError>> {
    let errors = validate_forms_file(&file);
    if !errors.is_empty() {
        return Err(errors);
    }

    let mut human = None;
    let mut fox = None;
    for def in file.forms {
        match def.form {
            Form::Human => human = Some(def.params),
            Form::Fox => fox = Some(def.params),
        }
    }

    match (human, fox) {
        (Some(human), Some(fox)) => Ok(FormTable::new(human, fox, file.dash)),
        // Only reachable if validation missed a form
        _ => Err(vec![ValidationError {
            source: "file".to_string(),
            field: "forms",
            message: "missing form definitions".to_string(),
        }]),
    }
}
