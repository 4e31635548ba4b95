//! Serialized layout of the movement configuration file.

use serde::{Deserialize, Serialize};

use crate::forms::Form;
use crate::movement::{DashParams, MovementParams};

/// Version this build understands. Bump when fields change meaning.
pub const FORMS_SCHEMA_VERSION: u32 = 1;

/// Contents of `forms.ron`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormsFile {
    pub schema_version: u32,
    pub dash: DashParams,
    pub forms: Vec<FormDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormDef {
    pub form: Form,
    pub params: MovementParams,
}
