//! Content domain: loads movement parameter sets from RON at startup.

mod data;
mod loader;
mod validation;


pub use data::{FORMS_SCHEMA_VERSION, FormDef, FormsFile};
pub use loader::{ContentLoadError, load_forms_file, parse_forms_file};
pub use validation::{ValidationError, build_form_table, validate_forms_file};

use bevy::prelude::*;
use std::path::PathBuf;

/// Where configuration files are read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentConfig {
    pub forms_path: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            forms_path: PathBuf::from("assets/data/forms.ron"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentConfig>()
            .add_systems(PreStartup, load_movement_content);
    }
}

/// Replace the built-in form table with the validated file contents.
/// Any failure keeps the built-in table so the actor always has parameters.
fn load_movement_content(mut commands: Commands, config: Res<ContentConfig>) {
    let file = match load_forms_file(&config.forms_path) {
        Ok(file) => file,
        Err(e) => {
            error!("{}", e);
            warn!("Using built-in movement parameters");
            return;
        }
    };

    let form_count = file.forms.len();
    match build_form_table(file) {
        Ok(table) => {
            info!(
                "Loaded movement content from {}: {} forms, dash power={}",
                config.forms_path.display(),
                form_count,
                table.dash().power
            );
            commands.insert_resource(table);
        }
        Err(errors) => {
            for e in &errors {
                error!("Invalid movement parameter: {}", e);
            }
            warn!(
                "{} validation errors in {}, using built-in movement parameters",
                errors.len(),
                config.forms_path.display()
            );
        }
    }
}
