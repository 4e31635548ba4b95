//! Forms domain: which movement parameter set drives the actor.
//!
//! Swapping sprites or colliders between forms is left to the presentation
//! layer. This module only decides which [`MovementParams`] the controller reads.


use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{DashParams, MovementParams, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, Reflect)]
pub enum Form {
    #[default]
    Human,
    Fox,
}

impl Form {
    pub const ALL: [Form; 2] = [Form::Human, Form::Fox];

    /// The form after this one when cycling.
    pub fn next(self) -> Self {
        match self {
            Form::Human => Form::Fox,
            Form::Fox => Form::Human,
        }
    }
}

/// Parameter set for every form, plus the dash tuning shared between them.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FormTable {
    human: MovementParams,
    fox: MovementParams,
    dash: DashParams,
}

impl FormTable {
    pub fn new(human: MovementParams, fox: MovementParams, dash: DashParams) -> Self {
        Self { human, fox, dash }
    }

    pub fn params(&self, form: Form) -> &MovementParams {
        match form {
            Form::Human => &self.human,
            Form::Fox => &self.fox,
        }
    }

    pub fn dash(&self) -> &DashParams {
        &self.dash
    }
}

impl Default for FormTable {
    fn default() -> Self {
        Self::new(
            MovementParams::human(),
            MovementParams::fox(),
            DashParams::default(),
        )
    }
}

/// The form currently driving an actor.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveForm(pub Form);

pub struct FormsPlugin;

impl Plugin for FormsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FormTable>()
            .add_systems(Update, cycle_form);
    }
}

/// Switch to the next form on E.
fn cycle_form(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut ActiveForm, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }

    for mut active in &mut query {
        let previous = active.0;
        active.0 = previous.next();
        info!("Switched form: {:?} -> {:?}", previous, active.0);
    }
}
