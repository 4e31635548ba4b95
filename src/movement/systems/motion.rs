//! Movement domain: runs the motion controller and hands its commands to avian.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::forms::{ActiveForm, FormTable};
use crate::movement::{ContactSensors, Facing, MotionController, MovementInput, Player};

/// One controller tick per actor per fixed step.
pub(crate) fn drive_motion(
    time: Res<Time>,
    mut input: ResMut<MovementInput>,
    forms: Res<FormTable>,
    mut query: Query<
        (
            &mut MotionController,
            &ContactSensors,
            &ActiveForm,
            &ComputedMass,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut ConstantForce,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let snapshot = input.take_snapshot();

    for (mut controller, sensors, form, mass, mut velocity, mut gravity, mut force) in &mut query
    {
        let params = forms.params(form.0);
        let commands =
            controller.tick(params, forms.dash(), &snapshot, sensors, velocity.0, dt);

        gravity.0 = commands.gravity_scale;

        // The controller speaks in accelerations; scale so tuning is mass independent
        force.0 = commands.force * mass.value().max(0.0);

        velocity.0 += commands.total_impulse();
        if let Some(min_y) = commands.min_velocity_y {
            velocity.y = velocity.y.max(min_y);
        }
    }
}

/// Mirror the sprite to match the controller's facing.
pub(crate) fn mirror_facing(mut query: Query<(&MotionController, &mut Sprite), With<Player>>) {
    for (controller, mut sprite) in &mut query {
        let flip = controller.facing() == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
