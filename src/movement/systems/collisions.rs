//! Movement domain: ground and wall contact sensing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ContactSensors, Facing, GameLayer, MotionController, Player, ProbeExtents,
};

pub(crate) fn detect_contacts(
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            &Transform,
            &ProbeExtents,
            &MotionController,
            &mut ContactSensors,
        ),
        With<Player>,
    >,
) {
    // Filter to only hit the matching layer (not the player itself)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, probe, controller, mut sensors) in &mut query {
        let origin = transform.translation.truncate();

        // Cast a short ray downward from the feet
        let feet = origin - Vec2::new(0.0, probe.half_size.y);
        let grounded = spatial_query
            .cast_ray(feet, Dir2::NEG_Y, probe.reach, true, &ground_filter)
            .is_some();

        // Front and back probes turn with the actor
        let facing = controller.facing();
        let front_dir = match facing {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        };
        let wall_reach = probe.half_size.x + probe.reach;
        let front = spatial_query
            .cast_ray(origin, front_dir, wall_reach, true, &wall_filter)
            .is_some();
        let back = spatial_query
            .cast_ray(origin, -front_dir, wall_reach, true, &wall_filter)
            .is_some();

        let readings = ContactSensors::from_body_relative(grounded, front, back, facing);

        if readings.grounded != sensors.grounded {
            debug!("Ground contact: {}", readings.grounded);
        }
        if readings.touching_wall() != sensors.touching_wall() {
            debug!(
                "Wall contact: left={}, right={}",
                readings.wall_left, readings.wall_right
            );
        }

        *sensors = readings;
    }
}
