use avian2d::prelude::*;
use bevy::prelude::*;

use foxstep::{content, core, forms, movement};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Foxstep".to_string(),
            resolution: (1280u32, 720u32).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        forms::FormsPlugin,
        movement::MovementPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(foxstep::debug::DebugPlugin);

    app.run();
}
