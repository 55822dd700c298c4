use bevy::prelude::*;

/// Placeholder vehicle proportions, loosely matching the real asset's
/// footprint so the camera framing still works in degraded mode.
pub const BODY_SIZE: Vec3 = Vec3::new(4.0, 0.8, 1.8);

pub const CABIN_SIZE: Vec3 = Vec3::new(2.5, 1.0, 1.6);
pub const CABIN_OFFSET: Vec3 = Vec3::new(0.0, 0.9, 0.0);

pub const WHEEL_RADIUS: f32 = 0.4;
pub const WHEEL_WIDTH: f32 = 0.3;

/// Axle positions relative to the body centre.
pub const WHEEL_OFFSETS: [Vec3; 4] = [
    Vec3::new(1.3, -0.6, 0.8),
    Vec3::new(-1.3, -0.6, 0.8),
    Vec3::new(1.3, -0.6, -0.8),
    Vec3::new(-1.3, -0.6, -0.8),
];

/// Wheels keep a fixed neutral appearance independent of the paint selection.
pub const WHEEL_COLOUR: u32 = 0x333333;

/// Group placement in the showroom.
pub const GROUP_OFFSET: Vec3 = Vec3::new(0.0, -0.5, 0.0);

/// Gentle idle rocking: `sin(t * ROCK_SPEED) * ROCK_AMPLITUDE` radians about Y.
pub const ROCK_SPEED: f32 = 0.15;
pub const ROCK_AMPLITUDE: f32 = 0.2;
