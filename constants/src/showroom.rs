use bevy::prelude::*;

/// Placement of the real vehicle on the showroom stage.
pub const VEHICLE_OFFSET: Vec3 = Vec3::new(0.0, -1.0, 0.0);
pub const VEHICLE_SCALE: f32 = 1.2;

/// Camera orbit speed in radians per second.
pub const TURNTABLE_SPEED: f32 = 0.15;
