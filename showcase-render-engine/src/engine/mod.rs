pub mod core;
pub mod loading;
pub mod scene;
pub mod systems;
