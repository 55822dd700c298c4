pub mod classification;
pub mod fallback_body;
pub mod loading;
pub mod paint;
pub mod path;
pub mod showroom;
