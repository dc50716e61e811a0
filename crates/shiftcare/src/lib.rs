pub mod catalog;
pub mod config;
pub mod error;
pub mod landing;
pub mod signup;
pub mod telemetry;
