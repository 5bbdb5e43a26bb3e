//! spritelst: regenerate the sprite manifest listing the `.png` files in `src/resources/`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{GenerateOutcome, generate, generate_at, sprite_names, sprite_names_at};
pub use domain::{AppError, ManifestLayout, SpriteEntry};
