//! Pure helper modules shared across pages and components.

pub mod collate;
pub mod image;
pub mod phone;
