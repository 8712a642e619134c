//! UI components for the landing page.

pub mod counter;
pub mod modal;
pub mod notification;
pub mod particle_field;
pub mod register;
pub mod typed_text;
