//! Shell components shared by every screen.

pub mod nav_bar;
pub mod quantity_stepper;
pub mod tips_banner;
