//! Mock backends standing in for real vision and language models.
//!
//! DESIGN
//! ======
//! Each service sits behind a small trait so the controller never depends on
//! the canned implementation directly. Both mocks are deterministic.

pub mod assistant;
pub mod detection;
