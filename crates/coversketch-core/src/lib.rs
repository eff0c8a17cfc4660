//! Cover Sketch Core Types and Definitions
//!
//! This crate provides the foundational types for cover sketches. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Sketch**: The request and layout model of a cover ([`sketch`] module)
//! - **Arrowheads**: Vector math for double-headed arrows ([`arrowhead`] module)
//! - **Draw**: The drawing surface capability and its styles ([`draw`] module)

pub mod arrowhead;
pub mod color;
pub mod draw;
pub mod geometry;
pub mod sketch;
