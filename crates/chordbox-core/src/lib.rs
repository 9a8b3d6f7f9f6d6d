//! Chordbox Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Chordbox layout
//! engine and its rendering backends. It includes:
//!
//! - **Colors**: CSS color parsing and display ([`color::Color`])
//! - **Geometry**: Points and sizes in canvas space ([`geometry`] module)
//! - **Draw**: Stroke/text definitions and the [`draw::Canvas`] trait ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
