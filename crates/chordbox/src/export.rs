//! Rendering backends for chord diagrams.
//!
//! Each backend implements [`Canvas`](chordbox_core::draw::Canvas), so the
//! layout engine can draw into it directly.

pub mod svg;
