//! The double-helix structure and everything derived from it.
//!
//! The lattice (atom and bond instance tables) is built once from the
//! geometry options. Scroll and idle motion only change a rigid group
//! pose on top of it; hotspot ranges, anchor resolution, and pointer
//! picking all work in lattice-local space plus that pose.

/// Overlay anchor selection and world-space resolution.
pub mod anchor;
/// Derived pointer-sensitive ranges and their pulse.
pub mod hotspot;
/// Instance tables for atoms and rung bonds.
pub mod lattice;
/// Scroll- and time-driven group pose.
pub mod pose;
