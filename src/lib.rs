// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-driven 3D helix scene core.
//!
//! Helika turns a normalized page-scroll fraction into everything a helix
//! landing scene needs per frame: the structure's rotation and vertical
//! travel, a smoothed camera, per-atom hotspot classification, and the
//! screen-space pixel where a tracked atom lands so 2D overlay cards can
//! follow it. Pointer hits against the instanced lattice resolve to content
//! sections for hover cards.
//!
//! # Key entry points
//!
//! - [`orchestrator::ScrollOrchestrator`] - the per-frame driver
//! - [`store::ScrollStore`] - shared scroll/interaction state
//! - [`config::Options`] - runtime tunables (helix geometry, camera,
//!   tracking tables)
//! - [`sections::Sections`] - the ordered content section list
//!
//! # Architecture
//!
//! The crate renders nothing itself. A host rendering loop feeds scroll
//! samples and pointer events in, calls
//! [`orchestrator::ScrollOrchestrator::advance`] once per frame, and reads
//! the resulting instance transforms, classifications, and projected anchor
//! back out of the store. All computation is synchronous and
//! single-threaded; the host event loop is the only serialization layer.

pub mod camera;
pub mod config;
pub mod error;
pub mod helix;
pub mod orchestrator;
pub mod picking;
pub mod projection;
pub mod sections;
pub mod store;
pub mod util;
