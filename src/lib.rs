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

//! Drag-to-rotate and click-to-navigate interaction for a 3D cube menu.
//!
//! A page shows a cube whose faces link to other pages. Dragging rotates
//! the cube; a press and release that barely moved counts as a click, which
//! casts a ray through the pointer and navigates to the destination of the
//! face it hits.
//!
//! # Key entry points
//!
//! - [`input::InteractionController`] - drag/click classification, rotation,
//!   and face picking
//! - [`session::InteractionSession`] - controller + scene + navigator, driven
//!   by event-loop glue
//! - [`picking::CubeMesh`] - a rotatable, raycastable box
//! - [`options::Options`] - TOML-backed tuning (rotate speed, click
//!   threshold, destinations, zoom)
//! - `web::register_event_listeners` - DOM wiring (feature `web`)
//!
//! The scene itself (rendering, the render loop) belongs to the host page;
//! this crate only mutates the cube's orientation and decides where to
//! navigate.

pub mod camera;
pub mod error;
pub mod input;
pub mod navigation;
pub mod options;
pub mod picking;
pub mod session;
#[cfg(feature = "web")]
pub mod web;

pub use error::CubeNavError;
