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
// Complexity limits
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

//! Viewpoint control for real-time 3D scenes.
//!
//! Lookout models the cameras of a view: their pose, how they navigate
//! (orbit, track, explore), how they follow moving actors, and how they
//! animate between saved viewpoints ("landmarks").
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - a single viewpoint with navigation, tracking and
//!   landmark operations
//! - [`camera::CameraManager`] - the cameras of one view, with the active
//!   one wired to the view's [`view::Interactor`]
//! - [`scene::Scene`] - actors a camera can follow or frame
//! - [`options::Options`] - defaults for new cameras and animations
//!
//! # Architecture
//!
//! Landmark animation is poll-driven: the host calls
//! [`camera::CameraManager::tick`] once per frame with the elapsed time and
//! re-renders when [`camera::CameraManager::take_redraw_request`] says so.
//! Actor motion reaches tracking cameras through
//! [`scene::Scene::move_actor`].

pub mod camera;
pub mod error;
pub mod options;
pub mod scene;
pub mod util;
pub mod view;
