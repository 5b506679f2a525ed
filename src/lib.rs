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

//! Gamepad and keyboard/mouse navigation for 3D cameras.
//!
//! A background [`gamepad::GamepadInputReader`] polls a joystick device
//! and publishes its button/axis state through a lock-free triple buffer.
//! Once per frame the [`navigation::NavigationController`] reads the
//! latest snapshot, folds it together with keyboard and pointer input,
//! and moves the camera of the host's [`camera::RenderTarget`].
//!
//! # Key entry points
//!
//! - [`NavigationController`] - per-frame input fusion and camera motion
//! - [`GamepadInputReader`] - device polling thread and snapshot hand-off
//! - [`camera::NavigationHost`] - what the windowing side provides
//! - [`Options`] - device, motion and fly-to configuration (TOML)
//!
//! # Modes
//!
//! Free-fly mode gives strafing, free look, four fly-to destinations and
//! model spin. Turntable mode restricts the gamepad to planar movement.
//! The gamepad's mode button switches between them on its press edge.

pub mod camera;
pub mod error;
pub mod gamepad;
pub mod input;
pub mod navigation;
pub mod options;

pub use camera::{Camera, NavigationHost, RenderTarget, Viewport};
pub use error::NavError;
pub use gamepad::{GamepadInputReader, GamepadState};
pub use input::KeySym;
pub use navigation::{NavigationController, NavigationMode};
pub use options::Options;
