//! # takeoff_core - Frame-Scaffold Quantity Takeoff Engine
//!
//! `takeoff_core` converts a structured description of a frame scaffold —
//! span counts, frame column mix, level layout, accessory options — into a
//! complete bill of materials with quantities and weights, plus transport
//! recommendations. All inputs and outputs are JSON-serializable, so the
//! engine drops into any form layer, drawing-recognition pipeline or export
//! backend as a pure collaborator.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function per concern; nothing survives an
//!   invocation
//! - **Total**: `calculate` and `validate` never fail — malformed foreign
//!   data is the sanitizer's problem, not the engine's
//! - **JSON-First**: every type implements Serialize/Deserialize
//! - **Ordered output**: the bill's category order is a contract, not a
//!   presentation choice
//!
//! ## Quick Start
//!
//! ```rust
//! use takeoff_core::{calculate, validate, ScaffoldConfig};
//!
//! let config = ScaffoldConfig::from_json_str(r#"{
//!     "span1800": 10,
//!     "levelCount": 3,
//!     "frameCols": { "900": 2 }
//! }"#).unwrap();
//!
//! let result = calculate(&config);
//! let verdicts = validate(&config);
//!
//! assert_eq!(result.jack_base_count, 33);
//! assert!(verdicts.jack_base_needed > 0);
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Scaffold configuration (the engine's sole input)
//! - [`calculations`] - Level resolution, plate packing, quantity rules,
//!   transport planning, and the pipeline that ties them together
//! - [`materials`] - Structured material keys, bill items, weight dictionary
//! - [`validation`] - Declared-vs-required cross-checks
//! - [`sanitize`] - Normalization of loosely-typed foreign documents
//! - [`export`] - CSV rendering of a finished bill
//! - [`errors`] - Structured error types for the I/O boundary

pub mod calculations;
pub mod config;
pub mod errors;
pub mod export;
pub mod materials;
pub mod sanitize;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalculationResult};
pub use config::ScaffoldConfig;
pub use errors::{CalcError, CalcResult};
pub use validation::{validate, ValidationResult, Verdict};
