#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! CPU Core Count Library
//!
//! This library reports the number of logical processors visible to the
//! current process. It exposes two access patterns over one shared
//! detection routine:
//! - [`cpu_core_count`]: an on-demand query that re-reads the OS value on
//!   every call and surfaces detection failures as [`DetectionError`]
//! - [`CPU_CORE_COUNT`]: a precomputed value captured at first access, with
//!   no error channel; it degrades to `0` when detection fails
//!
//! This is a standalone library that can be used by any hosting application
//! to size worker pools or gate features on available parallelism.

mod probe;

pub mod error;

pub use error::DetectionError;
pub use probe::{CPU_CORE_COUNT, CoreCountProbe, cpu_core_count};
