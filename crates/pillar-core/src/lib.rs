//! # Pillar Core
//!
//! Core types for the Pillar rate curve library.
//!
//! This crate provides the foundational building blocks used by the curve
//! crates:
//!
//! - **Types**: The [`Date`] calendar type with a linear day count
//! - **Errors**: The [`PillarError`] type shared by the core surface
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use pillar_core::types::Date;
//!
//! let anchor = Date::from_ymd(2024, 5, 17).unwrap();
//! let pillar = Date::from_ymd(2024, 8, 15).unwrap();
//! assert_eq!(anchor.days_between(&pillar), 90);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PillarError, PillarResult};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{PillarError, PillarResult};
pub use types::Date;
