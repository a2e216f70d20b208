//! # Holt-Winters Workspace
//!
//! Re-exports the [`holtwinters`] crate so the workspace root can be used as a
//! single dependency.
//!
//! ## Example
//!
//! ```
//! use holtwinters_workspace::HoltWinters;
//!
//! let series = [3.0, 10.0, 12.0, 13.0, 12.0, 10.0, 12.0, 14.0];
//! let model = HoltWinters::new(0.5, 0.4, 0.3, 4).unwrap();
//! let forecast = model.forecast(&series, 2).unwrap();
//!
//! assert_eq!(forecast.fitted().len(), 8);
//! assert_eq!(forecast.predictions().len(), 2);
//! ```

pub use holtwinters::*;
