//! Radio Code Calculator SDK
//!
//! Client for the Radio Code Calculator web API, which generates unlock
//! codes for car radios and navigation units, plus offline validation of
//! serial numbers against each radio model's length and pattern rules.
//!
//! # Quick Start
//!
//! ```no_run
//! use radio_code::prelude::*;
//!
//! # async fn example() -> radio_code::error::Result<()> {
//! let calculator = RadioCodeCalculator::new("ABCD-ABCD-ABCD-ABCD")?;
//! let model = CatalogModel::FordMSeries.model();
//!
//! if model.validate("123456", None) == ErrorCode::Success {
//!     let code = calculator.calc(&model, "123456", None).await.into_result()?;
//!     println!("{code}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod prelude;
pub mod transport;
pub mod util;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;
