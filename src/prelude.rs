//! Convenience re-exports for common use.

pub use crate::client::{ApiResponse, LicenseInfo, LicenseType, RadioCodeCalculator};
pub use crate::config::RadioConfig;
pub use crate::error::{ErrorCode, RadioError, Result};
pub use crate::models::{CatalogModel, ModelRef, PatternSet, RadioModel};
pub use crate::transport::{RequestForm, Transport};
