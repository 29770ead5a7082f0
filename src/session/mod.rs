//! Session assembly checks and errors.
//!
//! Follows the "collect them all" rule for cosmetic problems: every missing
//! asset is gathered with `Validation` and reported together, while party
//! problems fail construction immediately.

pub mod error;
pub mod validation;

pub use error::{AssetIssue, SessionError};
pub use validation::{
    check_assets, load_assets, validate_party, CosmeticAssets, MAX_PARTY_SIZE,
};
