//! Static pay table data assets
//!
//! The base pay and BAH tables are pure data, injected into the engine's
//! resolvers rather than hard-coded inside them. That keeps a different
//! year's figures a data swap, and lets tests run the resolvers against
//! small synthetic tables.

pub mod bah;
pub mod base_pay;

pub use bah::{BahRate, BahTable, GradeBucket};
pub use base_pay::{yos_band, BasePayTable, YOS_BANDS};
