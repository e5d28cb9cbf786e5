//! Normalization and reconciliation of invoice documents.
//!
//! [`Normalize`] corrects a document entity in place and reports every
//! correction through a [`Diagnostic`]. Nothing in a pass is fatal: invalid
//! scalars are cleared, negative amounts lose their sign, out-of-range
//! percentages are dropped, and the subtotal/tax/total triad is reconciled
//! (see [`reconcile`]). The diagnostic is advisory; the document is always
//! usable afterwards.
//!
//! ```
//! use inv_model::Invoice;
//! use inv_normalization::Normalize;
//! use rust_decimal_macros::dec;
//!
//! let mut invoice = Invoice {
//!     subtotal: Some(dec!(80.00)),
//!     total: Some(dec!(50.00)),
//!     ..Invoice::default()
//! };
//! let diagnostic = invoice.normalize().unwrap_err();
//! assert_eq!(invoice.tax, Some(dec!(30.00)));
//! assert_eq!(diagnostic.len(), 1);
//! ```

mod accounting;
mod address;
pub mod diagnostic;
mod invoice;
mod item;
pub mod money;
pub mod normalize;
pub mod reconcile;

pub use diagnostic::{Category, Diagnostic, Finding, Problem};
pub use money::{MAX_PERCENT, ONE_CENT, round_to_cents, within_one_cent};
pub use normalize::{Normalize, normalize_field};
