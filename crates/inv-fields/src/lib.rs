//! Canonical forms for the scalar fields of an invoice document.
//!
//! Every field kind is a thin string newtype that keeps whatever the upstream
//! source delivered until [`Canonical::normalized`] is asked for its canonical
//! form. A failed canonicalization never mutates anything: it returns a
//! [`FieldError`] and leaves the recovery decision to the caller.
//!
//! # Field kinds
//!
//! - [`Date`]: calendar dates, canonical `YYYY-MM-DD`
//! - [`CurrencyCode`]: ISO 4217 alphabetic codes
//! - [`CountryCode`]: ISO 3166-1 alpha-2 codes
//! - [`VatId`]: European (and a few neighbouring) VAT identifiers
//! - [`Iban`] / [`Bic`]: bank account and bank identifiers
//! - [`EmailAddress`]: plain `local@domain` addresses
//!
//! # Guarantees
//!
//! - **Idempotent**: `x.normalized()?.normalized()? == x.normalized()?`
//! - **Pure**: no I/O, no global state beyond static lookup tables

mod bank;
mod country;
mod currency;
mod date;
mod email;
mod error;
mod vat;

pub use bank::{Bic, Iban};
pub use country::{CountryCode, is_country_code};
pub use currency::{CurrencyCode, is_currency_code};
pub use date::{Date, parse_date};
pub use email::EmailAddress;
pub use error::FieldError;
pub use vat::VatId;

/// A scalar field with a canonical textual form.
pub trait Canonical: Sized {
    /// Returns the canonical form of `self`, or the reason it has none.
    fn normalized(&self) -> Result<Self, FieldError>;
}
