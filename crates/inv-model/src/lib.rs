//! Document records for invoice normalization.
//!
//! Plain value records composed strictly top-down: an [`Invoice`] owns its
//! [`Address`]es, [`Item`]s and [`AccountingEntry`]s. Scalar fields use the
//! newtypes from `inv_fields`, amounts and percentages are
//! [`rust_decimal::Decimal`], and every optional field is an `Option`.
//!
//! The serde mapping follows the upstream JSON format: absent optional fields
//! are omitted, free text is trimmed on the way in, and wire enums accept
//! unknown values so that a bad field never rejects a whole document.

pub mod accounting;
pub mod address;
pub mod error;
pub mod invoice;
pub mod item;
pub mod kinds;
pub mod masterdata;
pub mod wire;

pub use accounting::AccountingEntry;
pub use address::Address;
pub use error::InvalidEnumValue;
pub use invoice::Invoice;
pub use item::Item;
pub use kinds::{AccountingEntryType, InvoiceType, PaymentStatus};
pub use masterdata::{
    BankAccount, Company, ForAccountingInvoice, ForInvoice, GeneralLedgerAccount, PartnerCompany,
};
