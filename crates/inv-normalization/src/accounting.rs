use inv_model::{AccountingEntry, AccountingEntryType};
use tracing::debug;

use crate::diagnostic::{Diagnostic, Problem};
use crate::money::round_to_cents;
use crate::normalize::{Normalize, normalize_amount, normalize_percent};

impl Normalize for AccountingEntry {
    fn normalize_into(&mut self, diag: &mut Diagnostic) {
        debug!(account = %self.general_ledger_account_number, "normalizing accounting entry");
        // A missing type is a required field left empty; anything else
        // outside the set is invalid
        if self.entry_type.is_unset() {
            diag.record("type", Problem::Empty);
        } else if let Err(error) = self.entry_type.validate() {
            diag.record("type", error);
            self.entry_type = AccountingEntryType::Unset;
        }
        if self.general_ledger_account_number.trim().is_empty() {
            diag.record("general_ledger_account_number", Problem::Empty);
            self.general_ledger_account_number.clear();
        }
        self.amount = round_to_cents(self.amount.abs());
        normalize_amount(&mut self.tax_amount, "tax_amount", false, diag);
        normalize_percent(&mut self.tax_percent, "tax_percent", false, diag);
        if self.booking_text.trim().is_empty() {
            diag.record("booking_text", Problem::Empty);
            self.booking_text.clear();
        }
    }
}
