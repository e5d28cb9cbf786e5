use inv_model::{Invoice, InvoiceType, PaymentStatus};
use tracing::{debug, debug_span};

use crate::diagnostic::{Diagnostic, Problem};
use crate::normalize::{
    Normalize, clean_text_list, normalize_amount, normalize_field, normalize_percent,
};
use crate::reconcile::Triad;

impl Normalize for Invoice {
    fn normalize_into(&mut self, diag: &mut Diagnostic) {
        let span = debug_span!("normalize_invoice", invoice_id = ?self.invoice_id);
        let _guard = span.enter();

        if let Err(error) = self.invoice_type.validate() {
            diag.record("type", error);
            self.invoice_type = InvoiceType::Unset;
        }

        normalize_field(&mut self.issue_date, "issue_date", diag);
        normalize_field(&mut self.period_start, "period_start", diag);
        normalize_field(&mut self.period_end, "period_end", diag);
        if let (Some(start), Some(end)) = (&self.period_start, &self.period_end)
            && start.to_naive() > end.to_naive()
        {
            diag.record(
                "period_start",
                Problem::PeriodReversed {
                    start: start.to_string(),
                    end: end.to_string(),
                },
            );
            self.period_start = None;
        }
        normalize_field(&mut self.due_date, "due_date", diag);
        normalize_field(&mut self.order_date, "order_date", diag);

        clean_text_list(&mut self.delivery_note_ids);

        normalize_field(&mut self.issuer_vat_id, "issuer_vat_id", diag);
        diag.merge("issuer_address", self.issuer_address.normalize());
        normalize_field(&mut self.customer_vat_id, "customer_vat_id", diag);
        normalize_field(&mut self.customer_email, "customer_email", diag);
        diag.merge(
            "customer_billing_address",
            self.customer_billing_address.normalize(),
        );
        diag.merge(
            "customer_shipping_address",
            self.customer_shipping_address.normalize(),
        );

        Triad {
            subtotal: &mut self.subtotal,
            tax: &mut self.tax,
            total: &mut self.total,
        }
        .reconcile(diag);

        normalize_field(&mut self.currency, "currency", diag);

        if let Err(error) = self.payment_status.validate() {
            diag.record("payment_status", error);
            self.payment_status = PaymentStatus::Unpaid;
        }
        normalize_field(&mut self.paid_date, "paid_date", diag);
        normalize_field(&mut self.payment_iban, "payment_iban", diag);
        normalize_field(&mut self.payment_bic, "payment_bic", diag);

        normalize_percent(&mut self.discount_percent, "discount_percent", true, diag);
        normalize_amount(&mut self.discount_amount, "discount_amount", true, diag);
        normalize_field(&mut self.discount_until_date, "discount_until_date", diag);

        clean_text_list(&mut self.notes);

        self.items.retain(|item| !item.is_empty());
        for (index, item) in self.items.iter_mut().enumerate() {
            diag.merge(&format!("items[{index}]"), item.normalize());
        }
        self.items.retain(|item| !item.is_empty());

        self.accounting_entries.retain(|entry| !entry.is_empty());
        for (index, entry) in self.accounting_entries.iter_mut().enumerate() {
            diag.merge(&format!("accounting_entries[{index}]"), entry.normalize());
        }
        self.accounting_entries.retain(|entry| !entry.is_empty());

        debug!(
            items = self.items.len(),
            accounting_entries = self.accounting_entries.len(),
            findings = diag.len(),
            "invoice normalized"
        );
    }
}
