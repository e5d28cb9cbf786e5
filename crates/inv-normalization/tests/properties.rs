#![allow(missing_docs)]
// Property-based tests for document normalization.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::collections::BTreeSet;

use inv_fields::{CountryCode, CurrencyCode, Date, EmailAddress, Iban, VatId};
use inv_model::{
    AccountingEntry, AccountingEntryType, Address, Invoice, InvoiceType, Item, PaymentStatus,
};
use inv_normalization::{Category, MAX_PERCENT, Normalize, ONE_CENT};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn arb_amount() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of((-10_000_000i64..10_000_000, 0u32..4).prop_map(|(n, s)| Decimal::new(n, s)))
}

fn arb_percent() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of((-25_000i64..25_000, 0u32..3).prop_map(|(n, s)| Decimal::new(n, s)))
}

fn arb_date() -> impl Strategy<Value = Option<Date>> {
    prop::option::of(
        prop::sample::select(vec![
            "2024-01-31",
            "31.01.2024",
            "2024/02/29",
            "20240315",
            "2024-03-15T10:00:00Z",
            "2023-02-29",
            "soon",
        ])
        .prop_map(Date::new),
    )
}

fn arb_currency() -> impl Strategy<Value = Option<CurrencyCode>> {
    prop::option::of(
        prop::sample::select(vec!["EUR", "eur", "€", "chf", "Taler", ""]).prop_map(CurrencyCode::new),
    )
}

fn arb_text_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(r"[ a-z]{0,4}", 0..4)
}

fn arb_item() -> impl Strategy<Value = Item> {
    (
        prop::option::of(r"[a-z]{1,6}"),
        prop::option::of(-100.0f64..100.0),
        arb_amount(),
        arb_amount(),
        arb_percent(),
        arb_currency(),
        arb_percent(),
    )
        .prop_map(
            |(description, quantity, unit_price, subtotal, tax_percent, currency, discount_percent)| {
                Item {
                    description,
                    quantity,
                    unit_price,
                    subtotal,
                    tax_percent,
                    currency,
                    discount_percent,
                    ..Item::default()
                }
            },
        )
}

fn arb_entry() -> impl Strategy<Value = AccountingEntry> {
    (
        prop::sample::select(vec!["CREDIT", "DEBIT", "", "HABEN"]),
        r"[ 0-9]{0,4}",
        (-1_000_000i64..1_000_000).prop_map(|n| Decimal::new(n, 2)),
        arb_amount(),
        arb_percent(),
        r"[ a-z]{0,6}",
    )
        .prop_map(|(kind, account, amount, tax_amount, tax_percent, booking_text)| {
            AccountingEntry {
                entry_type: AccountingEntryType::from(Some(kind.to_string())),
                general_ledger_account_number: account,
                amount,
                tax_amount,
                tax_percent,
                booking_text,
                ..AccountingEntry::default()
            }
        })
}

fn arb_invoice() -> impl Strategy<Value = Invoice> {
    let dates = (arb_date(), arb_date(), arb_date(), arb_date(), arb_date());
    let amounts = (arb_amount(), arb_amount(), arb_amount(), arb_percent(), arb_amount());
    let rest = (
        arb_currency(),
        prop::option::of(prop::sample::select(vec!["at", "UK", "Narnia"])),
        prop::option::of(prop::sample::select(vec![
            "DE89 3704 0044 0532 0130 00",
            "DE89370400440532013001",
        ])),
        prop::sample::select(vec!["UNPAID", "PAID_WITH_CASH", "LATER"]),
        arb_text_list(),
        arb_text_list(),
        prop::collection::vec(prop_oneof![1 => Just(Item::default()), 4 => arb_item()], 0..4),
        prop::collection::vec(
            prop_oneof![1 => Just(AccountingEntry::default()), 4 => arb_entry()],
            0..3,
        ),
    );
    (dates, amounts, rest).prop_map(
        |(
            (issue_date, period_start, period_end, due_date, paid_date),
            (subtotal, tax, total, discount_percent, discount_amount),
            (currency, country, iban, status, notes, delivery_note_ids, items, entries),
        )| Invoice {
            issue_date,
            period_start,
            period_end,
            due_date,
            paid_date,
            subtotal,
            tax,
            total,
            discount_percent,
            discount_amount,
            currency,
            customer_billing_address: country.map(|code| Address {
                country: Some(CountryCode::new(code)),
                ..Address::default()
            }),
            payment_iban: iban.map(Iban::new),
            payment_status: PaymentStatus::from(Some(status.to_string())),
            notes,
            delivery_note_ids,
            items,
            accounting_entries: entries,
            ..Invoice::default()
        },
    )
}

// ---------------------------------------------------------------------------
// Generators without silent corrections: values are canonical or invalid,
// amounts are cent-rounded, and line signs are positive
// ---------------------------------------------------------------------------

fn pick<T: Clone + std::fmt::Debug + 'static>(values: Vec<T>) -> impl Strategy<Value = T> {
    prop::sample::select(values)
}

fn cents(range: std::ops::Range<i64>) -> impl Strategy<Value = Decimal> {
    range.prop_map(|n| Decimal::new(n, 2))
}

fn canonical_date() -> impl Strategy<Value = Option<Date>> {
    prop::option::of(pick(vec!["2024-01-31", "2024-02-29", "2023-02-29", "soon"]).prop_map(Date::new))
}

fn canonical_currency() -> impl Strategy<Value = Option<CurrencyCode>> {
    prop::option::of(pick(vec!["EUR", "CHF", "Taler"]).prop_map(CurrencyCode::new))
}

fn canonical_item() -> impl Strategy<Value = Item> {
    (
        r"[a-z]{1,6}",
        prop::option::of(0.0f64..100.0),
        prop::option::of(cents(0..100_000)),
        prop::option::of(cents(0..25_000)),
        canonical_currency(),
        prop::option::of(cents(0..25_000)),
    )
        .prop_map(
            |(description, quantity, unit_price, tax_percent, currency, discount_percent)| Item {
                description: Some(description),
                quantity,
                unit_price,
                tax_percent,
                currency,
                discount_percent,
                ..Item::default()
            },
        )
}

fn canonical_entry() -> impl Strategy<Value = AccountingEntry> {
    (
        pick(vec!["CREDIT", "DEBIT", "", "HABEN"]),
        r"[0-9]{0,4}",
        cents(1..1_000_000),
        prop::option::of(cents(0..25_000)),
        r"[a-z]{0,6}",
    )
        .prop_map(|(kind, account, amount, tax_percent, booking_text)| AccountingEntry {
            entry_type: AccountingEntryType::from(Some(kind.to_string())),
            general_ledger_account_number: account,
            amount,
            tax_percent,
            booking_text,
            ..AccountingEntry::default()
        })
}

fn canonical_invoice() -> impl Strategy<Value = Invoice> {
    let header = (
        pick(vec![InvoiceType::Incoming, InvoiceType::Unrecognized("sideways".to_string())]),
        (canonical_date(), canonical_date(), canonical_date(), canonical_date(), canonical_date()),
        prop::option::of(pick(vec!["ATU12345678", "ATU1234"]).prop_map(VatId::new)),
        prop::option::of(pick(vec!["billing@example.com", "not-an-email"]).prop_map(EmailAddress::new)),
        prop::option::of(pick(vec!["AT", "DE", "Narnia"])),
    );
    let money = (
        (
            prop::option::of(cents(0..10_000_000)),
            prop::option::of(cents(0..10_000_000)),
            prop::option::of(cents(0..10_000_000)),
        ),
        canonical_currency(),
        prop::option::of(cents(-10_000..15_000)),
        prop::option::of(cents(-100_000..100_000)),
        prop::option::of(
            pick(vec!["DE89370400440532013000", "DE89370400440532013001"]).prop_map(Iban::new),
        ),
        pick(vec!["UNPAID", "PAID_WITH_CASH", "LATER"]),
    );
    let lists = (
        prop::collection::vec(r"[a-z]{1,4}", 0..3),
        prop::collection::vec(canonical_item(), 0..3),
        prop::collection::vec(canonical_entry(), 0..3),
    );
    (header, money, lists).prop_map(
        |(
            (invoice_type, (issue_date, period_start, period_end, due_date, paid_date), vat_id, email, country),
            ((subtotal, tax, total), currency, discount_percent, discount_amount, iban, status),
            (notes, items, entries),
        )| Invoice {
            invoice_type,
            issue_date,
            period_start,
            period_end,
            due_date,
            paid_date,
            issuer_vat_id: vat_id,
            customer_email: email,
            customer_billing_address: country.map(|code| Address {
                city: Some("Graz".to_string()),
                country: Some(CountryCode::new(code)),
                ..Address::default()
            }),
            subtotal,
            tax,
            total,
            currency,
            discount_percent,
            discount_amount,
            payment_iban: iban,
            payment_status: PaymentStatus::from(Some(status.to_string())),
            notes,
            items,
            accounting_entries: entries,
            ..Invoice::default()
        },
    )
}

/// Field paths, in diagnostic context form, whose value differs. The
/// subtotal/tax/total triad is left out: it fills absent amounts by design.
fn changed_fields(before: &Invoice, after: &Invoice) -> BTreeSet<String> {
    let mut changed = BTreeSet::new();
    let mut mark = |differs: bool, context: String| {
        if differs {
            changed.insert(context);
        }
    };
    mark(before.invoice_type != after.invoice_type, "type".into());
    mark(before.issue_date != after.issue_date, "issue_date".into());
    mark(before.period_start != after.period_start, "period_start".into());
    mark(before.period_end != after.period_end, "period_end".into());
    mark(before.due_date != after.due_date, "due_date".into());
    mark(before.paid_date != after.paid_date, "paid_date".into());
    mark(before.issuer_vat_id != after.issuer_vat_id, "issuer_vat_id".into());
    mark(before.customer_email != after.customer_email, "customer_email".into());
    mark(
        before.customer_billing_address != after.customer_billing_address,
        "customer_billing_address.country".into(),
    );
    mark(before.currency != after.currency, "currency".into());
    mark(before.payment_status != after.payment_status, "payment_status".into());
    mark(before.payment_iban != after.payment_iban, "payment_iban".into());
    mark(before.discount_percent != after.discount_percent, "discount_percent".into());
    mark(before.discount_amount != after.discount_amount, "discount_amount".into());
    mark(before.notes != after.notes, "notes".into());

    for (index, (old, new)) in before.items.iter().zip(&after.items).enumerate() {
        let at = |field: &str| format!("items[{index}].{field}");
        mark(old.quantity != new.quantity, at("quantity"));
        mark(old.unit_price != new.unit_price, at("unit_price"));
        mark(old.tax_percent != new.tax_percent, at("tax_percent"));
        mark(old.currency != new.currency, at("currency"));
        mark(old.discount_percent != new.discount_percent, at("discount_percent"));
    }
    for (index, (old, new)) in before
        .accounting_entries
        .iter()
        .zip(&after.accounting_entries)
        .enumerate()
    {
        let at = |field: &str| format!("accounting_entries[{index}].{field}");
        mark(old.entry_type != new.entry_type, at("type"));
        mark(
            old.general_ledger_account_number != new.general_ledger_account_number,
            at("general_ledger_account_number"),
        );
        mark(old.amount != new.amount, at("amount"));
        mark(old.tax_percent != new.tax_percent, at("tax_percent"));
        mark(old.booking_text != new.booking_text, at("booking_text"));
    }
    changed
}

fn is_non_negative(amount: Option<Decimal>) -> bool {
    amount.is_none_or(|value| !value.is_sign_negative() || value.is_zero())
}

fn is_bounded(percent: Option<Decimal>) -> bool {
    percent.is_none_or(|value| value >= Decimal::ZERO && value <= MAX_PERCENT)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn normalization_is_idempotent(mut invoice in arb_invoice()) {
        let _ = invoice.normalize();
        let once = invoice.clone();
        let second = invoice.normalize();
        prop_assert_eq!(&invoice, &once);
        if let Err(diag) = second {
            prop_assert!(diag.findings().iter().all(|f| f.category() == Category::RequiredEmpty));
        }
    }

    #[test]
    fn amounts_are_non_negative(mut invoice in arb_invoice()) {
        let _ = invoice.normalize();
        prop_assert!(is_non_negative(invoice.subtotal));
        prop_assert!(is_non_negative(invoice.tax));
        prop_assert!(is_non_negative(invoice.total));
        prop_assert!(is_non_negative(invoice.discount_amount));
        for item in &invoice.items {
            prop_assert!(item.quantity.is_none_or(|q| q >= 0.0));
            prop_assert!(is_non_negative(item.unit_price));
            prop_assert!(is_non_negative(item.subtotal));
        }
        for entry in &invoice.accounting_entries {
            prop_assert!(is_non_negative(Some(entry.amount)));
            prop_assert!(is_non_negative(entry.tax_amount));
        }
    }

    #[test]
    fn percentages_are_bounded(mut invoice in arb_invoice()) {
        let _ = invoice.normalize();
        prop_assert!(is_bounded(invoice.discount_percent));
        for item in &invoice.items {
            prop_assert!(is_bounded(item.tax_percent));
            prop_assert!(is_bounded(item.discount_percent));
        }
        for entry in &invoice.accounting_entries {
            prop_assert!(is_bounded(entry.tax_percent));
        }
    }

    #[test]
    fn triad_closes(mut invoice in arb_invoice()) {
        let present_before = invoice.amounts_present();
        let _ = invoice.normalize();
        if present_before >= 2 {
            let subtotal = invoice.subtotal.unwrap_or_default();
            let tax = invoice.tax.unwrap_or_default();
            let total = invoice.total.unwrap_or_default();
            prop_assert_eq!(invoice.amounts_present(), 3);
            prop_assert!((subtotal + tax - total).abs() <= ONE_CENT);
        } else {
            prop_assert_eq!(invoice.amounts_present(), present_before);
        }
    }

    #[test]
    fn lists_are_clean(mut invoice in arb_invoice()) {
        let _ = invoice.normalize();
        prop_assert!(invoice.notes.iter().all(|note| !note.is_empty() && note.trim() == note));
        prop_assert!(invoice.delivery_note_ids.iter().all(|id| !id.is_empty() && id.trim() == id));
        prop_assert!(invoice.items.iter().all(|item| !item.is_empty()));
        prop_assert!(invoice.accounting_entries.iter().all(|entry| !entry.is_empty()));
    }

    #[test]
    fn every_change_is_reported(invoice in canonical_invoice()) {
        let mut normalized = invoice.clone();
        let findings: Vec<_> = match normalized.normalize() {
            Ok(()) => Vec::new(),
            Err(diag) => diag
                .findings()
                .iter()
                .filter(|f| f.category() != Category::RequiredEmpty)
                .filter(|f| !matches!(f.context.as_str(), "subtotal" | "tax" | "total"))
                .map(|f| f.context.clone())
                .collect(),
        };
        prop_assert_eq!(normalized.items.len(), invoice.items.len());
        prop_assert_eq!(normalized.accounting_entries.len(), invoice.accounting_entries.len());

        let changed = changed_fields(&invoice, &normalized);
        let reported: BTreeSet<String> = findings.iter().cloned().collect();
        prop_assert_eq!(findings.len(), reported.len());
        prop_assert_eq!(changed, reported);
    }

    #[test]
    fn period_is_ordered(mut invoice in arb_invoice()) {
        let _ = invoice.normalize();
        if let (Some(start), Some(end)) = (&invoice.period_start, &invoice.period_end) {
            prop_assert!(start.to_naive() <= end.to_naive());
        }
    }
}
