//! Findings collected during one normalization pass.
//!
//! A [`Diagnostic`] is an ordered list of [`Finding`]s. Recording never
//! fails and never stops the pass; [`Diagnostic::finish`] turns the list into
//! `Ok(())` or one composite error at the end.

use std::fmt;

use inv_fields::FieldError;
use inv_model::InvalidEnumValue;
use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

/// Kind of correction a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A scalar has no canonical form; the field was cleared.
    FieldInvalid,
    /// A bounded number exceeded its bound; the field was cleared.
    OutOfRange,
    /// A non-negative number was negative; its absolute value was kept.
    SignInvalid,
    /// Related fields disagreed; one of them was corrected.
    CrossFieldInconsistent,
    /// A required field is empty; nothing could be filled in.
    RequiredEmpty,
}

impl Category {
    pub const fn all() -> &'static [Self] {
        &[
            Self::FieldInvalid,
            Self::OutOfRange,
            Self::SignInvalid,
            Self::CrossFieldInconsistent,
            Self::RequiredEmpty,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FieldInvalid => "Field invalid",
            Self::OutOfRange => "Out of range",
            Self::SignInvalid => "Sign invalid",
            Self::CrossFieldInconsistent => "Cross-field inconsistent",
            Self::RequiredEmpty => "Required but empty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What was wrong with a field; each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Problem {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Enum(#[from] InvalidEnumValue),

    #[error("{value} is greater than 100%")]
    PercentAboveMax { value: Decimal },

    #[error("{value} is negative")]
    Negative { value: Decimal },

    #[error("subtotal {subtotal} is greater than total {total}")]
    SubtotalAboveTotal { subtotal: Decimal, total: Decimal },

    #[error("tax {tax} is greater than total {total}")]
    TaxAboveTotal { tax: Decimal, total: Decimal },

    #[error("subtotal {subtotal} and tax {tax} do not sum up to total {total}")]
    SumMismatch {
        subtotal: Decimal,
        tax: Decimal,
        total: Decimal,
    },

    #[error("subtotal {subtotal} and tax {tax} add up to more than an amount can hold")]
    SumOverflow { subtotal: Decimal, tax: Decimal },

    #[error("period start date {start} is after period end date {end}")]
    PeriodReversed { start: String, end: String },

    #[error("required field is empty")]
    Empty,
}

impl Problem {
    pub fn category(&self) -> Category {
        match self {
            Problem::Field(_) | Problem::Enum(_) => Category::FieldInvalid,
            Problem::PercentAboveMax { .. } => Category::OutOfRange,
            Problem::Negative { .. } => Category::SignInvalid,
            Problem::SubtotalAboveTotal { .. }
            | Problem::TaxAboveTotal { .. }
            | Problem::SumMismatch { .. }
            | Problem::SumOverflow { .. }
            | Problem::PeriodReversed { .. } => Category::CrossFieldInconsistent,
            Problem::Empty => Category::RequiredEmpty,
        }
    }
}

/// One labeled problem. The context is a field path such as
/// `items[2].currency`.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub context: String,
    pub problem: Problem,
}

impl Finding {
    pub fn category(&self) -> Category {
        self.problem.category()
    }

    pub fn message(&self) -> String {
        self.problem.to_string()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.problem)
    }
}

impl Serialize for Finding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Finding", 3)?;
        state.serialize_field("context", &self.context)?;
        state.serialize_field("category", &self.category())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Ordered collection of findings; also the composite error of a pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostic {
    findings: Vec<Finding>,
}

impl Diagnostic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, context: impl Into<String>, problem: impl Into<Problem>) {
        let finding = Finding {
            context: context.into(),
            problem: problem.into(),
        };
        debug!(
            context = %finding.context,
            category = finding.category().label(),
            "recorded finding"
        );
        self.findings.push(finding);
    }

    /// Record the error of `result`, if any, and hand back the success value.
    pub fn record_result<T, E: Into<Problem>>(
        &mut self,
        context: impl Into<String>,
        result: Result<T, E>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.record(context, error);
                None
            }
        }
    }

    /// Append the findings of a nested pass, prefixing each context with
    /// `context` (`items[2]` + `currency` becomes `items[2].currency`).
    pub fn merge(&mut self, context: &str, nested: Result<(), Diagnostic>) {
        let Err(nested) = nested else {
            return;
        };
        self.findings
            .extend(nested.findings.into_iter().map(|finding| Finding {
                context: format!("{context}.{}", finding.context),
                problem: finding.problem,
            }));
    }

    pub fn finish(self) -> Result<(), Diagnostic> {
        if self.findings.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn count(&self, category: Category) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.category() == category)
            .count()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, finding) in self.findings.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{finding}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}
