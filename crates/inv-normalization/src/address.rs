use inv_model::Address;

use crate::diagnostic::Diagnostic;
use crate::normalize::{Normalize, normalize_field};

/// Only the country is canonicalized; street, city, state and postal code
/// are free text.
impl Normalize for Address {
    fn normalize_into(&mut self, diag: &mut Diagnostic) {
        normalize_field(&mut self.country, "country", diag);
    }
}

/// An absent address trivially normalizes.
impl Normalize for Option<Address> {
    fn normalize_into(&mut self, diag: &mut Diagnostic) {
        if let Some(address) = self.as_mut() {
            address.normalize_into(diag);
        }
    }
}
