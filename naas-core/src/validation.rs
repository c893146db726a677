/// Name validation for tenants and namespaces

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::errors::{NaasError, Result};

const RESERVED_NAMES: [&str; 2] = ["true", "false"];

lazy_static! {
    // Letters are any Unicode letter; digits are decimal digits (Nd) only.
    static ref IDENTIFIER: Regex = Regex::new(r"^\p{L}[\p{L}\p{Nd}]*$").expect("identifier regex");
}

/// Accepts a letter followed by letters or digits, excluding the boolean literals.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(NaasError::invalid_input("name cannot be empty"));
    }

    if !is_valid_identifier(name) {
        return Err(NaasError::invalid_input(format!(
            "name must start with a letter and contain only letters and digits: {:?}",
            name
        )));
    }

    if RESERVED_NAMES.contains(&name) {
        return Err(NaasError::invalid_input(format!("name is reserved: {:?}", name)));
    }

    Ok(())
}

fn is_valid_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}
