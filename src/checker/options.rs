use super::result::Diagnostic;

/// Check a rule's primary option against the values it accepts.
///
/// # Errors
/// Returns an invalid-option diagnostic when the option is absent or not one
/// of `possible`.
pub fn validate_option(
    rule: &'static str,
    actual: Option<&str>,
    possible: &[&str],
) -> Result<(), Diagnostic> {
    match actual {
        None => Err(Diagnostic::invalid_option(
            rule,
            format!("Expected option value for rule \"{rule}\""),
        )),
        Some(value) if possible.contains(&value) => Ok(()),
        Some(value) => Err(Diagnostic::invalid_option(
            rule,
            format!("Invalid option value \"{value}\" for rule \"{rule}\""),
        )),
    }
}
