/// Validates that the input looks like an email address.
///
/// Deliberately permissive: one `@` separating a non-empty local part from a
/// domain that contains at least one `.` with characters on both sides, and no
/// whitespace anywhere. Not a full address-grammar check.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.split_once('.') {
        Some((host, rest)) => !host.is_empty() && !rest.is_empty(),
        None => false,
    }
}
