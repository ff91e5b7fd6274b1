use std::str::FromStr;

use validator::{ValidationError, ValidationErrors};

use crate::app::error::FieldViolation;

/// Codes that only make sense next to the field they describe. They are
/// reported as `<FIELD>_<CODE>`, e.g. `TITLE_NOT_BLANK`.
const FIELD_PREFIXED_CODES: &[&str] = &["NOT_BLANK", "TOO_LONG", "INVALID"];

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("NOT_BLANK"));
    }
    Ok(())
}

/// Rejects strings that do not name a variant of `E`.
pub fn must_be_any_of<E: FromStr>(value: &str, code: &'static str) -> Result<(), ValidationError> {
    E::from_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new(code))
}

/// `members_usernames` -> `membersUsernames`
pub fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `membersUsernames` or `members_usernames` -> `MEMBERS_USERNAMES`
pub fn screaming_snake_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for c in field.chars() {
        if c.is_ascii_uppercase() && !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

/// Flatten validator output into the `[{field, message}]` list returned to callers.
/// Sorted so responses are stable.
pub fn violations_from(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let code = err.code.to_string();
                let message = if FIELD_PREFIXED_CODES.contains(&code.as_str()) {
                    format!("{}_{}", screaming_snake_case(&field), code)
                } else {
                    code
                };
                FieldViolation {
                    field: camel_case(&field),
                    message,
                }
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    violations
}
