use validator::ValidationErrors;

/// First human-readable message out of a failed `validate()`, struct-level
/// errors included. Fields are visited in name order so the result is stable.
pub fn first_message(errors: &ValidationErrors) -> String {
    let mut field_errors: Vec<_> = errors.field_errors().into_iter().collect();
    field_errors.sort_by(|a, b| a.0.cmp(&b.0));

    field_errors
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .map(|e| match &e.message {
            Some(message) => message.to_string(),
            None => e.code.to_string(),
        })
        .next()
        .unwrap_or_else(|| errors.to_string())
}
