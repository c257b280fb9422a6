use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Form body for appending the next year's record
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddRecordForm {
    pub country_id: i64,
    pub u5mr: f64,
}

/// Form body for changing an existing record
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRecordForm {
    pub country_id: i64,
    pub year: i64,
    pub u5mr: f64,
}

/// Form body for deleting an inclusive year range
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_year_range"))]
pub struct DeleteRangeForm {
    pub country_id: i64,
    pub start_year: i64,
    pub end_year: i64,
}

fn validate_year_range(form: &DeleteRangeForm) -> Result<(), ValidationError> {
    if form.start_year > form.end_year {
        return Err(ValidationError::new("year_range")
            .with_message("Start Year cannot be greater than End Year.".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(start_year: i64, end_year: i64) -> DeleteRangeForm {
        DeleteRangeForm {
            country_id: 1,
            start_year,
            end_year,
        }
    }

    #[test]
    fn test_year_range_accepts_ordered_and_single_year() {
        assert!(form(2000, 2005).validate().is_ok());
        assert!(form(2010, 2010).validate().is_ok());
    }

    #[test]
    fn test_year_range_rejects_reversed() {
        assert!(form(2005, 2000).validate().is_err());
    }
}
