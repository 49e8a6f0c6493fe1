use boxing_core::errors::BoxingError;
use boxing_core::rules::validation::{validate_boxer_fields, AGE_RANGE};
use proptest::prelude::*;

fn invalid_field(result: Result<(), BoxingError>) -> Option<String> {
    match result {
        Err(BoxingError::InvalidField { field, .. }) => Some(field),
        _ => None,
    }
}

#[test]
fn test_rejects_blank_name() {
    let field = invalid_field(validate_boxer_fields("   ", 180.0, 70.0, 72.5, 28));
    assert_eq!(field.as_deref(), Some("name"));
}

#[test]
fn test_rejects_light_weight() {
    let field = invalid_field(validate_boxer_fields("Ali", 124.9, 70.0, 72.5, 28));
    assert_eq!(field.as_deref(), Some("weight"));
}

#[test]
fn test_rejects_non_positive_height_and_reach() {
    let field = invalid_field(validate_boxer_fields("Ali", 180.0, 0.0, 72.5, 28));
    assert_eq!(field.as_deref(), Some("height"));

    let field = invalid_field(validate_boxer_fields("Ali", 180.0, 70.0, -1.0, 28));
    assert_eq!(field.as_deref(), Some("reach"));

    let field = invalid_field(validate_boxer_fields("Ali", 180.0, 70.0, f64::NAN, 28));
    assert_eq!(field.as_deref(), Some("reach"));
}

#[test]
fn test_age_bounds_are_inclusive() {
    assert!(validate_boxer_fields("Ali", 180.0, 70.0, 72.5, 18).is_ok());
    assert!(validate_boxer_fields("Ali", 180.0, 70.0, 72.5, 40).is_ok());

    let field = invalid_field(validate_boxer_fields("Ali", 180.0, 70.0, 72.5, 17));
    assert_eq!(field.as_deref(), Some("age"));
    let field = invalid_field(validate_boxer_fields("Ali", 180.0, 70.0, 72.5, 41));
    assert_eq!(field.as_deref(), Some("age"));
}

proptest! {
    #[test]
    fn prop_in_range_fields_are_accepted(
        weight in 125.0f64..400.0,
        height in 0.1f64..100.0,
        reach in 0.1f64..100.0,
        age in AGE_RANGE,
    ) {
        prop_assert!(validate_boxer_fields("Ali", weight, height, reach, age).is_ok());
    }

    #[test]
    fn prop_out_of_range_age_is_rejected(age in prop_oneof![-100i64..18, 41i64..200]) {
        let field = invalid_field(validate_boxer_fields("Ali", 180.0, 70.0, 72.5, age));
        prop_assert_eq!(field.as_deref(), Some("age"));
    }
}
