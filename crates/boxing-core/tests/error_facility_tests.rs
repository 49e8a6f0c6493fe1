use boxing_core::errors::{BoxingError, ExError, ExErrorKind};

#[test]
fn test_duplicate_boxer_maps_to_duplicate_entity() {
    let err: ExError = BoxingError::DuplicateBoxer {
        name: "Ali".to_string(),
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::DuplicateEntity);
    assert_eq!(err.code(), "ERR_DUPLICATE_ENTITY");
    assert_eq!(err.entity_id(), Some("Ali"));
    assert!(err.message().contains("already exists"));
}

#[test]
fn test_missing_boxer_maps_to_not_found() {
    let by_id: ExError = BoxingError::BoxerNotFound { boxer_id: 999 }.into();
    assert_eq!(by_id.kind(), ExErrorKind::NotFound);
    assert_eq!(by_id.entity_id(), Some("999"));
    assert!(by_id.message().contains("not found"));

    let by_name: ExError = BoxingError::BoxerNameNotFound {
        name: "Nobody".to_string(),
    }
    .into();
    assert_eq!(by_name.kind(), ExErrorKind::NotFound);
    assert_eq!(by_name.entity_id(), Some("Nobody"));
}

#[test]
fn test_invalid_field_keeps_field_name() {
    let err: ExError = BoxingError::InvalidField {
        field: "age".to_string(),
        reason: "must be between 18 and 40, got 41".to_string(),
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.field(), Some("age"));
    assert_eq!(err.message(), "Invalid age: must be between 18 and 40, got 41");
}

#[test]
fn test_malformed_row_is_persistence() {
    let err: ExError = BoxingError::MalformedRow {
        reason: "expected 6 columns, got 2".to_string(),
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(err.op(), Some("decode_row"));
}

#[test]
fn test_display_includes_code_op_and_entity() {
    let err = ExError::new(ExErrorKind::NotFound)
        .with_op("get_boxer_by_id")
        .with_entity_id("42")
        .with_message("Boxer with ID 42 not found");

    assert_eq!(
        err.to_string(),
        "[ERR_NOT_FOUND] in operation 'get_boxer_by_id': Boxer with ID 42 not found (entity_id: 42)"
    );
}
