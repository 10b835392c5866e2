use todox_core::errors::{ExError, ExErrorKind, TodoXError};

#[test]
fn test_list_not_found_verifiable_by_kind() {
    let ex_err: ExError = TodoXError::ListNotFound { list_id: 12 }.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.list_id(), Some(12));
    assert!(ex_err.to_string().contains("list_id: 12"));
}

#[test]
fn test_validation_kinds_are_distinct() {
    let invalid: ExError = TodoXError::InvalidListName {
        reason: "empty".to_string(),
    }
    .into();
    let duplicate: ExError = TodoXError::DuplicateListName {
        name: "Work".to_string(),
    }
    .into();

    assert_eq!(invalid.kind(), ExErrorKind::InvalidListName);
    assert_eq!(duplicate.kind(), ExErrorKind::DuplicateListName);
    assert!(duplicate.message().contains("Work"));
}

#[test]
fn test_config_error_code() {
    let ex_err: ExError = TodoXError::Config {
        message: "DATABASE_URL is not set".to_string(),
    }
    .into();
    assert_eq!(ex_err.code(), "ERR_CONFIG");
    assert!(ex_err.to_string().contains("DATABASE_URL"));
}

#[test]
fn test_serde_error_converts_to_serialization() {
    let err: TodoXError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
}
