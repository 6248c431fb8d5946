use weaver_error::{
    BackendError, BackendErrorKind, StorageError, StorageErrorKind, ValidationError, WeaverError,
    WeaverErrorKind,
};

#[test]
fn test_status_codes_map_to_kinds() {
    assert!(matches!(
        BackendErrorKind::from_status(401, "bad token"),
        BackendErrorKind::Unauthorized { status: 401, .. }
    ));
    assert!(matches!(
        BackendErrorKind::from_status(403, "forbidden"),
        BackendErrorKind::Unauthorized { status: 403, .. }
    ));
    assert!(matches!(
        BackendErrorKind::from_status(429, "slow down"),
        BackendErrorKind::RateLimited(_)
    ));
    assert!(matches!(
        BackendErrorKind::from_status(500, "oops"),
        BackendErrorKind::Api { status: 500, .. }
    ));
}

#[test]
fn test_backend_error_names_provider_and_body() {
    let err: WeaverError =
        BackendError::new("huggingface", BackendErrorKind::from_status(401, "Invalid token")).into();
    let text = err.to_string();

    assert!(text.starts_with("huggingface backend: "));
    assert!(text.contains("Invalid token"));
    assert!(matches!(err.kind(), WeaverErrorKind::Backend(_)));
}

#[test]
fn test_errors_convert_into_umbrella_kind() {
    let storage: WeaverError = StorageError::new(StorageErrorKind::Empty("no bytes".into())).into();
    assert!(matches!(storage.kind(), WeaverErrorKind::Storage(_)));

    let validation: WeaverError = ValidationError::missing("idea").into();
    assert!(matches!(validation.kind(), WeaverErrorKind::Validation(_)));
    assert_eq!(validation.to_string(), "Missing required field: idea");
}

#[test]
fn test_user_message_hides_source_location() {
    let err: WeaverError =
        BackendError::new("huggingface", BackendErrorKind::from_status(503, "overloaded")).into();

    assert!(err.to_string().contains(" at line "));
    let message = err.user_message();
    assert_eq!(message, "huggingface backend: API error 503: overloaded");
    assert!(!message.contains(" at line "));
    assert!(!message.contains(".rs"));

    let storage: WeaverError =
        StorageError::new(StorageErrorKind::FileWrite("out/story_narration.mp3: denied".into()))
            .into();
    assert_eq!(
        storage.user_message(),
        "Failed to write file: out/story_narration.mp3: denied"
    );
}
