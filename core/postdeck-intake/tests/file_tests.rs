use postdeck_intake::{
    ALLOWED_MIME_TYPES, FileCandidate, IntakeError, MAX_FILE_BYTES, validate_file,
};

#[test]
fn accepts_small_png() {
    assert_eq!(validate_file(&FileCandidate::new(1000, "image/png")), Ok(()));
}

#[test]
fn accepts_every_allowed_type() {
    for mime in ALLOWED_MIME_TYPES {
        assert!(validate_file(&FileCandidate::new(1, *mime)).is_ok(), "{mime}");
    }
}

#[test]
fn accepts_exactly_the_limit() {
    assert!(validate_file(&FileCandidate::new(MAX_FILE_BYTES, "image/jpeg")).is_ok());
}

#[test]
fn rejects_one_byte_over_the_limit() {
    let err = validate_file(&FileCandidate::new(MAX_FILE_BYTES + 1, "image/jpeg")).unwrap_err();
    assert_eq!(
        err,
        IntakeError::FileTooLarge {
            size_bytes: MAX_FILE_BYTES + 1
        }
    );
}

#[test]
fn rejects_large_jpeg_with_size_reason() {
    let err = validate_file(&FileCandidate::new(60_000_000, "image/jpeg")).unwrap_err();
    assert_eq!(
        err,
        IntakeError::FileTooLarge {
            size_bytes: 60_000_000
        }
    );
    assert_eq!(
        err.to_string(),
        "File is too large (57.2 MB). Maximum is 50 MB."
    );
}

#[test]
fn rejects_bmp_with_type_reason() {
    let err = validate_file(&FileCandidate::new(1000, "image/bmp")).unwrap_err();
    assert_eq!(
        err,
        IntakeError::UnsupportedType {
            mime_type: "image/bmp".into()
        }
    );
    assert!(err.to_string().contains("\"image/bmp\""));
}

#[test]
fn size_is_checked_before_type() {
    let err = validate_file(&FileCandidate::new(60_000_000, "video/mp4")).unwrap_err();
    assert!(matches!(err, IntakeError::FileTooLarge { .. }));
}

#[test]
fn mime_match_is_exact() {
    assert!(validate_file(&FileCandidate::new(1, "IMAGE/PNG")).is_err());
    assert!(validate_file(&FileCandidate::new(1, "")).is_err());
}
