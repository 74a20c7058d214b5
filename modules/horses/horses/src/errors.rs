//! Error catalog of the horses module.
//!
//! Every problem response carries one of these codes.

use stable_errors::ErrDef;

const fn def(status: u16, title: &'static str, code: &'static str, type_url: &'static str) -> ErrDef {
    ErrDef {
        status,
        title,
        code,
        type_url,
    }
}

pub struct ErrorCode;

impl ErrorCode {
    #[must_use]
    pub const fn horses_horse_not_found_v1() -> ErrDef {
        def(
            404,
            "Horse Not Found",
            "HORSES_HORSE_NOT_FOUND_V1",
            "urn:stable:horses:horse-not-found:v1",
        )
    }

    #[must_use]
    pub const fn horses_owner_not_found_v1() -> ErrDef {
        def(
            404,
            "Owner Not Found",
            "HORSES_OWNER_NOT_FOUND_V1",
            "urn:stable:horses:owner-not-found:v1",
        )
    }

    #[must_use]
    pub const fn horses_validation_v1() -> ErrDef {
        def(
            400,
            "Validation Failed",
            "HORSES_VALIDATION_V1",
            "urn:stable:horses:validation:v1",
        )
    }

    /// Request could not be parsed (body, query string or path).
    #[must_use]
    pub const fn horses_malformed_request_v1() -> ErrDef {
        def(
            400,
            "Malformed Request",
            "HORSES_MALFORMED_REQUEST_V1",
            "urn:stable:horses:malformed-request:v1",
        )
    }

    #[must_use]
    pub const fn horses_conflict_v1() -> ErrDef {
        def(
            409,
            "Conflict",
            "HORSES_CONFLICT_V1",
            "urn:stable:horses:conflict:v1",
        )
    }

    #[must_use]
    pub const fn horses_internal_v1() -> ErrDef {
        def(
            500,
            "Internal Server Error",
            "HORSES_INTERNAL_V1",
            "urn:stable:horses:internal:v1",
        )
    }
}
