/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod verify_request;

pub use verify_request::{
    validate_registry_name, VerifyRequest, VerifyRequestBuilder, DEFAULT_REGISTRY_NAME,
    DEFAULT_RENDER_TIMEOUT, DEFAULT_REPOSITORY_URL,
};
