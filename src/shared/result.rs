/// Type alias for Result with anyhow::Error as the error type.
/// Typed `ScanError`s travel inside it and are recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
