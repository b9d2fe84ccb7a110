use crate::scan::domain::Coordinate;
use crate::shared::error::ScanError;

/// Default bound on concurrent lookups
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// ScanRequest - request DTO for scanning one root coordinate
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub coordinate: Coordinate,
    /// Upper bound on in-flight advisory and detail lookups
    pub max_concurrency: usize,
}

impl ScanRequest {
    pub fn builder() -> ScanRequestBuilder {
        ScanRequestBuilder::default()
    }
}

/// Builder turning a raw input token into a validated `ScanRequest`
#[derive(Debug, Default)]
pub struct ScanRequestBuilder {
    token: Option<String>,
    fallback_version: Option<String>,
    max_concurrency: Option<usize>,
}

impl ScanRequestBuilder {
    /// Raw coordinate token, e.g. `com.example:libfoo@v1.2.3`
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Version used when the token has no `@v` part
    pub fn fallback_version(mut self, version: Option<String>) -> Self {
        self.fallback_version = version;
        self
    }

    pub fn max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = Some(max_concurrency);
        self
    }

    /// # Errors
    /// - `ScanError::Validation` if no token was given or concurrency is zero
    /// - `ScanError::MalformedCoordinate` if the token does not parse
    pub fn build(self) -> Result<ScanRequest, ScanError> {
        let token = self.token.ok_or_else(|| ScanError::Validation {
            message: "a coordinate token is required".to_string(),
        })?;

        let max_concurrency = self.max_concurrency.unwrap_or(DEFAULT_MAX_CONCURRENCY);
        if max_concurrency == 0 {
            return Err(ScanError::Validation {
                message: "max_concurrency must be at least 1".to_string(),
            });
        }

        let coordinate = Coordinate::parse(&token, self.fallback_version.as_deref())?;
        Ok(ScanRequest {
            coordinate,
            max_concurrency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_parses_token() {
        let request = ScanRequest::builder()
            .token("com.example:libfoo@v1.2.3")
            .max_concurrency(4)
            .build()
            .unwrap();

        assert_eq!(request.coordinate.group_artifact(), "com.example:libfoo");
        assert_eq!(request.coordinate.version(), "1.2.3");
        assert_eq!(request.max_concurrency, 4);
    }

    #[test]
    fn test_builder_uses_fallback_version() {
        let request = ScanRequest::builder()
            .token("com.example:libfoo")
            .fallback_version(Some("2.0.0".to_string()))
            .build()
            .unwrap();

        assert_eq!(request.coordinate.version(), "2.0.0");
        assert_eq!(request.max_concurrency, DEFAULT_MAX_CONCURRENCY);
    }

    #[test]
    fn test_builder_rejects_malformed_token() {
        let err = ScanRequest::builder().token("libfoo").build().unwrap_err();
        assert!(matches!(err, ScanError::MalformedCoordinate { .. }));
    }

    #[test]
    fn test_builder_requires_token() {
        let err = ScanRequest::builder().build().unwrap_err();
        assert!(matches!(err, ScanError::Validation { .. }));
    }

    #[test]
    fn test_builder_rejects_zero_concurrency() {
        let err = ScanRequest::builder()
            .token("com.example:libfoo@v1.2.3")
            .max_concurrency(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ScanError::Validation { .. }));
    }
}
