use crate::shared::error::ScanError;
use std::fmt;

/// Maximum length for group:artifact names (security limit)
const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Delimiter between group:artifact and version in an input token
pub const VERSION_DELIMITER: &str = "@v";

/// Coordinate value object identifying one Maven package release
///
/// Always holds a validated `group:artifact` name with a `.`-delimited group
/// and a non-empty version. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    group_artifact: String,
    version: String,
}

impl Coordinate {
    /// Creates a coordinate from an already separated name and version
    pub fn new(group_artifact: &str, version: &str) -> Result<Self, ScanError> {
        let input = format!("{}{}{}", group_artifact, VERSION_DELIMITER, version);
        Self::build(&input, group_artifact, version)
    }

    /// Parses an input token of the form `group:artifact@vVERSION`
    ///
    /// A bare `group:artifact` token takes its version from `fallback_version`.
    /// The fallback is ignored when the token carries its own version.
    ///
    /// # Errors
    /// Returns `ScanError::MalformedCoordinate` when the name does not follow
    /// the Maven `group:artifact` convention or no version is available.
    pub fn parse(token: &str, fallback_version: Option<&str>) -> Result<Self, ScanError> {
        let token = token.trim();
        let (name, version) = match token.split_once(VERSION_DELIMITER) {
            Some((name, version)) => (name, version),
            None => (token, fallback_version.unwrap_or("")),
        };
        Self::build(token, name.trim(), version.trim())
    }

    fn build(input: &str, group_artifact: &str, version: &str) -> Result<Self, ScanError> {
        let malformed = |reason: String| ScanError::MalformedCoordinate {
            input: input.to_string(),
            reason,
        };

        validate_group_artifact(group_artifact).map_err(malformed)?;
        validate_version(version).map_err(malformed)?;

        Ok(Self {
            group_artifact: group_artifact.to_string(),
            version: version.to_string(),
        })
    }

    pub fn group_artifact(&self) -> &str {
        &self.group_artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The group id, e.g. `com.google.guava`
    pub fn group(&self) -> &str {
        self.split().0
    }

    /// The artifact id, e.g. `guava`
    pub fn artifact(&self) -> &str {
        self.split().1
    }

    /// Group id as a repository path, e.g. `com/google/guava`
    pub fn group_path(&self) -> String {
        self.group().replace('.', "/")
    }

    /// Service path of this release's version metadata
    pub fn version_path(&self) -> String {
        format!(
            "packages/{}/versions/{}",
            urlencoding::encode(&self.group_artifact),
            urlencoding::encode(&self.version)
        )
    }

    /// Service path of this release's resolved dependency graph
    pub fn dependencies_path(&self) -> String {
        format!("{}:dependencies", self.version_path())
    }

    fn split(&self) -> (&str, &str) {
        // Validated on construction to contain exactly one ':'
        self.group_artifact
            .split_once(':')
            .unwrap_or((self.group_artifact.as_str(), ""))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.group_artifact, self.version)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_'
}

fn validate_group_artifact(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("package name is empty".to_string());
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(format!(
            "package name is too long ({} bytes). Maximum allowed: {} bytes",
            name.len(),
            MAX_NAME_LENGTH
        ));
    }

    let Some((group, artifact)) = name.split_once(':') else {
        return Err("missing ':' between group and artifact".to_string());
    };

    if artifact.contains(':') {
        return Err("more than one ':' in group:artifact".to_string());
    }

    if group.is_empty() || artifact.is_empty() {
        return Err("group and artifact must both be non-empty".to_string());
    }

    if group.split('.').any(str::is_empty) {
        return Err(format!("group '{}' has an empty '.'-delimited segment", group));
    }

    if !group.chars().all(is_name_char) || !artifact.chars().all(is_name_char) {
        return Err(
            "name contains invalid characters. Only alphanumeric, dots, hyphens and underscores are allowed"
                .to_string(),
        );
    }

    Ok(())
}

fn validate_version(version: &str) -> Result<(), String> {
    if version.is_empty() {
        return Err(format!(
            "no version given (append {}VERSION or pass --package-version)",
            VERSION_DELIMITER
        ));
    }

    if version.len() > MAX_VERSION_LENGTH {
        return Err(format!(
            "version is too long ({} bytes). Maximum allowed: {} bytes",
            version.len(),
            MAX_VERSION_LENGTH
        ));
    }

    if version == "." || version.contains("..") {
        return Err("version must not contain '..'".to_string());
    }

    if !version.chars().all(|c| is_name_char(c) || c == '+') {
        return Err(
            "version contains invalid characters. Only alphanumeric, dots, hyphens, underscores and plus are allowed"
                .to_string(),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(result: Result<Coordinate, ScanError>) -> String {
        match result {
            Err(ScanError::MalformedCoordinate { reason, .. }) => reason,
            other => panic!("expected MalformedCoordinate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_with_version_delimiter() {
        let coordinate = Coordinate::parse("com.example:libfoo@v1.2.3", None).unwrap();
        assert_eq!(coordinate.group_artifact(), "com.example:libfoo");
        assert_eq!(coordinate.version(), "1.2.3");
        assert_eq!(coordinate.group(), "com.example");
        assert_eq!(coordinate.artifact(), "libfoo");
    }

    #[test]
    fn test_parse_bare_name_uses_fallback_version() {
        let coordinate = Coordinate::parse("com.example:libfoo", Some("2.0.0")).unwrap();
        assert_eq!(coordinate.version(), "2.0.0");
    }

    #[test]
    fn test_parse_token_version_wins_over_fallback() {
        let coordinate = Coordinate::parse("com.example:libfoo@v1.2.3", Some("9.9.9")).unwrap();
        assert_eq!(coordinate.version(), "1.2.3");
    }

    #[test]
    fn test_parse_bare_name_without_version_fails() {
        let reason = reason_of(Coordinate::parse("com.example:libfoo", None));
        assert!(reason.contains("no version"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let coordinate = Coordinate::parse("  com.example:libfoo@v1.2.3 \n", None).unwrap();
        assert_eq!(coordinate.to_string(), "com.example:libfoo@1.2.3");
    }

    #[test]
    fn test_parse_missing_artifact_separator() {
        let reason = reason_of(Coordinate::parse("com.example.libfoo@v1.0", None));
        assert!(reason.contains("missing ':'"));
    }

    #[test]
    fn test_parse_too_many_separators() {
        let reason = reason_of(Coordinate::parse("com.example:libfoo:jar@v1.0", None));
        assert!(reason.contains("more than one ':'"));
    }

    #[test]
    fn test_parse_empty_group_segment() {
        let reason = reason_of(Coordinate::parse("com..example:libfoo@v1.0", None));
        assert!(reason.contains("empty '.'-delimited segment"));
    }

    #[test]
    fn test_parse_empty_artifact() {
        assert!(Coordinate::parse("com.example:@v1.0", None).is_err());
        assert!(Coordinate::parse(":libfoo@v1.0", None).is_err());
    }

    #[test]
    fn test_parse_single_segment_group_is_valid() {
        let coordinate = Coordinate::parse("junit:junit@v4.13.2", None).unwrap();
        assert_eq!(coordinate.group_path(), "junit");
    }

    #[test]
    fn test_parse_rejects_path_traversal_in_version() {
        assert!(Coordinate::parse("com.example:libfoo@v../../etc", None).is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_characters() {
        assert!(Coordinate::parse("com.example:lib foo@v1.0", None).is_err());
        assert!(Coordinate::parse("com/example:libfoo@v1.0", None).is_err());
    }

    #[test]
    fn test_malformed_coordinate_keeps_input() {
        match Coordinate::parse("guava", Some("1.0")) {
            Err(ScanError::MalformedCoordinate { input, .. }) => assert_eq!(input, "guava"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_group_path() {
        let coordinate = Coordinate::new("com.google.guava:guava", "32.1.3-jre").unwrap();
        assert_eq!(coordinate.group_path(), "com/google/guava");
    }

    #[test]
    fn test_dependencies_path_is_url_encoded() {
        let coordinate = Coordinate::parse("com.example:libfoo@v1.2.3", None).unwrap();
        assert_eq!(
            coordinate.dependencies_path(),
            "packages/com.example%3Alibfoo/versions/1.2.3:dependencies"
        );
        assert_eq!(
            coordinate.version_path(),
            "packages/com.example%3Alibfoo/versions/1.2.3"
        );
    }

    #[test]
    fn test_version_with_plus_is_valid() {
        assert!(Coordinate::new("org.example:lib", "1.0.0+build.5").is_ok());
    }
}
