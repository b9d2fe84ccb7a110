use crate::scan::domain::Coordinate;
use std::path::PathBuf;

/// Artifact extensions fetched for every dependency by default
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["pom", "jar", "aar", "module"];

/// Where one artifact file lives remotely and locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLocation {
    pub url: String,
    /// Directory relative to the download root
    pub relative_dir: PathBuf,
    pub file_name: String,
}

/// ArtifactLayout - stateless Maven repository path builder
///
/// Repository layout: `{repo}/{group/path}/{artifact}/{version}/{artifact}-{version}.{ext}`.
/// The local download tree mirrors it below the download root.
pub struct ArtifactLayout;

impl ArtifactLayout {
    pub fn file_name(coordinate: &Coordinate, extension: &str) -> String {
        format!(
            "{}-{}.{}",
            coordinate.artifact(),
            coordinate.version(),
            extension
        )
    }

    pub fn remote_url(repository_url: &str, coordinate: &Coordinate, extension: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            repository_url.trim_end_matches('/'),
            coordinate.group_path(),
            coordinate.artifact(),
            coordinate.version(),
            Self::file_name(coordinate, extension)
        )
    }

    /// `{group}/{path}/{artifact}/{version}`, relative to the download root
    pub fn relative_dir(coordinate: &Coordinate) -> PathBuf {
        let mut dir: PathBuf = coordinate.group().split('.').collect();
        dir.push(coordinate.artifact());
        dir.push(coordinate.version());
        dir
    }

    /// Every artifact location of a coordinate, one per extension
    pub fn locations(
        repository_url: &str,
        coordinate: &Coordinate,
        extensions: &[String],
    ) -> Vec<ArtifactLocation> {
        extensions
            .iter()
            .map(|extension| ArtifactLocation {
                url: Self::remote_url(repository_url, coordinate, extension),
                relative_dir: Self::relative_dir(coordinate),
                file_name: Self::file_name(coordinate, extension),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guava() -> Coordinate {
        Coordinate::new("com.google.guava:guava", "32.1.3-jre").unwrap()
    }

    #[test]
    fn test_remote_url() {
        assert_eq!(
            ArtifactLayout::remote_url("https://repo1.maven.org/maven2", &guava(), "jar"),
            "https://repo1.maven.org/maven2/com/google/guava/guava/32.1.3-jre/guava-32.1.3-jre.jar"
        );
    }

    #[test]
    fn test_remote_url_trims_trailing_slash() {
        assert_eq!(
            ArtifactLayout::remote_url("https://repo.example.com/", &guava(), "pom"),
            "https://repo.example.com/com/google/guava/guava/32.1.3-jre/guava-32.1.3-jre.pom"
        );
    }

    #[test]
    fn test_relative_dir() {
        assert_eq!(
            ArtifactLayout::relative_dir(&guava()),
            PathBuf::from("com")
                .join("google")
                .join("guava")
                .join("guava")
                .join("32.1.3-jre")
        );
    }

    #[test]
    fn test_locations_one_per_extension() {
        let extensions: Vec<String> = DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect();
        let locations = ArtifactLayout::locations("https://repo", &guava(), &extensions);

        let names: Vec<_> = locations.iter().map(|l| l.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "guava-32.1.3-jre.pom",
                "guava-32.1.3-jre.jar",
                "guava-32.1.3-jre.aar",
                "guava-32.1.3-jre.module",
            ]
        );
        assert!(locations
            .iter()
            .all(|l| l.relative_dir == ArtifactLayout::relative_dir(&guava())));
    }
}
