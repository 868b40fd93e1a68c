use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATASET: &str = "output.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MovieRecord {
    pub title: String,
    /// Non-negative, at most `i64::MAX` (checked when parsing)
    #[serde(deserialize_with = "deserialize_gross")]
    pub worldwide_gross: u64,
    pub release_year: i32,
    pub director: Vec<String>,
    pub country: Vec<String>,
}

impl MovieRecord {
    /// Worldwide gross on the signed scale the range selectors use
    ///
    /// Parsed records never exceed `i64::MAX`; hand-built ones saturate.
    pub fn gross(&self) -> i64 {
        i64::try_from(self.worldwide_gross).unwrap_or(i64::MAX)
    }
}

fn deserialize_gross<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let gross = u64::deserialize(deserializer)?;
    if i64::try_from(gross).is_err() {
        return Err(de::Error::custom(format!(
            "worldwide_gross {} is out of range (max {})",
            gross,
            i64::MAX
        )));
    }
    Ok(gross)
}

/// Where the dataset is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// Interpret a CLI/config string: `http(s)://` is fetched, anything else is a path
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DatasetSource::Url(trimmed.to_string())
        } else {
            DatasetSource::File(PathBuf::from(trimmed))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DatasetSource::File(path) => path.display().to_string(),
            DatasetSource::Url(url) => url.clone(),
        }
    }
}

/// Parse a JSON array of movie records
pub fn parse_movies(json: &str) -> Result<Vec<MovieRecord>> {
    serde_json::from_str(json).context("Failed to parse movie dataset")
}

/// Load the dataset once. No retries: a failure leaves the caller to report it.
pub async fn load_movies(source: &DatasetSource) -> Result<Vec<MovieRecord>> {
    let text = match source {
        DatasetSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dataset {}", path.display()))?,
        DatasetSource::Url(url) => {
            let response = Client::new()
                .get(url)
                .send()
                .await
                .context("Failed to fetch dataset")?
                .error_for_status()
                .context("Dataset request returned an error status")?;
            response.text().await.context("Failed to read dataset response")?
        }
    };

    parse_movies(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movies() {
        let json = r#"[
            {"title": "A", "worldwide_gross": 100, "release_year": 2000, "director": ["X"], "country": ["US"]},
            {"title": "B", "worldwide_gross": 200, "release_year": 2010, "director": ["Y", "Z"], "country": ["UK"]}
        ]"#;
        let movies = parse_movies(json).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].director, vec!["Y".to_string(), "Z".to_string()]);
        assert_eq!(movies[0].worldwide_gross, 100);
    }

    #[test]
    fn test_parse_movies_missing_field() {
        let json = r#"[{"title": "A", "worldwide_gross": 100, "release_year": 2000, "director": ["X"]}]"#;
        assert!(parse_movies(json).is_err());
    }

    #[test]
    fn test_parse_movies_wrong_type() {
        let json = r#"[{"title": "A", "worldwide_gross": "lots", "release_year": 2000, "director": ["X"], "country": []}]"#;
        assert!(parse_movies(json).is_err());
    }

    #[test]
    fn test_parse_movies_gross_out_of_range() {
        let json = r#"[
            {"title": "small", "worldwide_gross": 0, "release_year": 2000, "director": [], "country": []},
            {"title": "huge", "worldwide_gross": 18446744073709551615, "release_year": 2001, "director": [], "country": []}
        ]"#;
        let err = parse_movies(json).unwrap_err();
        assert!(format!("{:#}", err).contains("out of range"));
        assert_eq!(
            crate::logic::errors::classify_error(&err),
            crate::logic::errors::ErrorType::Malformed
        );
    }

    #[test]
    fn test_parse_movies_gross_at_limit() {
        let json = r#"[{"title": "max", "worldwide_gross": 9223372036854775807, "release_year": 2000, "director": [], "country": []}]"#;
        let movies = parse_movies(json).unwrap();
        assert_eq!(movies[0].gross(), i64::MAX);
    }

    #[test]
    fn test_dataset_source_parse() {
        assert_eq!(
            DatasetSource::parse("https://example.com/output.json"),
            DatasetSource::Url("https://example.com/output.json".to_string())
        );
        assert_eq!(
            DatasetSource::parse("output.json"),
            DatasetSource::File(PathBuf::from("output.json"))
        );
    }

    #[tokio::test]
    async fn test_load_movies_missing_file() {
        let source = DatasetSource::File(PathBuf::from("/nonexistent/movietui/output.json"));
        let err = load_movies(&source).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read dataset"));
    }
}
