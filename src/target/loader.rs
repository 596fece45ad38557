// src/target/loader.rs
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{HuntError, HuntResult};
use super::model::{Target, TargetRecord};

/// Load every target from a JSON file keyed by service name
pub fn load_targets(path: &Path) -> HuntResult<Vec<Target>> {
    debug!("Loading targets from {}", path.display());

    let content = std::fs::read_to_string(path)
        .map_err(|e| HuntError::TargetFileError {
            path: path.to_path_buf(),
            message: format!("Failed to read file: {}", e),
        })?;

    let targets = parse_targets(&content)
        .map_err(|e| HuntError::TargetFileError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!("Loaded {} targets from {}", targets.len(), path.display());
    Ok(targets)
}

/// Parse the JSON target map. Names come back sorted.
pub fn parse_targets(content: &str) -> HuntResult<Vec<Target>> {
    let records: BTreeMap<String, TargetRecord> = serde_json::from_str(content)
        .map_err(|e| HuntError::SerializationError(format!("Failed to parse JSON-Data: {}", e)))?;

    Ok(records
        .into_iter()
        .map(|(name, record)| record.into_target(name))
        .collect())
}

/// Keep only the named targets, matching case-insensitively.
/// An empty selection keeps everything; a name matching nothing is an error.
pub fn select_targets(targets: Vec<Target>, names: &[String]) -> HuntResult<Vec<Target>> {
    if names.is_empty() {
        return Ok(targets);
    }

    if let Some(missing) = names
        .iter()
        .find(|n| !targets.iter().any(|t| t.name.eq_ignore_ascii_case(n)))
    {
        return Err(HuntError::InvalidInput(format!("Unknown site: {}", missing)));
    }

    Ok(targets
        .into_iter()
        .filter(|t| names.iter().any(|n| n.eq_ignore_ascii_case(&t.name)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use crate::target::DetectionStrategy;

    const SAMPLE: &str = r#"{
        "GitHub": { "url": "https://github.com/{}", "errorType": "status_code" },
        "Forum": {
            "url": "https://forum.test/u/{}",
            "errorType": "message",
            "errorMsg": "No such user",
            "noPeriod": "True"
        },
        "Blog": {
            "url": "https://blog.test/{}",
            "errorType": "response_url",
            "errorUrl": "blog.test/signup",
            "rank": 12
        }
    }"#;

    #[test]
    fn test_parse_targets() {
        let targets = parse_targets(SAMPLE).unwrap();
        let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Blog", "Forum", "GitHub"]);

        assert_eq!(targets[0].detection_strategy, DetectionStrategy::RedirectUrlContains);
        assert_eq!(targets[0].error_url_fragment.as_deref(), Some("blog.test/signup"));
        assert!(targets[1].rejects_periods);
        assert_eq!(targets[2].detection_strategy, DetectionStrategy::StatusCode);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = parse_targets("{ \"GitHub\": ");
        assert!(matches!(result, Err(HuntError::SerializationError(_))));
    }

    #[test]
    fn test_load_targets_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let targets = load_targets(file.path()).unwrap();
        assert_eq!(targets.len(), 3);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_targets(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(HuntError::TargetFileError { .. })));
    }

    #[test]
    fn test_select_targets() {
        let targets = parse_targets(SAMPLE).unwrap();

        let picked = select_targets(targets.clone(), &["github".to_string()]).unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].name, "GitHub");

        let all = select_targets(targets.clone(), &[]).unwrap();
        assert_eq!(all.len(), 3);

        let unknown = select_targets(targets, &["Nowhere".to_string()]);
        assert!(matches!(unknown, Err(HuntError::InvalidInput(_))));
    }
}
