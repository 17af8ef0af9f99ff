use anyhow::{Context, Result};
use bridgetales_core::{ClientConfig, Timestamp};
use chrono::{SecondsFormat, Utc};
use std::path::Path;

/// Wall-clock stamp in the shape the browser produces.
#[must_use]
pub fn now() -> Timestamp {
    let at = Utc::now();
    Timestamp {
        millis: u64::try_from(at.timestamp_millis()).unwrap_or_default(),
        iso: at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Defaults, overlaid by an optional JSON file, overlaid by `--api-base`.
pub fn load_config(path: Option<&Path>, api_base: Option<&str>) -> Result<ClientConfig> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            ClientConfig::from_json(&raw)
                .with_context(|| format!("invalid config in {}", path.display()))?
        }
        None => ClientConfig::default(),
    };
    Ok(config.with_api_base(api_base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" smoke, ,stale,  overlay ");
        assert_eq!(parts, vec!["smoke", "stale", "overlay"]);
    }

    #[test]
    fn now_is_an_iso_utc_stamp() {
        let stamp = now();
        assert!(stamp.iso.ends_with('Z'));
        assert_eq!(stamp.iso.len(), "2026-10-18T09:30:00.000Z".len());
        assert!(stamp.millis > 0);
    }

    #[test]
    fn config_file_and_flag_layer_over_defaults() {
        let path = std::env::temp_dir().join(format!(
            "bridgetales-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"nearby_max_results": 3}"#).unwrap();

        let config = load_config(Some(&path), Some("https://stories.example/")).unwrap();
        assert_eq!(config.nearby_max_results, 3);
        assert_eq!(config.api_base_url, "https://stories.example");
        assert_eq!(config.error_dismiss_ms, 5_000);

        assert_eq!(load_config(None, None).unwrap(), ClientConfig::default());
        assert!(load_config(Some(Path::new("/nonexistent/bridgetales.json")), None).is_err());
    }
}
