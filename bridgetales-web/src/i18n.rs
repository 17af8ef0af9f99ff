//! UI strings, looked up by dotted key from the embedded English bundle.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::BTreeMap;

static BUNDLE: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../i18n/en.json"))
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
});

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, part| current.get(part))
}

/// Translate `key`, returning the key itself when it is missing.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate `key` and substitute `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    let Some(mut text) = get_nested_value(&BUNDLE, key)
        .and_then(Value::as_str)
        .map(str::to_string)
    else {
        return key.to_string();
    };
    if let Some(args) = args {
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
    }
    text
}

/// Shorthand for a single placeholder.
#[must_use]
pub fn tr1(key: &str, name: &str, value: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert(name, value);
    tr(key, Some(&args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_nested_keys_and_falls_back_to_key() {
        assert_eq!(t("app.title"), "BridgeTales");
        assert_eq!(t("missing.key"), "missing.key");
        assert_eq!(t("app"), "app");
    }

    #[test]
    fn substitutes_placeholders() {
        assert_eq!(tr1("story.ready", "page", "3"), "Page 3 is ready");
        assert_eq!(
            tr1("nearby.away", "distance", "1.2 km"),
            "1.2 km away"
        );
    }
}
