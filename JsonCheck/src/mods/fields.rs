//! Field checks for mod metadata documents

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

use super::version::{VersionParsingMode, VersionTuple};

/// Validate that the document declares a `version` field.
///
/// A document whose root is not an object has no fields at all and fails.
///
/// # Errors
/// Returns [`Error::MissingVersionField`] if there is no `version` key.
pub fn validate_version_field(doc: &Value) -> Result<()> {
    if doc.get("version").is_some() {
        Ok(())
    } else {
        Err(Error::MissingVersionField)
    }
}

/// Validate that the document declares a `changelog` object.
///
/// # Errors
/// Returns [`Error::MissingOrInvalidChangelog`] if `changelog` is missing or
/// is not an object.
pub fn validate_changelog_field(doc: &Value) -> Result<()> {
    if changelog(doc).is_some() {
        Ok(())
    } else {
        Err(Error::MissingOrInvalidChangelog)
    }
}

/// Validate the `version` field against the `changelog` keys.
///
/// Does nothing unless `changelog` is present and is an object. The version
/// must not be older than the newest changelog entry, and may only be newer
/// than it when it is itself listed in the changelog.
///
/// # Arguments
/// * `doc` - Parsed mod metadata document
/// * `mode` - Parser used for `version` and every changelog key
///
/// # Errors
/// Returns [`Error::VersionBehindChangelog`] or
/// [`Error::VersionAheadOfChangelog`] when the versions disagree, and any
/// error from parsing `version` or the changelog keys.
pub fn validate_mod_ver(doc: &Value, mode: VersionParsingMode) -> Result<()> {
    let Some(changelog) = changelog(doc) else {
        return Ok(());
    };

    let (highest, highest_parsed) = highest_changelog_version(changelog, mode)?;
    let version = version_str(doc)?;
    let parsed = mode.parse(version)?;

    tracing::debug!(
        version,
        highest,
        %parsed,
        %highest_parsed,
        "comparing version against changelog"
    );

    match parsed.cmp(&highest_parsed) {
        Ordering::Less => Err(Error::VersionBehindChangelog {
            version: version.to_string(),
            highest: highest.to_string(),
        }),
        Ordering::Greater if !changelog.contains_key(version) => {
            Err(Error::VersionAheadOfChangelog {
                version: version.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Find the changelog key with the highest version.
///
/// Keys are visited in document order and a later key only replaces the
/// current best when it is strictly greater, so among equal versions the
/// first one wins.
///
/// # Returns
/// The highest key as written in the document, with its parsed tuple
///
/// # Errors
/// Fails on the first key the parser rejects, or with
/// [`Error::EmptyChangelog`] when there are no keys.
pub fn highest_changelog_version(
    changelog: &Map<String, Value>,
    mode: VersionParsingMode,
) -> Result<(&str, VersionTuple)> {
    let mut highest: Option<(&str, VersionTuple)> = None;

    for key in changelog.keys() {
        let parsed = mode.parse(key)?;
        if highest.as_ref().is_none_or(|(_, best)| parsed > *best) {
            highest = Some((key.as_str(), parsed));
        }
    }

    highest.ok_or(Error::EmptyChangelog)
}

fn changelog(doc: &Value) -> Option<&Map<String, Value>> {
    doc.get("changelog").and_then(Value::as_object)
}

fn version_str(doc: &Value) -> Result<&str> {
    match doc.get("version") {
        Some(Value::String(version)) => Ok(version),
        Some(other) => Err(Error::InvalidVersionType {
            found: json_type_name(other),
        }),
        None => Err(Error::MissingVersionField),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const STRICT: VersionParsingMode = VersionParsingMode::Strict;
    const LENIENT: VersionParsingMode = VersionParsingMode::Lenient;

    #[test]
    fn test_version_field() {
        assert!(validate_version_field(&json!({"version": "1.0"})).is_ok());
        assert!(validate_version_field(&json!({"version": null})).is_ok());
        assert!(matches!(
            validate_version_field(&json!({"name": "x"})),
            Err(Error::MissingVersionField)
        ));
        assert!(matches!(
            validate_version_field(&json!(["version"])),
            Err(Error::MissingVersionField)
        ));
    }

    #[test]
    fn test_changelog_field() {
        assert!(validate_changelog_field(&json!({"changelog": {}})).is_ok());
        for doc in [
            json!({}),
            json!({"changelog": []}),
            json!({"changelog": "1.0"}),
            json!({"changelog": null}),
        ] {
            assert!(matches!(
                validate_changelog_field(&doc),
                Err(Error::MissingOrInvalidChangelog)
            ));
        }
    }

    #[test]
    fn test_version_matches_highest() {
        let doc = json!({"version": "1.2.3", "changelog": {"1.2.3": {"notes": "x"}}});
        assert!(validate_mod_ver(&doc, STRICT).is_ok());

        let doc = json!({"version": "2.0.0", "changelog": {"1.0.0": {}, "2.0.0": {}}});
        assert!(validate_mod_ver(&doc, STRICT).is_ok());
    }

    #[test]
    fn test_version_behind_changelog() {
        let doc = json!({"version": "1.2.0", "changelog": {"1.3.0": {}}});
        match validate_mod_ver(&doc, STRICT) {
            Err(Error::VersionBehindChangelog { version, highest }) => {
                assert_eq!(version, "1.2.0");
                assert_eq!(highest, "1.3.0");
            }
            other => panic!("expected VersionBehindChangelog, got {other:?}"),
        }
    }

    #[test]
    fn test_version_ahead_of_changelog() {
        let doc = json!({"version": "2.0.0", "changelog": {"1.0.0": {}}});
        match validate_mod_ver(&doc, STRICT) {
            Err(Error::VersionAheadOfChangelog { version }) => assert_eq!(version, "2.0.0"),
            other => panic!("expected VersionAheadOfChangelog, got {other:?}"),
        }
    }

    #[test]
    fn test_highest_uses_numeric_order() {
        let doc = json!({"version": "1.10", "changelog": {"1.9": {}, "1.10": {}, "1.2": {}}});
        assert!(validate_mod_ver(&doc, STRICT).is_ok());

        let doc = json!({"version": "1.9", "changelog": {"1.9": {}, "1.10": {}}});
        assert!(matches!(
            validate_mod_ver(&doc, STRICT),
            Err(Error::VersionBehindChangelog { .. })
        ));
    }

    #[test]
    fn test_skipped_without_changelog_object() {
        assert!(validate_mod_ver(&json!({"version": "9.9"}), STRICT).is_ok());
        assert!(validate_mod_ver(&json!({"version": "bogus", "changelog": []}), STRICT).is_ok());
    }

    #[test]
    fn test_empty_changelog() {
        let doc = json!({"version": "1.0", "changelog": {}});
        assert!(matches!(validate_mod_ver(&doc, STRICT), Err(Error::EmptyChangelog)));
    }

    #[test]
    fn test_non_string_version() {
        let doc = json!({"version": 1.0, "changelog": {"1.0": {}}});
        match validate_mod_ver(&doc, STRICT) {
            Err(Error::InvalidVersionType { found }) => assert_eq!(found, "number"),
            other => panic!("expected InvalidVersionType, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_rejects_bad_changelog_key() {
        let doc = json!({"version": "1.0", "changelog": {"1.0": {}, "1.01": {}}});
        match validate_mod_ver(&doc, STRICT) {
            Err(Error::InvalidVersionFormat { version }) => assert_eq!(version, "1.01"),
            other => panic!("expected InvalidVersionFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_rejects_bad_version() {
        let doc = json!({"version": "1.02", "changelog": {"1.2": {}}});
        assert!(matches!(
            validate_mod_ver(&doc, STRICT),
            Err(Error::InvalidVersionFormat { .. })
        ));
        assert!(validate_mod_ver(&doc, LENIENT).is_ok());
    }

    #[test]
    fn test_lenient_accepts_prefixed_versions() {
        let doc = json!({"version": "v1.3", "changelog": {"v1.2": {}, "v1.3": {}}});
        assert!(validate_mod_ver(&doc, LENIENT).is_ok());
        assert!(validate_mod_ver(&doc, STRICT).is_err());
    }

    #[test]
    fn test_shorter_tuple_is_lower() {
        // (1, 2) < (1, 2, 0) so "1.2.0" is the highest key
        let doc = json!({"version": "1.2", "changelog": {"1.2": {}, "1.2.0": {}}});
        match validate_mod_ver(&doc, LENIENT) {
            Err(Error::VersionBehindChangelog { highest, .. }) => assert_eq!(highest, "1.2.0"),
            other => panic!("expected VersionBehindChangelog, got {other:?}"),
        }
    }

    #[test]
    fn test_tie_break_first_key_wins() {
        let changelog = json!({"v1.2": {}, "1.2": {}, "release-1.2": {}});
        let map = changelog.as_object().unwrap();
        let (highest, parsed) = highest_changelog_version(map, LENIENT).unwrap();
        assert_eq!(highest, "v1.2");
        assert_eq!(parsed, VersionTuple::from([1, 2]));

        let changelog = json!({"1.0": {}, "release-1.2": {}, "v1.2": {}});
        let map = changelog.as_object().unwrap();
        let (highest, _) = highest_changelog_version(map, LENIENT).unwrap();
        assert_eq!(highest, "release-1.2");
    }

    #[test]
    fn test_strict_segment_beyond_u64_matches_changelog() {
        let doc = json!({
            "version": "1.18446744073709551616",
            "changelog": {"1.18446744073709551616": {}}
        });
        assert!(validate_mod_ver(&doc, STRICT).is_ok());
    }

    #[test]
    fn test_lenient_huge_versions_still_compared() {
        let doc = json!({
            "version": "1.18446744073709551616",
            "changelog": {"1.18446744073709551617": {}}
        });
        match validate_mod_ver(&doc, LENIENT) {
            Err(Error::VersionBehindChangelog { highest, .. }) => {
                assert_eq!(highest, "1.18446744073709551617");
            }
            other => panic!("expected VersionBehindChangelog, got {other:?}"),
        }
    }

    #[test]
    fn test_tied_version_not_listed_passes() {
        // Equal tuple to the highest key is neither behind nor ahead
        let doc = json!({"version": "1.2", "changelog": {"v1.2": {}}});
        assert!(validate_mod_ver(&doc, LENIENT).is_ok());
    }
}
