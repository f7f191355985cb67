// SPDX-License-Identifier: MPL-2.0
//! Notification defaults: the persisted record consulted when `show` omits
//! a field, and the partial record used to update it.
//!
//! The record is stored as a single JSON blob under [`STORAGE_KEY`] in a
//! [`SettingsStore`](crate::store::SettingsStore).
//!
//! # Examples
//!
//! ```
//! use iced_toast::config::{Defaults, DefaultsPatch};
//!
//! let defaults = Defaults::default();
//! let updated = defaults.merge(&DefaultsPatch::new().size(150.0).label("Saved"));
//! assert_eq!(updated.size, 150.0);
//! assert_eq!(updated.label, "Saved");
//!
//! // Zero is treated as "not supplied"
//! let unchanged = updated.merge(&DefaultsPatch::new().size(0.0));
//! assert_eq!(unchanged.size, 150.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Persisted fallback configuration for `show`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub size: f64,
    pub label: String,
    pub spinner: bool,
    pub image: Option<String>,
    /// Auto-dismiss delay in seconds.
    pub duration: Option<f64>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            size: FALLBACK_SIZE,
            label: FALLBACK_LABEL.to_string(),
            spinner: FALLBACK_SPINNER,
            image: None,
            duration: None,
        }
    }
}

impl Defaults {
    /// Returns a copy of this record with the supplied fields of `patch`
    /// written over it.
    ///
    /// Falsy values (`0`, `""`, `false`) and non-finite numbers count as
    /// "not supplied" and leave the existing value in place, so a default
    /// can never be cleared back to zero or empty through a patch. Use
    /// [`Notifier::reset_defaults`](crate::notification::Notifier::reset_defaults)
    /// for that.
    #[must_use]
    pub fn merge(&self, patch: &DefaultsPatch) -> Self {
        let mut merged = self.clone();
        if let Some(size) = patch.size.filter(|s| is_storable_number(*s)) {
            merged.size = size;
        }
        if let Some(label) = patch.label.as_ref().filter(|l| !l.is_empty()) {
            merged.label = label.clone();
        }
        if patch.spinner == Some(true) {
            merged.spinner = true;
        }
        if let Some(image) = patch.image.as_ref().filter(|i| !i.is_empty()) {
            merged.image = Some(image.clone());
        }
        if let Some(duration) = patch.duration.filter(|d| is_storable_number(*d)) {
            merged.duration = Some(duration);
        }
        merged
    }

    /// Looks up a field by name.
    ///
    /// Returns `None` for unknown keys and for falsy values, so an empty
    /// label or a `false` spinner reads back as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        let value = match key {
            "size" => Value::from(self.size),
            "label" => Value::from(self.label.as_str()),
            "spinner" => Value::from(self.spinner),
            "image" => self.image.clone().map_or(Value::Null, Value::from),
            "duration" => self.duration.map_or(Value::Null, Value::from),
            _ => return None,
        };
        is_truthy(&value).then_some(value)
    }

    /// Parses a stored blob.
    pub fn from_json(blob: &str) -> Result<Self> {
        Ok(serde_json::from_str(blob)?)
    }

    /// Serializes the record for storage.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Partial update of the [`Defaults`] record.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultsPatch {
    pub size: Option<f64>,
    pub label: Option<String>,
    pub spinner: Option<bool>,
    pub image: Option<String>,
    pub duration: Option<f64>,
}

impl DefaultsPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn spinner(mut self, spinner: bool) -> Self {
        self.spinner = Some(spinner);
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the auto-dismiss delay in seconds.
    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Rejects infinite numbers, which cannot be stored.
    ///
    /// `NaN` is falsy and therefore simply ignored by [`Defaults::merge`].
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("size", self.size), ("duration", self.duration)] {
            if value.is_some_and(f64::is_infinite) {
                return Err(Error::InvalidField {
                    field,
                    expected: "a Number",
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<&Value> for DefaultsPatch {
    type Error = Error;

    /// Reads a patch from a loosely typed value.
    ///
    /// Fields are checked in order (`size`, `label`, `spinner`, `image`,
    /// `duration`) and the first truthy field of the wrong type fails the
    /// whole patch. Falsy fields are skipped. A value that is not an object
    /// yields an empty patch.
    fn try_from(value: &Value) -> Result<Self> {
        let Some(fields) = value.as_object() else {
            return Ok(Self::default());
        };
        let field = |name: &str| fields.get(name).filter(|v| is_truthy(v));

        let mut patch = Self::default();
        if let Some(size) = field("size") {
            patch.size = Some(size.as_f64().ok_or(Error::InvalidField {
                field: "size",
                expected: "a Number",
            })?);
        }
        if let Some(label) = field("label") {
            patch.label = Some(
                label
                    .as_str()
                    .ok_or(Error::InvalidField {
                        field: "label",
                        expected: "a String",
                    })?
                    .to_string(),
            );
        }
        if let Some(spinner) = field("spinner") {
            patch.spinner = Some(spinner.as_bool().ok_or(Error::InvalidField {
                field: "spinner",
                expected: "a Boolean",
            })?);
        }
        if let Some(image) = field("image") {
            patch.image = Some(
                image
                    .as_str()
                    .ok_or(Error::InvalidField {
                        field: "image",
                        expected: "a String",
                    })?
                    .to_string(),
            );
        }
        if let Some(duration) = field("duration") {
            patch.duration = Some(duration.as_f64().ok_or(Error::InvalidField {
                field: "duration",
                expected: "a Number",
            })?);
        }
        Ok(patch)
    }
}

/// Returns whether a loosely typed value counts as "supplied".
///
/// `null`, `false`, `0` and `""` are falsy; everything else is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(is_truthy_number),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn is_truthy_number(n: f64) -> bool {
    n != 0.0 && !n.is_nan()
}

fn is_storable_number(n: f64) -> bool {
    is_truthy_number(n) && n.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_record_uses_fallback_values() {
        let defaults = Defaults::default();
        assert_eq!(defaults.size, FALLBACK_SIZE);
        assert_eq!(defaults.label, "");
        assert!(!defaults.spinner);
        assert!(defaults.image.is_none());
        assert!(defaults.duration.is_none());
    }

    #[test]
    fn merge_keeps_unsupplied_fields() {
        let base = Defaults {
            label: "Loading".into(),
            ..Defaults::default()
        };
        let merged = base.merge(&DefaultsPatch::new().size(150.0));
        assert_eq!(merged.size, 150.0);
        assert_eq!(merged.label, "Loading");
    }

    #[test]
    fn merge_ignores_falsy_values() {
        let base = Defaults {
            size: 120.0,
            label: "Busy".into(),
            spinner: true,
            image: Some("a.png".into()),
            duration: Some(2.0),
        };
        let patch = DefaultsPatch::new()
            .size(0.0)
            .label("")
            .spinner(false)
            .image("")
            .duration(0.0);
        assert_eq!(base.merge(&patch), base);
    }

    #[test]
    fn get_returns_none_for_falsy_and_unknown_keys() {
        let defaults = Defaults::default();
        assert_eq!(defaults.get("size"), Some(json!(100.0)));
        assert_eq!(defaults.get("label"), None);
        assert_eq!(defaults.get("spinner"), None);
        assert_eq!(defaults.get("image"), None);
        assert_eq!(defaults.get("colour"), None);
    }

    #[test]
    fn json_blob_round_trip_preserves_record() {
        let defaults = Defaults {
            size: 80.0,
            label: "Done".into(),
            spinner: true,
            image: Some("check.png".into()),
            duration: Some(1.5),
        };
        let blob = defaults.to_json().expect("serialize");
        assert_eq!(Defaults::from_json(&blob).expect("parse"), defaults);
    }

    #[test]
    fn partial_blob_fills_missing_fields_with_fallback() {
        let parsed = Defaults::from_json(r#"{"label":"Hi"}"#).expect("parse");
        assert_eq!(parsed.label, "Hi");
        assert_eq!(parsed.size, FALLBACK_SIZE);
    }

    #[test]
    fn patch_from_value_reads_typed_fields() {
        let patch = DefaultsPatch::try_from(&json!({
            "size": 150,
            "label": "Saved",
            "spinner": true,
            "image": "ok.png",
            "duration": 2.5
        }))
        .expect("valid patch");
        assert_eq!(patch.size, Some(150.0));
        assert_eq!(patch.label.as_deref(), Some("Saved"));
        assert_eq!(patch.spinner, Some(true));
        assert_eq!(patch.image.as_deref(), Some("ok.png"));
        assert_eq!(patch.duration, Some(2.5));
    }

    #[test]
    fn patch_from_value_rejects_wrong_types() {
        let err = DefaultsPatch::try_from(&json!({ "size": "big" })).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidField {
                field: "size",
                expected: "a Number"
            }
        );

        let err = DefaultsPatch::try_from(&json!({ "label": "ok", "spinner": "yes" })).unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "spinner", .. }));
    }

    #[test]
    fn patch_from_value_skips_falsy_fields_of_any_type() {
        let patch = DefaultsPatch::try_from(&json!({ "size": 0, "label": false, "image": null }))
            .expect("falsy fields are skipped");
        assert_eq!(patch, DefaultsPatch::default());
    }

    #[test]
    fn infinite_numbers_fail_validation_and_never_merge() {
        let patch = DefaultsPatch::new().label("Keep me").size(f64::INFINITY);
        assert_eq!(
            patch.validate(),
            Err(Error::InvalidField {
                field: "size",
                expected: "a Number"
            })
        );
        let patch = DefaultsPatch::new().duration(f64::NEG_INFINITY);
        assert!(matches!(
            patch.validate(),
            Err(Error::InvalidField { field: "duration", .. })
        ));
        assert_eq!(DefaultsPatch::new().size(f64::NAN).validate(), Ok(()));

        let merged = Defaults::default().merge(&patch.size(f64::INFINITY));
        assert_eq!(merged, Defaults::default());
        let blob = merged.to_json().expect("serialize");
        assert_eq!(Defaults::from_json(&blob), Ok(merged));
    }

    #[test]
    fn patch_from_non_object_is_empty() {
        let patch = DefaultsPatch::try_from(&json!(42)).expect("non-object is empty");
        assert_eq!(patch, DefaultsPatch::default());
    }

    #[test]
    fn truthiness_follows_loose_rules() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!({})));
    }
}
