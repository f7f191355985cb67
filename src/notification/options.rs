// SPDX-License-Identifier: MPL-2.0
//! Parameters of `show` and `hide`.

use crate::config::is_truthy;
use crate::error::{Error, Result};
use crate::surface::NodeId;
use serde_json::{Map, Value};
use std::fmt;

/// Callback run when the notification is tapped.
pub type TapHandler = Box<dyn FnMut()>;

const SHOW_SHAPE: &str = "{ parent, label, [spinner|image, duration] }";
const HIDE_SHAPE: &str = "{ parent }";

/// Parameters of [`Notifier::show`](super::Notifier::show).
///
/// Fields left unset fall back to the stored defaults.
pub struct ShowOptions {
    pub(crate) parent: NodeId,
    pub(crate) label: Option<String>,
    pub(crate) spinner: Option<bool>,
    pub(crate) image: Option<String>,
    pub(crate) duration: Option<f64>,
    pub(crate) on_tap: Option<TapHandler>,
}

impl ShowOptions {
    /// Shows the notification inside `parent`.
    #[must_use]
    pub fn new(parent: NodeId) -> Self {
        Self {
            parent,
            label: None,
            spinner: None,
            image: None,
            duration: None,
            on_tap: None,
        }
    }

    /// Text of the notification. An empty label uses the default one.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Shows the activity spinner when no image is shown.
    #[must_use]
    pub fn spinner(mut self, spinner: bool) -> Self {
        self.spinner = Some(spinner);
        self
    }

    /// Path or URL of an image. Takes precedence over the spinner.
    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Hides the notification after `seconds`.
    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Runs `handler` when the notification is tapped, replacing the handler
    /// of any earlier `show`.
    #[must_use]
    pub fn on_tap(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_tap = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn parent(&self) -> NodeId {
        self.parent
    }
}

impl fmt::Debug for ShowOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShowOptions")
            .field("parent", &self.parent)
            .field("label", &self.label)
            .field("spinner", &self.spinner)
            .field("image", &self.image)
            .field("duration", &self.duration)
            .field("on_tap", &self.on_tap.is_some())
            .finish()
    }
}

impl TryFrom<&Value> for ShowOptions {
    type Error = Error;

    /// Reads options from a loosely typed value, e.g. a script bridge call.
    ///
    /// The value must be an object with a numeric `parent` node id. A truthy
    /// `label` must be a string. A `spinner`, `image` or `duration` of the
    /// wrong type is dropped, so the stored default applies.
    fn try_from(value: &Value) -> Result<Self> {
        let fields = value
            .as_object()
            .ok_or(Error::InvalidParameters(SHOW_SHAPE))?;
        let mut options = Self::new(parent_of(fields)?);

        options.label = match fields.get("label").filter(|v| is_truthy(v)) {
            Some(Value::String(label)) => Some(label.clone()),
            Some(_) => {
                return Err(Error::InvalidField {
                    field: "label",
                    expected: "a String",
                })
            }
            None => None,
        };
        options.spinner = fields.get("spinner").and_then(Value::as_bool);
        options.image = fields
            .get("image")
            .and_then(Value::as_str)
            .map(str::to_string);
        options.duration = fields.get("duration").and_then(Value::as_f64);
        Ok(options)
    }
}

/// Parameters of [`Notifier::hide`](super::Notifier::hide).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideOptions {
    pub(crate) parent: NodeId,
}

impl HideOptions {
    /// Removes the notification from `parent` once faded out.
    #[must_use]
    pub fn new(parent: NodeId) -> Self {
        Self { parent }
    }

    #[must_use]
    pub fn parent(&self) -> NodeId {
        self.parent
    }
}

impl TryFrom<&Value> for HideOptions {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        let fields = value
            .as_object()
            .ok_or(Error::InvalidParameters(HIDE_SHAPE))?;
        Ok(Self::new(parent_of(fields)?))
    }
}

fn parent_of(fields: &Map<String, Value>) -> Result<NodeId> {
    fields
        .get("parent")
        .and_then(Value::as_u64)
        .map(NodeId::from_raw)
        .ok_or(Error::InvalidParent)
}
