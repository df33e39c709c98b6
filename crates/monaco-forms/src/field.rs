//! Model-field declaration that renders with the Monaco editor widget

use crate::{EditorOverrides, Error, MonacoEditorWidget, Result};
use monaco_conf::ConfigResolver;
use serde_json::{Map, Value};

/// A text-column field declaration that swaps the host's generated form
/// widget for a [`MonacoEditorWidget`].
///
/// The declaration stores presentation knobs only; column storage stays
/// whatever the host maps a text field to. It is created when a model is
/// defined and never mutated afterwards.
///
/// # Example
///
/// ```
/// use monaco_forms::{EditorOverrides, MonacoField};
///
/// let code = MonacoField::new(EditorOverrides {
///     language: Some("javascript".to_string()),
///     readonly: true,
///     ..Default::default()
/// });
///
/// let kwargs = code.deconstruct();
/// assert_eq!(kwargs["language"], "javascript");
/// assert_eq!(kwargs["readonly"], true);
/// assert_eq!(kwargs.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonacoField {
    overrides: EditorOverrides,
}

impl MonacoField {
    /// Declare a field with the given knobs.
    pub fn new(overrides: EditorOverrides) -> Self {
        Self { overrides }
    }

    /// The stored declaration knobs.
    pub fn overrides(&self) -> &EditorOverrides {
        &self.overrides
    }

    /// The widget the host swaps into the form field generated for this
    /// column, carrying the stored knobs and resolved against the
    /// process-wide settings.
    pub fn widget(&self) -> MonacoEditorWidget {
        MonacoEditorWidget::new(self.overrides.clone())
    }

    /// Like [`widget`](Self::widget), resolved against an explicit resolver.
    pub fn widget_with(&self, resolver: &ConfigResolver) -> MonacoEditorWidget {
        MonacoEditorWidget::with_resolver(self.overrides.clone(), resolver)
    }

    /// Serialize the declaration for migration generation.
    ///
    /// Reports only the knobs that differ from the unset and editable
    /// defaults, so stored declarations stay compact and diffs only show
    /// intentional changes.
    pub fn deconstruct(&self) -> Map<String, Value> {
        match serde_json::to_value(&self.overrides) {
            Ok(Value::Object(kwargs)) => kwargs,
            // A struct with named fields always serializes to an object.
            _ => {
                tracing::warn!("Editor overrides did not serialize to an object; storing an empty declaration");
                Map::new()
            }
        }
    }

    /// Rebuild a declaration from serialized migration data.
    ///
    /// The inverse of [`deconstruct`](Self::deconstruct). Unknown keys and
    /// ill-typed values are rejected so a corrupted declaration surfaces at
    /// load time rather than at render time.
    pub fn from_deconstructed(kwargs: &Map<String, Value>) -> Result<Self> {
        let overrides = serde_json::from_value(Value::Object(kwargs.clone())).map_err(|e| {
            Error::InvalidDeclaration {
                message: e.to_string(),
            }
        })?;
        Ok(Self { overrides })
    }
}
