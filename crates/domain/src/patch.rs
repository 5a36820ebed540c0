//! JSON-Patch documents for partial resource updates
//!
//! PayPal's `PATCH` endpoints accept an array of RFC 6902 operations. The
//! builder here only produces documents that the provider can interpret:
//! every operation is one of the six recognized kinds and carries exactly the
//! members its kind needs.
//!
//! ```rust
//! use paypal_sdk_domain::PatchDocument;
//! use serde_json::json;
//!
//! let patch = PatchDocument::builder()
//!     .replace("/shipping_amount", json!({"currency_code": "USD", "value": "10.00"}))
//!     .remove("/subscriber/shipping_address")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(patch.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{PayPalError, Result};

/// Recognized patch operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

crate::impl_wire_enum_conversions!(PatchOp {
    Add => "add",
    Remove => "remove",
    Replace => "replace",
    Move => "move",
    Copy => "copy",
    Test => "test",
});

impl PatchOp {
    fn requires_value(self) -> bool {
        matches!(self, Self::Add | Self::Replace | Self::Test)
    }

    fn requires_from(self) -> bool {
        matches!(self, Self::Move | Self::Copy)
    }
}

/// A single `{op, path, value, from}` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub op: PatchOp,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl Patch {
    /// Check that the record carries exactly what its operation needs.
    ///
    /// # Errors
    /// Returns `PayPalError::InvalidInput` describing the violation.
    pub fn validate(&self) -> Result<()> {
        ensure_pointer("path", &self.path)?;

        if self.op.requires_value() && self.value.is_none() {
            return Err(PayPalError::InvalidInput(format!(
                "'{}' operation on {} requires a value",
                self.op, self.path
            )));
        }
        if !self.op.requires_value() && self.value.is_some() {
            return Err(PayPalError::InvalidInput(format!(
                "'{}' operation on {} must not carry a value",
                self.op, self.path
            )));
        }

        match (&self.from, self.op.requires_from()) {
            (Some(from), true) => ensure_pointer("from", from),
            (None, true) => Err(PayPalError::InvalidInput(format!(
                "'{}' operation on {} requires a source path",
                self.op, self.path
            ))),
            (Some(_), false) => Err(PayPalError::InvalidInput(format!(
                "'{}' operation on {} must not carry a source path",
                self.op, self.path
            ))),
            (None, false) => Ok(()),
        }
    }
}

fn ensure_pointer(member: &str, pointer: &str) -> Result<()> {
    if pointer.is_empty() || pointer.starts_with('/') {
        Ok(())
    } else {
        Err(PayPalError::InvalidInput(format!(
            "patch {member} '{pointer}' is not a JSON pointer"
        )))
    }
}

/// Validated, non-empty sequence of patch records.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PatchDocument(Vec<Patch>);

impl PatchDocument {
    pub fn builder() -> PatchDocumentBuilder {
        PatchDocumentBuilder::default()
    }

    /// Validate already-constructed records into a document.
    ///
    /// # Errors
    /// Returns `PayPalError::InvalidInput` if the list is empty or any record
    /// is malformed.
    pub fn from_patches(patches: Vec<Patch>) -> Result<Self> {
        if patches.is_empty() {
            return Err(PayPalError::InvalidInput("patch document is empty".into()));
        }
        for patch in &patches {
            patch.validate()?;
        }
        Ok(Self(patches))
    }

    pub fn patches(&self) -> &[Patch] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builder for [`PatchDocument`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct PatchDocumentBuilder {
    patches: Vec<Patch>,
}

impl PatchDocumentBuilder {
    pub fn add(self, path: impl Into<String>, value: Value) -> Self {
        self.push(PatchOp::Add, path, Some(value), None)
    }

    pub fn remove(self, path: impl Into<String>) -> Self {
        self.push(PatchOp::Remove, path, None, None)
    }

    pub fn replace(self, path: impl Into<String>, value: Value) -> Self {
        self.push(PatchOp::Replace, path, Some(value), None)
    }

    pub fn move_from(self, from: impl Into<String>, path: impl Into<String>) -> Self {
        self.push(PatchOp::Move, path, None, Some(from.into()))
    }

    pub fn copy_from(self, from: impl Into<String>, path: impl Into<String>) -> Self {
        self.push(PatchOp::Copy, path, None, Some(from.into()))
    }

    pub fn test(self, path: impl Into<String>, value: Value) -> Self {
        self.push(PatchOp::Test, path, Some(value), None)
    }

    /// Append an arbitrary record; it is validated with the rest on build.
    pub fn patch(mut self, patch: Patch) -> Self {
        self.patches.push(patch);
        self
    }

    fn push(
        mut self,
        op: PatchOp,
        path: impl Into<String>,
        value: Option<Value>,
        from: Option<String>,
    ) -> Self {
        self.patches.push(Patch { op, path: path.into(), value, from });
        self
    }

    /// # Errors
    /// Returns `PayPalError::InvalidInput` if no operation was added or any
    /// operation is malformed.
    pub fn build(self) -> Result<PatchDocument> {
        PatchDocument::from_patches(self.patches)
    }
}
