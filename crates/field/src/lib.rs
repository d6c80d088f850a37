//! # billform-field
//!
//! Custom form fields for invoices: typed descriptors, the registry that
//! maps each type to a control and a rule list, the renderer, and the
//! whole-form validator that reports failures by field position.
//!
//! ```
//! use billform_field::prelude::*;
//! use serde_json::json;
//!
//! let form = FormDocument::from_value(json!({
//!     "fields": [
//!         { "name": "po", "type": "TEXT", "is_required": true },
//!         { "name": "site", "type": "URL", "is_required": true }
//!     ],
//!     "values": { "po": "PO-1", "site": "nope" }
//! }))?;
//!
//! let errors = form.validate(&FormValidator::default());
//! assert_eq!(errors.message(1), Some("This field must be a valid URL."));
//! assert_eq!(serde_json::to_value(&errors)?, json!([null, { "value": "This field must be a valid URL." }]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod descriptor;
pub mod error;
pub mod form;
pub mod instance;
pub mod kind;
pub mod option;
pub mod orchestrator;
pub mod registry;
pub mod render;
pub mod values;

pub use descriptor::FieldDescriptor;
pub use error::FieldConfigError;
pub use kind::FieldType;

pub mod prelude {
    pub use crate::descriptor::FieldDescriptor;
    pub use crate::error::FieldConfigError;
    pub use crate::form::{FormDocument, FormField};
    pub use crate::instance::FieldInstance;
    pub use crate::kind::{FieldType, ValueKind};
    pub use crate::option::SelectItem;
    pub use crate::orchestrator::{FieldErrors, FieldValidationError, FormValidator, validate_all};
    pub use crate::registry::{
        FieldRules, Keyboard, PickerMode, RenderStrategy, default_rules, resolve, resolve_name,
    };
    pub use crate::render::{Control, FieldRenderer, RenderSettings, Widget, render};
    pub use crate::values::FieldValues;
}
