//! Form-level validation
//!
//! A [`FormSchema`] names the fields of a form (customer, supplier, product,
//! expense) and the rule each one must satisfy. Validating a submitted JSON
//! object yields one [`FieldValidation`] per field, which the form renders
//! next to each input.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{CompositeError, ValidationError, ValidationResult};
use crate::report::FieldValidation;
use crate::validators::{self, NumericBounds};

/// Check applied to a single field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    /// Non-blank text
    Required,
    /// Number within inclusive bounds
    Numeric(NumericBounds),
    Email,
    Phone,
    /// Non-negative amount, comma or dot decimal
    Currency,
    /// CPF or CNPJ, chosen by digit count
    Identifier,
    IndividualId,
    BusinessId,
}

impl FieldRule {
    /// Run this rule against the text of a field
    pub fn check(&self, text: &str, label: &str) -> FieldValidation {
        match self {
            FieldRule::Required => validators::validate_required_field(text, label),
            FieldRule::Numeric(bounds) => validators::validate_numeric_field(text, bounds),
            FieldRule::Email => {
                FieldValidation::from(validators::is_email(text).map_err(|_| labelled(label)))
            }
            FieldRule::Phone => {
                FieldValidation::from(validators::is_phone(text).map_err(|_| labelled(label)))
            }
            FieldRule::Currency => {
                FieldValidation::from(validators::check_currency(text).map_err(|_| labelled(label)))
            }
            FieldRule::Identifier => validators::validate_identifier(text).into(),
            FieldRule::IndividualId => FieldValidation::from(
                validators::check_individual_id(text).map_err(|_| labelled(label)),
            ),
            FieldRule::BusinessId => FieldValidation::from(
                validators::check_business_id(text).map_err(|_| labelled(label)),
            ),
        }
    }
}

fn labelled(label: &str) -> ValidationError {
    ValidationError::InvalidFormat(format!("{} is invalid", label))
}

/// Rules for one field of a form
#[derive(Debug, Clone)]
pub struct FieldSchema {
    /// Human-readable name used in messages
    label: String,
    required: bool,
    rules: Vec<FieldRule>,
}

impl FieldSchema {
    /// Start a field definition with its display label
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            required: false,
            rules: Vec::new(),
        }
    }

    /// Mark field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Add a rule; rules run in insertion order and stop at the first failure
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Validate the raw text of this field
    ///
    /// Blank optional fields are valid without running any rule.
    pub fn check(&self, text: &str) -> FieldValidation {
        if text.trim().is_empty() {
            return if self.required {
                FieldRule::Required.check(text, &self.label)
            } else {
                FieldValidation::valid()
            };
        }

        self.rules
            .iter()
            .map(|rule| rule.check(text, &self.label))
            .find(|report| !report.is_valid)
            .unwrap_or_else(FieldValidation::valid)
    }
}

/// Read a JSON field as the text a form input would hold
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Schema for a whole form
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: HashMap<String, FieldSchema>,
    deny_unknown_fields: bool,
}

/// Per-field outcome of validating a form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormReport {
    fields: BTreeMap<String, FieldValidation>,
}

impl FormReport {
    /// True if every field is valid
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|report| report.is_valid)
    }

    /// Result for one field, if the schema or submission named it
    pub fn field(&self, name: &str) -> Option<&FieldValidation> {
        self.fields.get(name)
    }

    /// Messages of the invalid fields, keyed by field name
    pub fn errors(&self) -> BTreeMap<&str, &str> {
        self.fields
            .iter()
            .filter(|(_, report)| !report.is_valid)
            .map(|(name, report)| (name.as_str(), report.message.as_str()))
            .collect()
    }

    /// Collapse into a typed error listing every invalid field
    pub fn into_result(self) -> ValidationResult<()> {
        let errors: Vec<ValidationError> = self
            .fields
            .into_iter()
            .filter(|(_, report)| !report.is_valid)
            .map(|(name, report)| {
                ValidationError::Composite(CompositeError {
                    errors: vec![ValidationError::InvalidFormat(report.message)],
                    field: Some(name),
                })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::composite(errors))
        }
    }
}

impl FormSchema {
    /// Create a builder for this schema
    pub fn builder() -> FormSchemaBuilder {
        FormSchemaBuilder::default()
    }

    /// Validate a submitted form
    ///
    /// A non-object submission yields a single `"form"` entry.
    pub fn validate(&self, form: &Value) -> FormReport {
        let mut report = FormReport::default();

        let Value::Object(obj) = form else {
            report.fields.insert(
                "form".to_string(),
                FieldValidation::invalid("Form data must be an object"),
            );
            return report;
        };

        for (name, field) in &self.fields {
            let outcome = match obj.get(name) {
                None => field.check(""),
                Some(value) => match field_text(value) {
                    Some(text) => field.check(&text),
                    None => FieldValidation::invalid(format!(
                        "{} has an unsupported value",
                        field.label
                    )),
                },
            };
            report.fields.insert(name.clone(), outcome);
        }

        if self.deny_unknown_fields {
            for name in obj.keys().filter(|name| !self.fields.contains_key(*name)) {
                report.fields.insert(
                    name.clone(),
                    FieldValidation::invalid(format!("Unknown field '{}'", name)),
                );
            }
        }

        if !report.is_valid() {
            debug!("Form rejected with {} invalid field(s)", report.errors().len());
        }
        report
    }
}

/// Schema builder for constructing form schemas fluently
#[derive(Debug, Default)]
pub struct FormSchemaBuilder {
    schema: FormSchema,
}

impl FormSchemaBuilder {
    /// Add a field
    pub fn field(mut self, name: &str, field: FieldSchema) -> Self {
        self.schema.fields.insert(name.to_string(), field);
        self
    }

    /// Reject submitted fields the schema does not name
    pub fn deny_unknown_fields(mut self, deny: bool) -> Self {
        self.schema.deny_unknown_fields = deny;
        self
    }

    /// Build the schema
    pub fn build(self) -> FormSchema {
        self.schema
    }
}
