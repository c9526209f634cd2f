use serde_json::Value;

use crate::error::CoreError;
use crate::models::category::Category;
use crate::models::estimate::{EstimateInput, EstimateRequest};
use crate::models::record::Record;
use crate::models::trade::{Branding, Trade};

/// Default cap on records per category field.
pub const DEFAULT_MAX_RECORDS_PER_FIELD: usize = 5_000;

/// A submitted category field, before parsing.
///
/// Form posts always carry text; JSON bodies may carry the array directly.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// JSON text that still has to be parsed.
    Text(String),
    /// An already-structured value.
    Structured(Value),
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => FieldValue::Text(text),
            other => FieldValue::Structured(other),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InputLimits {
    pub max_records_per_field: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_records_per_field: DEFAULT_MAX_RECORDS_PER_FIELD,
        }
    }
}

/// Raw fields of a `/generate-pdf` submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    pub routes: Option<FieldValue>,
    pub devices: Option<FieldValue>,
    pub conduit: Option<FieldValue>,
    pub trade_type: Option<String>,
    pub project_name: Option<String>,
    pub company_name: Option<String>,
}

impl Submission {
    /// Build from decoded form-urlencoded pairs. Unknown names are ignored;
    /// a repeated name keeps its last value.
    pub fn from_form_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut submission = Submission::default();
        for (name, value) in pairs {
            match name.as_str() {
                "routes" => submission.routes = Some(FieldValue::Text(value)),
                "devices" => submission.devices = Some(FieldValue::Text(value)),
                "conduit" => submission.conduit = Some(FieldValue::Text(value)),
                "trade_type" => submission.trade_type = Some(value),
                "project_name" => submission.project_name = Some(value),
                "company_name" => submission.company_name = Some(value),
                _ => {}
            }
        }
        submission
    }

    /// Build from a JSON body. The body must be an object; category fields
    /// may hold arrays or JSON text.
    pub fn from_json(body: Value) -> Result<Self, CoreError> {
        let Value::Object(mut fields) = body else {
            return Err(CoreError::invalid_input(
                "body",
                format!("expected a JSON object, got {}", json_kind(&body)),
            ));
        };

        let mut take_field = |name: &str| match fields.remove(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(FieldValue::from(value)),
        };
        let routes = take_field("routes");
        let devices = take_field("devices");
        let conduit = take_field("conduit");

        let take_text = |name: &str| fields.get(name).and_then(Value::as_str).map(str::to_string);

        Ok(Submission {
            routes,
            devices,
            conduit,
            trade_type: take_text("trade_type"),
            project_name: take_text("project_name"),
            company_name: take_text("company_name"),
        })
    }

    fn field(&mut self, category: Category) -> Option<FieldValue> {
        match category {
            Category::Routes => self.routes.take(),
            Category::Devices => self.devices.take(),
            Category::Conduit => self.conduit.take(),
        }
    }

    /// Validate every category field and resolve the header branding.
    ///
    /// The first failing field aborts the whole submission.
    pub fn normalize(mut self, limits: &InputLimits) -> Result<EstimateRequest, CoreError> {
        let mut input = EstimateInput::default();
        for category in Category::ALL {
            let records = normalize_field(category.field_name(), self.field(category), limits)
                .inspect_err(|e| tracing::warn!(field = e.field(), error = %e, "rejected submission"))?;
            match category {
                Category::Routes => input.routes = records,
                Category::Devices => input.devices = records,
                Category::Conduit => input.conduit = records,
            }
        }

        let defaults = Branding::default();
        let branding = Branding {
            trade: self
                .trade_type
                .as_deref()
                .map(Trade::from_name)
                .unwrap_or_default(),
            project_name: non_blank(self.project_name).unwrap_or(defaults.project_name),
            company_name: non_blank(self.company_name).unwrap_or(defaults.company_name),
        };

        Ok(EstimateRequest { input, branding })
    }
}

/// Turn one submitted field into an ordered record sequence.
///
/// Absent or blank text yields an empty sequence. Text is parsed as JSON;
/// the value must be an array of objects no longer than the configured cap.
pub fn normalize_field(
    field: &str,
    value: Option<FieldValue>,
    limits: &InputLimits,
) -> Result<Vec<Record>, CoreError> {
    let value = match value {
        None => return Ok(Vec::new()),
        Some(FieldValue::Text(text)) if text.trim().is_empty() => return Ok(Vec::new()),
        Some(FieldValue::Text(text)) => serde_json::from_str::<Value>(&text)
            .map_err(|e| CoreError::invalid_input(field, format!("malformed JSON: {e}")))?,
        Some(FieldValue::Structured(value)) => value,
    };

    let Value::Array(items) = value else {
        return Err(CoreError::invalid_input(
            field,
            format!("expected a JSON array, got {}", json_kind(&value)),
        ));
    };

    if items.len() > limits.max_records_per_field {
        return Err(CoreError::invalid_input(
            field,
            format!(
                "too many records ({}, limit {})",
                items.len(),
                limits.max_records_per_field
            ),
        ));
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(Record::new(fields)),
            other => Err(CoreError::invalid_input(
                field,
                format!("element {index} must be an object, got {}", json_kind(&other)),
            )),
        })
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
