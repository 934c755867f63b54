use paramstore_error::error::TypeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw input for a filter clause. Every field is optional at this layer;
/// the required-field check happens in [`ParameterStringFilter::new`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// One filter clause used to narrow a server-side parameter listing.
///
/// `key` names the filter dimension ("Name", "Path", "Tag", "Label",
/// "Tier", "DataType"), `option` the comparison mode ("Equals",
/// "BeginsWith", "Contains", "Recursive", "OneLevel") and `values` the
/// values to match against. Which option/values combinations are legal
/// for a given key depends on the operation the filter is sent with; the
/// server enforces those rules, this type does not.
///
/// Unset `option`/`values` stay unset: an absent values list and an
/// explicitly empty one are distinct states and serialize differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterStringFilter {
    key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Vec<String>>,
}

/// Either an already-built filter or the raw args for one. Lets callers
/// assembling filter lists pass both forms through the same code path.
#[derive(Debug, Clone)]
pub enum FilterInput {
    Filter(ParameterStringFilter),
    Args(FilterArgs),
}

impl From<ParameterStringFilter> for FilterInput {
    fn from(filter: ParameterStringFilter) -> Self {
        FilterInput::Filter(filter)
    }
}

impl From<FilterArgs> for FilterInput {
    fn from(args: FilterArgs) -> Self {
        FilterInput::Args(args)
    }
}

impl ParameterStringFilter {
    pub fn new(args: FilterArgs) -> Result<Self, TypeError> {
        let key = args
            .key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TypeError::InvalidArgument("Key is required".to_string()))?;

        Ok(Self {
            key,
            option: args.option,
            values: args.values,
        })
    }

    /// Normalize either input form into a filter. An existing instance
    /// passes through as-is without re-validation; raw args go through
    /// [`ParameterStringFilter::new`].
    pub fn create(input: impl Into<FilterInput>) -> Result<Self, TypeError> {
        match input.into() {
            FilterInput::Filter(filter) => Ok(filter),
            FilterInput::Args(args) => Self::new(args),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn option(&self) -> Option<&str> {
        self.option.as_deref()
    }

    /// The match values, or an empty slice when none were set. Internal
    /// state and [`ParameterStringFilter::request_body`] keep the
    /// absent/empty distinction; this accessor collapses it.
    pub fn values(&self) -> &[String] {
        self.values.as_deref().unwrap_or_default()
    }

    /// Wire fragment for this clause: `Key` always, `Option` and `Values`
    /// only when set. A values list that was set to empty still emits
    /// `"Values": []`.
    pub fn request_body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("Key".to_string(), Value::String(self.key.clone()));

        if let Some(option) = &self.option {
            body.insert("Option".to_string(), Value::String(option.clone()));
        }

        if let Some(values) = &self.values {
            body.insert(
                "Values".to_string(),
                Value::Array(values.iter().cloned().map(Value::String).collect()),
            );
        }

        body
    }
}
