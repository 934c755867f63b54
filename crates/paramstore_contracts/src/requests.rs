use paramstore_error::error::TypeError;
use paramstore_settings::config::ApiSettings;
use paramstore_types::filters::{FilterInput, ParameterStringFilter};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    DescribeParameters,
    GetParametersByPath,
}

impl Operation {
    pub fn as_str(&self) -> &str {
        match self {
            Operation::DescribeParameters => "DescribeParameters",
            Operation::GetParametersByPath => "GetParametersByPath",
        }
    }
}

/// Fully-assembled request, ready to be handed to a transport/signing
/// layer. `target` is `<service>.<operation>` for the target header.
#[derive(Debug, Clone)]
pub struct RequestDocument {
    pub target: String,
    pub api_version: String,
    pub body: Value,
}

/// List parameters by metadata filters.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeParametersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_filters: Option<Vec<ParameterStringFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeParametersRequest {
    /// Append one filter clause, accepting either a built filter or raw
    /// args for one.
    pub fn with_filter(mut self, filter: impl Into<FilterInput>) -> Result<Self, TypeError> {
        let filter = ParameterStringFilter::create(filter)?;
        self.parameter_filters.get_or_insert_with(Vec::new).push(filter);
        Ok(self)
    }

    /// Full request body, with each filter folded in via
    /// [`ParameterStringFilter::request_body`]. Absent fields are omitted.
    pub fn body(&self) -> Map<String, Value> {
        let mut body = Map::new();

        if let Some(filters) = &self.parameter_filters {
            body.insert("ParameterFilters".to_string(), fold_filters(filters));
        }
        if let Some(max_results) = self.max_results {
            body.insert("MaxResults".to_string(), Value::from(max_results));
        }
        if let Some(next_token) = &self.next_token {
            body.insert("NextToken".to_string(), Value::String(next_token.clone()));
        }

        body
    }

    pub fn to_document(&self, settings: &ApiSettings) -> RequestDocument {
        build_document(Operation::DescribeParameters, self.body(), settings)
    }
}

/// List parameters under a hierarchical path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetParametersByPathRequest {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_filters: Option<Vec<ParameterStringFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_decryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl GetParametersByPathRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            recursive: None,
            parameter_filters: None,
            with_decryption: None,
            max_results: None,
            next_token: None,
        }
    }

    /// Append one filter clause, accepting either a built filter or raw
    /// args for one.
    pub fn with_filter(mut self, filter: impl Into<FilterInput>) -> Result<Self, TypeError> {
        let filter = ParameterStringFilter::create(filter)?;
        self.parameter_filters.get_or_insert_with(Vec::new).push(filter);
        Ok(self)
    }

    /// Full request body. `Path` is always present; everything else is
    /// omitted when absent.
    pub fn body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("Path".to_string(), Value::String(self.path.clone()));

        if let Some(recursive) = self.recursive {
            body.insert("Recursive".to_string(), Value::Bool(recursive));
        }
        if let Some(filters) = &self.parameter_filters {
            body.insert("ParameterFilters".to_string(), fold_filters(filters));
        }
        if let Some(with_decryption) = self.with_decryption {
            body.insert("WithDecryption".to_string(), Value::Bool(with_decryption));
        }
        if let Some(max_results) = self.max_results {
            body.insert("MaxResults".to_string(), Value::from(max_results));
        }
        if let Some(next_token) = &self.next_token {
            body.insert("NextToken".to_string(), Value::String(next_token.clone()));
        }

        body
    }

    pub fn to_document(&self, settings: &ApiSettings) -> RequestDocument {
        build_document(Operation::GetParametersByPath, self.body(), settings)
    }
}

fn fold_filters(filters: &[ParameterStringFilter]) -> Value {
    Value::Array(
        filters
            .iter()
            .map(|filter| Value::Object(filter.request_body()))
            .collect(),
    )
}

fn build_document(
    operation: Operation,
    body: Map<String, Value>,
    settings: &ApiSettings,
) -> RequestDocument {
    debug!(operation = operation.as_str(), "assembled request document");

    RequestDocument {
        target: format!("{}.{}", settings.service_label, operation.as_str()),
        api_version: settings.api_version.clone(),
        body: Value::Object(body),
    }
}
