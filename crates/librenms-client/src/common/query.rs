//! Query parameters for GET requests
//!
//! LibreNMS takes multi-valued parameters (e.g. `columns`) as a single
//! comma-separated string, so list values are flattened before they reach
//! the wire.

/// A single query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Parameter is omitted from the request
    Absent,
    /// Single value
    Scalar(String),
    /// Multiple values, sent as `a,b,c`
    List(Vec<String>),
}

impl ParamValue {
    /// Wire representation, or `None` if the parameter must be omitted
    pub fn encode(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Scalar(value) => Some(value.clone()),
            Self::List(values) => Some(values.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        Self::List(values.iter().map(|v| (*v).to_string()).collect())
    }
}

/// Ordered mapping of query parameter names to values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    /// Empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, keeping insertion order
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Append a parameter, keeping insertion order
    pub fn insert(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.entries.push((name.to_string(), value.into()));
    }

    /// Look up a parameter by name
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// True when no parameter was added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten to `(name, value)` pairs as sent on the wire
    ///
    /// Lists are comma-joined and absent values are dropped.
    pub fn encode(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.encode().map(|v| (name.clone(), v)))
            .collect()
    }
}
