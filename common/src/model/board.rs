use serde::Deserialize;
use serde_json::Value;

/// Envelope of every GraphQL answer returned by the board API.
///
/// `errors` is kept as raw JSON; it is only ever logged or echoed back as a failure
/// reason, never inspected field by field.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Value>,
}

/// `data` section of the `items (ids: ...)` query.
#[derive(Debug, Default, Deserialize)]
pub struct ItemsData {
    #[serde(default)]
    pub items: Vec<RemoteItem>,
}

/// A board record with its column values, as returned by the lookup query.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteItem {
    pub id: String,
    #[serde(default)]
    pub column_values: Vec<ColumnValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnValue {
    pub id: String,
    pub text: Option<String>,
}

impl RemoteItem {
    /// Text of `column_id`, if the column exists and its text is non-empty.
    pub fn column_text(&self, column_id: &str) -> Option<&str> {
        self.column_values
            .iter()
            .filter(|column| column.id == column_id)
            .filter_map(|column| column.text.as_deref())
            .find(|text| !text.is_empty())
    }
}
