use serde::Serialize;

/// One `<option>` of a dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

/// Header row plus pre-formatted body cells, rendered as a `<table>`
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl HtmlTable {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

/// Format a stored rate the way it was entered (`45`, `12.5`)
pub fn format_rate(value: f64) -> String {
    value.to_string()
}

/// Format an aggregated rate to two decimals. Display only.
pub fn format_average(value: f64) -> String {
    format!("{:.2}", value)
}
