//! HTML fragment rendering using Jinja2 templates.
//!
//! Every dashboard response is a fragment injected into the index page. Templates
//! live in `templates/fragments/` and are compiled into the binary; the `.html`
//! suffix turns on minijinja's HTML auto-escaping, so country names and echoed
//! user input never reach the page as markup.

use minijinja::{context, Environment};
use std::sync::OnceLock;
use thiserror::Error;

use crate::shared::types::{HtmlTable, SelectOption};

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

const TEMPLATES: &[(&str, &str)] = &[
    (
        "options.html",
        include_str!("../../templates/fragments/options.html"),
    ),
    (
        "table.html",
        include_str!("../../templates/fragments/table.html"),
    ),
    (
        "message.html",
        include_str!("../../templates/fragments/message.html"),
    ),
    (
        "paragraph.html",
        include_str!("../../templates/fragments/paragraph.html"),
    ),
    (
        "record_added.html",
        include_str!("../../templates/fragments/record_added.html"),
    ),
    (
        "record_updated.html",
        include_str!("../../templates/fragments/record_updated.html"),
    ),
    (
        "records_deleted.html",
        include_str!("../../templates/fragments/records_deleted.html"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for (name, source) in TEMPLATES.iter().copied() {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

fn render(template_name: &str, ctx: minijinja::Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Render a dropdown: the empty-valued placeholder followed by `options` in order.
pub fn render_options(
    placeholder: &str,
    options: &[SelectOption],
) -> Result<String, TemplateError> {
    render(
        "options.html",
        context! { placeholder => placeholder, options => options },
    )
}

pub fn render_table(table: &HtmlTable) -> Result<String, TemplateError> {
    render(
        "table.html",
        context! { headers => &table.headers, rows => &table.rows },
    )
}

/// Render a bare status sentence.
pub fn render_message(message: &str) -> Result<String, TemplateError> {
    render("message.html", context! { message => message })
}

/// Render a status sentence wrapped in `<p>`.
pub fn render_paragraph(message: &str) -> Result<String, TemplateError> {
    render("paragraph.html", context! { message => message })
}

pub fn render_record_added(year: i64, u5mr: &str) -> Result<String, TemplateError> {
    render("record_added.html", context! { year => year, u5mr => u5mr })
}

pub fn render_record_updated(year: i64, u5mr: &str) -> Result<String, TemplateError> {
    render("record_updated.html", context! { year => year, u5mr => u5mr })
}

pub fn render_records_deleted(
    deleted: u64,
    start_year: i64,
    end_year: i64,
) -> Result<String, TemplateError> {
    render(
        "records_deleted.html",
        context! { deleted => deleted, start_year => start_year, end_year => end_year },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_load() {
        for (name, _) in TEMPLATES.iter().copied() {
            assert!(get_environment().get_template(name).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_render_options_with_placeholder_first() {
        let options = vec![
            SelectOption::new(2, "Bhutan"),
            SelectOption::new(1, "India"),
        ];
        let html = render_options("-- Select a Country --", &options).unwrap();
        assert_eq!(
            html,
            "<option value=\"\">-- Select a Country --</option>\
             <option value=\"2\">Bhutan</option>\
             <option value=\"1\">India</option>"
        );
    }

    #[test]
    fn test_render_options_sentinel_only() {
        let html = render_options("-- Select Year --", &[]).unwrap();
        assert_eq!(html, "<option value=\"\">-- Select Year --</option>");
    }

    #[test]
    fn test_render_table() {
        let mut table = HtmlTable::new(vec!["Year", "U5MR"]);
        table.push_row(vec!["2021".to_string(), "30.5".to_string()]);
        table.push_row(vec!["2020".to_string(), "31".to_string()]);

        let html = render_table(&table).unwrap();
        assert_eq!(
            html,
            "<table><tr><th>Year</th><th>U5MR</th></tr>\
             <tr><td>2021</td><td>30.5</td></tr>\
             <tr><td>2020</td><td>31</td></tr></table>"
        );
    }

    #[test]
    fn test_interpolated_values_are_escaped() {
        let options = vec![SelectOption::new(1, "<script>alert(1)</script>")];
        let html = render_options("-- Select a Country --", &options).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let html = render_message("Tom & Jerry").unwrap();
        assert_eq!(html, "Tom &amp; Jerry");
    }

    #[test]
    fn test_render_paragraph() {
        let html = render_paragraph("No matches found for 2023.").unwrap();
        assert_eq!(html, "<p>No matches found for 2023.</p>");
    }

    #[test]
    fn test_render_mutation_messages() {
        assert_eq!(
            render_record_added(2001, "12.5").unwrap(),
            "Success! Added record for <strong>Year 2001</strong> with U5MR: 12.5"
        );
        assert_eq!(
            render_record_updated(2020, "9").unwrap(),
            "Success! Updated record for <strong>Year 2020</strong> with new U5MR: 9"
        );
        assert_eq!(
            render_records_deleted(3, 2000, 2002).unwrap(),
            "Success! Deleted <strong>3</strong> records for this country between 2000 and 2002."
        );
    }
}
