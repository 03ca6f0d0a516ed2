//! Markdown rendering using Handlebars.

use super::ReportError;
use handlebars::{no_escape, Handlebars};
use serde_json::Value;

/// Markdown for the generated section.
///
/// Every field referenced here is always present in the render data, which
/// strict mode relies on.
pub(crate) const REPORT_TEMPLATE: &str = r#"## 📊 Repository Statistics

{{#if has_repos}}
<div align="center">

![{{repos.title}}]({{repos.chart}})

</div>

{{/if}}
- **Total Repositories:** {{repos.total}}
- **Public Repositories:** {{repos.public}}
- **Private Repositories:** {{repos.private}}

## 💻 Language Distribution

{{#if has_languages}}
<div align="center">

![{{languages.title}}]({{languages.chart}})

</div>

<details>
<summary>📈 Complete Language Breakdown</summary>

| Language | Percentage | Bytes |
|----------|------------|-------|
{{#each languages.rows}}
| {{language}} | {{percentage}}% | {{bytes}} |
{{/each}}

</details>
{{else}}
*No language statistics available*
{{/if}}
{{#if has_platforms}}

## 🔧 Framework & Technology Statistics

<div align="center">

![{{platforms.title}}]({{platforms.chart}})

</div>

<details>
<summary>📊 Framework Details</summary>

| Framework/Technology | Repository Count |
|----------------------|------------------|
{{#each platforms.rows}}
| {{name}} | {{count}} |
{{/each}}

</details>
{{/if}}
{{#if has_databases}}

## 🗄️ Database Statistics

<div align="center">

![{{databases.title}}]({{databases.chart}})

</div>

<details>
<summary>📊 Database Details</summary>

| Database | Repository Count |
|----------|------------------|
{{#each databases.rows}}
| {{name}} | {{count}} |
{{/each}}

</details>
{{/if}}
{{#if has_activity}}

## 📅 Commit Activity

<div align="center">

![{{activity.title}}]({{activity.chart}})

</div>

- **Total Commits:** {{activity.total}}
- **Active Months:** {{activity.active_months}} ({{activity.first}} to {{activity.last}})
{{/if}}

*Last updated: {{last_updated}}*
"#;

/// Creates a Handlebars registry configured for Markdown output.
///
/// - No HTML escaping
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders the report section from prepared data.
pub struct MarkdownRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders `template` with `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, template: &str, data: &Value) -> Result<String, ReportError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_html_escaping() {
        let renderer = MarkdownRenderer::new();
        let result = renderer
            .render("{{name}}", &json!({"name": "<b>C++</b> & Go"}))
            .unwrap();
        assert_eq!(result, "<b>C++</b> & Go");
    }

    #[test]
    fn strict_mode_rejects_missing_fields() {
        let renderer = MarkdownRenderer::new();
        let result = renderer.render("{{missing}}", &json!({}));
        assert!(matches!(result, Err(ReportError::Template(_))));
    }
}
