//! Template providers
//!
//! Each submodule returns file contents for one area of a generated project.
//! Static files are plain constants; parameterized ones are handlebars
//! templates rendered through [`render`].

pub mod auth;
pub mod frontend;
pub mod fullstack;
pub mod next16;
pub mod resource;
pub mod tooling;

use crate::error::{Result, ScaffoldError};
use handlebars::Handlebars;
use serde_json::Value;

/// Render a handlebars template with HTML escaping disabled
pub fn render(name: &str, template: &str, data: &Value) -> Result<String> {
    let mut handlebars = Handlebars::new();

    // Generated files are source code, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    handlebars
        .render_template(template, data)
        .map_err(|source| ScaffoldError::Template {
            name: name.to_string(),
            source: Box::new(source),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_does_not_escape() {
        let out = render("t", "<p>{{value}}</p>", &json!({ "value": "a & 'b'" })).unwrap();
        assert_eq!(out, "<p>a & 'b'</p>");
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let result = render("t", "{{missing}}", &json!({}));
        assert!(matches!(result, Err(ScaffoldError::Template { .. })));
    }
}
