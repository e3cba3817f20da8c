use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;
use tera::{Context as TeraContext, Tera};

use crate::constants::template::{DEFAULT_GREETING, GREETING_TEMPLATE_NAME};
use crate::debug;
use crate::error::*;
use crate::filters::{repeat, transform::create_transform_filter};

static GREETING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Hello, (?P<name>.+)!$").unwrap());

static TERA: OnceCell<Mutex<Tera>> = OnceCell::new();

/// Builds the shared Tera instance registering the custom filters
fn shared_tera() -> Result<&'static Mutex<Tera>> {
    TERA.get_or_try_init(|| {
        let mut tera = Tera::default();
        tera.register_filter("rot13", create_transform_filter("rot13")?);
        tera.register_filter("unbracket", create_transform_filter("unbracket")?);
        tera.register_filter("repeat", repeat::create_repeat_filter());
        Ok(Mutex::new(tera))
    })
}

/// Renders greeting patterns using the Tera template engine.
///
/// The pattern receives the `first_name` and `last_name` variables and may
/// use the `rot13`, `unbracket` and `repeat` filters besides the Tera
/// built-ins.
pub struct GreetingRenderer {
    pattern: String,
    vars: HashMap<String, String>,
}

impl Default for GreetingRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_GREETING)
    }
}

impl GreetingRenderer {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            vars: HashMap::new(),
        }
    }

    /// Makes the given variables available to the pattern. The names
    /// `first_name` and `last_name` always refer to the rendered names.
    pub fn with_vars(mut self, vars: &HashMap<String, String>) -> Self {
        self.vars.extend(vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Renders the greeting for the given names
    ///
    /// # Errors
    /// Returns `Error::TemplateRenderError` if the pattern is not a valid
    /// template or fails to render.
    pub fn render(&self, first_name: &str, last_name: &str) -> Result<String> {
        let mut context = TeraContext::new();
        for (key, value) in &self.vars {
            context.insert(key.as_str(), value);
        }
        context.insert("first_name", first_name);
        context.insert("last_name", last_name);

        let mut tera = shared_tera()?
            .lock()
            .map_err(|e| Error::TemplateRenderError(e.to_string()))?;
        tera.add_raw_template(GREETING_TEMPLATE_NAME, &self.pattern)?;
        debug!("Rendering greeting pattern \"{}\"", self.pattern);

        Ok(tera.render(GREETING_TEMPLATE_NAME, &context)?)
    }
}

/// Renders the default greeting `Hello, <first> <last>!`.
///
/// # Examples
///
/// ```
/// use strkit::template::greeting;
///
/// assert_eq!(greeting("John", "Doe").unwrap(), "Hello, John Doe!");
/// ```
pub fn greeting(first_name: &str, last_name: &str) -> Result<String> {
    GreetingRenderer::default().render(first_name, last_name)
}

/// Extracts the name from a `Hello, <name>!` greeting.
///
/// # Examples
///
/// ```
/// use strkit::template::extract_name;
///
/// assert_eq!(extract_name("Hello, Chuck Norris!").unwrap(), "Chuck Norris");
/// assert!(extract_name("Goodbye, Chuck Norris!").is_err());
/// ```
pub fn extract_name(greeting: &str) -> Result<String> {
    GREETING_REGEX
        .captures(greeting)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::TemplateMismatch(greeting.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(greeting("John", "Doe").unwrap(), "Hello, John Doe!");
        assert_eq!(greeting("Chuck", "Norris").unwrap(), "Hello, Chuck Norris!");
    }

    #[test]
    fn test_greeting_does_not_escape() {
        assert_eq!(greeting("<Tom>", "&Jerry").unwrap(), "Hello, <Tom> &Jerry!");
    }

    #[test]
    fn test_custom_pattern_with_filters() {
        let renderer = GreetingRenderer::new(
            "{{ first_name | rot13 }}-{{ last_name | unbracket | upper }}{{ '!' | repeat(times=2) }}",
        );
        assert_eq!(renderer.render("John", "<doe>").unwrap(), "Wbua-DOE!!");
    }

    #[test]
    fn test_pattern_with_vars() {
        let mut vars = HashMap::new();
        vars.insert("salute".to_string(), "Howdy".to_string());
        vars.insert("first_name".to_string(), "ignored".to_string());

        let renderer = GreetingRenderer::new("{{ salute }}, {{ first_name }}!").with_vars(&vars);
        assert_eq!(renderer.render("Jane", "Roe").unwrap(), "Howdy, Jane!");
    }

    #[test]
    fn test_oversized_repeat_is_a_render_error() {
        let renderer =
            GreetingRenderer::new("{{ first_name | repeat(times=9223372036854775807) }}");
        assert!(matches!(
            renderer.render("John", "Doe"),
            Err(Error::TemplateRenderError(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let renderer = GreetingRenderer::new("Hello, {{ first_name");
        assert!(matches!(
            renderer.render("John", "Doe"),
            Err(Error::TemplateRenderError(_))
        ));
    }

    #[test]
    fn test_extract_name() {
        assert_eq!(extract_name("Hello, John Doe!").unwrap(), "John Doe");
        assert_eq!(extract_name("Hello, Chuck Norris!").unwrap(), "Chuck Norris");
        assert_eq!(extract_name("Hello, Cher!").unwrap(), "Cher");
    }

    #[test]
    fn test_extract_name_mismatch() {
        assert!(matches!(
            extract_name("Hello, !"),
            Err(Error::TemplateMismatch(_))
        ));
        assert!(extract_name("Hello John Doe").is_err());
        assert!(extract_name("").is_err());
    }

    #[test]
    fn test_greeting_round_trip() {
        let rendered = greeting("Ada", "Lovelace").unwrap();
        assert_eq!(extract_name(&rendered).unwrap(), "Ada Lovelace");
    }
}
