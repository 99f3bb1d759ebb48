//! Positional string templating
//!
//! Substitutes `{N}` placeholders in a template with arguments by index.
//! `{{` and `}}` escape literal braces; any other brace sequence passes
//! through unchanged. Exposed as a free function rather than a method hung
//! off every string value.

use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;
use thiserror::Error;

/// Module-local result type for template rendering
type Result<T> = std::result::Result<T, TemplateError>;

/// Errors specific to the template module
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder index exceeds the supplied argument list
    #[error("placeholder {token} has no matching argument ({supplied} supplied)")]
    MissingArgument { token: String, supplied: usize },
}

// Matches the three recognized patterns in one scan; everything else is
// literal text, including lone braces and non-numeric `{name}` tokens.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{(\d+)\}").unwrap());

/// Render a template by substituting positional placeholders.
///
/// `render("{0}-{1}", &[&"a", &"b"])` gives `"a-b"`. Arguments are converted
/// through their `Display` implementation. A placeholder index with no
/// matching argument is an error, not an empty token.
pub fn render(template: &str, args: &[&dyn Display]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for matched in PLACEHOLDER.find_iter(template) {
        out.push_str(&template[last..matched.start()]);
        match matched.as_str() {
            "{{" => out.push('{'),
            "}}" => out.push('}'),
            token => {
                // The regex only admits digit tokens here; parse fails solely
                // on usize overflow, which is likewise out of range.
                let arg = token[1..token.len() - 1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| args.get(index));
                match arg {
                    Some(arg) => out.push_str(&arg.to_string()),
                    None => {
                        return Err(TemplateError::MissingArgument {
                            token: token.to_string(),
                            supplied: args.len(),
                        })
                    }
                }
            }
        }
        last = matched.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}
