//! CSS custom-property declarations (`--name: value;`).

use std::sync::OnceLock;

use regex::Regex;

fn declaration() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(--[\w-]+):\s*(.+?);?$").expect("css variable regex"))
}

/// Envelope of a custom-property declaration, minus its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssVariable {
    /// Property name including the leading `--`.
    pub name: String,
    /// Whether the declaration ended in `;`.
    pub semicolon: bool,
}

impl CssVariable {
    /// Splits `text` into its declaration envelope and inner value.
    ///
    /// Returns `(None, text)` when `text` is not a declaration.
    ///
    /// ```rust
    /// use tint_color::CssVariable;
    ///
    /// let (var, value) = CssVariable::split("--primary: oklch(0.7 0.2 240);");
    /// assert_eq!(value, "oklch(0.7 0.2 240)");
    /// assert_eq!(var.unwrap().name, "--primary");
    ///
    /// let (var, value) = CssVariable::split("#ff0000");
    /// assert!(var.is_none());
    /// assert_eq!(value, "#ff0000");
    /// ```
    pub fn split(text: &str) -> (Option<Self>, &str) {
        let text = text.trim();
        let Some(caps) = declaration().captures(text) else {
            return (None, text);
        };
        let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
            return (None, text);
        };
        let var = Self {
            name: name.as_str().to_string(),
            semicolon: text.ends_with(';'),
        };
        (Some(var), value.as_str().trim())
    }

    /// Rebuilds the declaration around a new value.
    pub fn wrap(&self, value: &str) -> String {
        let semi = if self.semicolon { ";" } else { "" };
        format!("{}: {value}{semi}", self.name)
    }
}
