//! Localization of user-visible text.
//!
//! Every string the bot sends is a [`Msg`]: a stable catalog key plus the
//! default English text. A [`Localizer`] resolves keys per guild language and
//! fills `{{.Name}}` template placeholders.

mod catalog;
pub mod messages;

pub use catalog::{Catalog, CatalogError, DEFAULT_LANGUAGE};

/// A localizable message key with its default (English) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msg {
    pub id: &'static str,
    pub other: &'static str,
}

impl Msg {
    pub const fn new(id: &'static str, other: &'static str) -> Self {
        Self { id, other }
    }
}

/// Resolves message keys into text for a language.
pub trait Localizer: Send + Sync {
    /// Localize `msg` for `language`, substituting template `args`.
    fn localize(&self, language: &str, msg: &Msg, args: &[(&str, &str)]) -> String;

    /// Languages with a loaded catalog (always includes the default).
    fn languages(&self) -> Vec<String>;

    /// Re-read catalogs from their source. Returns the number of languages loaded.
    fn reload(&self) -> Result<usize, CatalogError>;
}

/// A message plus owned template arguments, rendered lazily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub msg: Msg,
    pub args: Vec<(&'static str, String)>,
}

impl Notice {
    pub fn new(msg: Msg) -> Self {
        Self {
            msg,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.args.push((name, value.into()));
        self
    }

    pub fn render(&self, localizer: &dyn Localizer, language: &str) -> String {
        let args: Vec<(&str, &str)> = self.args.iter().map(|(k, v)| (*k, v.as_str())).collect();
        localizer.localize(language, &self.msg, &args)
    }
}

/// Substitute `{{.Name}}` placeholders. Unknown placeholders are left as-is.
pub fn render_template(template: &str, args: &[(&str, &str)]) -> String {
    if args.is_empty() || !template.contains("{{.") {
        return template.to_string();
    }
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{{.{name}}}}}"), value);
    }
    out
}
