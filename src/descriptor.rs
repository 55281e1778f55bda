//! Argument descriptors: display data for one CLI-style argument or option.
//!
//! Descriptors are built once by page content and never mutated. All
//! fields are private; the consuming builder methods are the only way to
//! set them, and `new` rejects an empty name.

use std::fmt;

use crate::error::ContentError;
use crate::rich::RichText;

/// Display category of an argument's value.
///
/// The known categories are closed, but anything else is preserved in
/// `Other` and rendered literally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Kind {
    Text,
    Object,
    List,
    /// No value (flags such as `--help`). Renders as an empty slot.
    #[default]
    None,
    Other(String),
}

impl Kind {
    /// Parses a category name. Known names match case-insensitively;
    /// the empty string is `None`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "TEXT" => Kind::Text,
            "OBJECT" => Kind::Object,
            "LIST" => Kind::List,
            "" | "NONE" => Kind::None,
            _ => Kind::Other(trimmed.to_string()),
        }
    }

    /// The text shown in the kind slot.
    pub fn label(&self) -> &str {
        match self {
            Kind::Text => "TEXT",
            Kind::Object => "OBJECT",
            Kind::List => "LIST",
            Kind::None => "",
            Kind::Other(s) => s,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Kind {
    fn from(raw: &str) -> Self {
        Kind::parse(raw)
    }
}

/// One argument or option as shown in a help-text table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDescriptor {
    name: String,
    kind: Kind,
    description: RichText,
    default_value: Option<RichText>,
    required: bool,
    emphasize: bool,
}

impl ArgumentDescriptor {
    /// Starts a descriptor. Fails when `name` is empty or whitespace.
    ///
    /// Defaults: kind `None`, empty description, no default value, not
    /// required, emphasized.
    pub fn new(name: impl Into<String>) -> Result<Self, ContentError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ContentError::EmptyName);
        }
        Ok(Self {
            name,
            kind: Kind::None,
            description: RichText::new(),
            default_value: None,
            required: false,
            emphasize: true,
        })
    }

    pub fn kind(mut self, kind: impl Into<Kind>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn description(mut self, description: impl Into<RichText>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the default value. Empty text counts as no default.
    pub fn default_value(mut self, value: impl Into<RichText>) -> Self {
        let value = value.into();
        self.default_value = (!value.is_empty()).then_some(value);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn emphasize(mut self, emphasize: bool) -> Self {
        self.emphasize = emphasize;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind_value(&self) -> &Kind {
        &self.kind
    }

    pub fn description_text(&self) -> &RichText {
        &self.description
    }

    pub fn default(&self) -> Option<&RichText> {
        self.default_value.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_emphasized(&self) -> bool {
        self.emphasize
    }

    /// True for dashed options (`--skills`), false for positionals.
    pub fn is_option(&self) -> bool {
        self.name.starts_with('-')
    }
}
