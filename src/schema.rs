//! Registration schema — the ordered table of fields a session collects.

use regex::Regex;

use crate::error::SchemaError;

/// One unit of requested information: prompt, required flag, help text, and
/// an optional validation pattern compiled at load time.
///
/// Fields are plain data records — there is no per-field behavior beyond the
/// pattern and the required flag, so the schema stays a table, not a type
/// hierarchy.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Stable identifier; unique within a schema.
    pub key: String,
    /// The question shown to the user.
    pub prompt: String,
    /// Required fields reject empty input; optional fields accept it.
    pub required: bool,
    /// Short hint fed to the gateway when the user asks for help.
    pub help: String,
    pattern: Option<Regex>,
}

impl FieldDef {
    /// Create a required field with no help text and no pattern.
    pub fn new(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
            required: true,
            help: String::new(),
            pattern: None,
        }
    }

    /// Mark the field as optional (empty input is accepted and not recorded).
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Attach a validation pattern. Compilation happens here so a bad pattern
    /// fails at load time, not mid-session.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, SchemaError> {
        let compiled = Regex::new(pattern).map_err(|e| SchemaError::InvalidPattern {
            key: self.key.clone(),
            source: Box::new(e),
        })?;
        self.pattern = Some(compiled);
        Ok(self)
    }

    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    /// Pattern source text, for prompt building.
    pub fn pattern_str(&self) -> Option<&str> {
        self.pattern.as_ref().map(|re| re.as_str())
    }
}

/// The ordered collection of fields for one registration flow.
///
/// Order defines collection order. Immutable after construction; key
/// uniqueness and non-emptiness are enforced up front.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldDef>,
}

impl Schema {
    pub fn new(fields: Vec<FieldDef>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::Empty);
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.key == field.key) {
                return Err(SchemaError::DuplicateKey(field.key.clone()));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The stock brokerage KYC registration schema.
pub fn default_schema() -> Result<Schema, SchemaError> {
    Schema::new(vec![
        FieldDef::new("first_name", "Please enter your First Name (as in your ID):")
            .with_help("Type your legal first name exactly as it appears in your ID.")
            .with_pattern(r"^[A-Za-z\-]{1,}$")?,
        FieldDef::new("last_name", "Please enter your Last Name (as in your ID):")
            .with_help("Type your legal last name exactly as it appears in your ID. Hyphen is allowed.")
            .with_pattern(r"^[A-Za-z\-]{2,}$")?,
        FieldDef::new("country", "Country of tax residency:")
            .with_help("Where you are legally required to pay taxes.")
            .with_pattern(r"^[A-Za-z\s\-]{2,}$")?,
        FieldDef::new("passport_number", "Passport number (no spaces):")
            .with_help("Found on the photo page. Letters and digits only.")
            .with_pattern(r"^[A-Za-z0-9]{6,20}$")?,
        FieldDef::new(
            "source_of_funds",
            "Source of funds (salary/business/investments/etc.):",
        )
        .with_help("Briefly and truthfully describe where your funds come from.")
        .with_pattern(r"^.{3,}$")?,
        FieldDef::new(
            "investment_experience_years",
            "Investment experience in years (integer, 0 if none):",
        )
        .optional()
        .with_help("If you have no experience, enter 0.")
        .with_pattern(r"^\d{1,2}$")?,
    ])
}
