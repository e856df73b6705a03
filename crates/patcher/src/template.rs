//! Rename templates.
//!
//! A template is plain text with up to four placeholders, each replaced
//! literally wherever it occurs:
//!
//! | Placeholder | Value                                             |
//! |-------------|---------------------------------------------------|
//! | `<level>`   | Level of the spell, e.g. `Adept`                  |
//! | `<school>`  | School of the spell, e.g. `Destruction`           |
//! | `<spell>`   | Name of the spell                                 |
//! | `<plugin>`  | Plugin that defined the book, without extension   |
//!
//! Placeholders are replaced in the order level, plugin, school, spell. A
//! value that itself contains a placeholder may therefore be expanded again
//! by a later replacement; don't rely on either outcome.
//!
//! ```
//! use spelltome_patcher::{Placeholders, RenameTemplate};
//!
//! let template = RenameTemplate::new("<level> <school> spell: <spell> (from <plugin>)");
//! let name = template.render(&Placeholders {
//!     level: "Adept",
//!     school: "Destruction",
//!     spell: "Firebolt",
//!     plugin: "Skyrim.esm",
//! });
//! assert_eq!(name, "Adept Destruction spell: Firebolt (from Skyrim.esm)");
//! ```

pub const LEVEL_PLACEHOLDER: &str = "<level>";
pub const SPELL_PLACEHOLDER: &str = "<spell>";
pub const PLUGIN_PLACEHOLDER: &str = "<plugin>";
pub const SCHOOL_PLACEHOLDER: &str = "<school>";

/// Values substituted into a [`RenameTemplate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Placeholders<'a> {
    pub level: &'a str,
    pub school: &'a str,
    pub spell: &'a str,
    pub plugin: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameTemplate {
    format: String,
    requires_spell_info: bool,
}
impl RenameTemplate {
    pub fn new(format: impl Into<String>) -> Self {
        let format = format.into();
        let requires_spell_info = format.contains(SCHOOL_PLACEHOLDER) || format.contains(LEVEL_PLACEHOLDER);
        Self { format, requires_spell_info }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Whether rendering needs a spell's school or level. When it doesn't,
    /// those values are never computed and may be left empty.
    pub fn requires_spell_info(&self) -> bool {
        self.requires_spell_info
    }

    pub fn render(&self, values: &Placeholders<'_>) -> String {
        self.format
            .replace(LEVEL_PLACEHOLDER, values.level)
            .replace(PLUGIN_PLACEHOLDER, values.plugin)
            .replace(SCHOOL_PLACEHOLDER, values.school)
            .replace(SPELL_PLACEHOLDER, values.spell)
    }
}
impl From<&str> for RenameTemplate {
    fn from(format: &str) -> Self {
        Self::new(format)
    }
}
