//! Palette definitions - the fixed set of semantic color roles.
//!
//! A [`Palette`] assigns one [`Style`] to each [`Slot`]. The slot set is
//! closed: every token class a resolver knows about maps to exactly one
//! slot, and [`Palette::style`] is a total match over the enum, so a
//! palette cannot be missing an entry for a known role. Palettes loaded
//! from TOML are validated up front; a missing role is a load-time error,
//! never something a renderer has to cope with.

use std::fmt;

use crate::style::{Color, Style};

/// The semantic color roles a palette defines.
///
/// These are the final destination of token-class resolution. The set is
/// deliberately small: the two type tiers distinguish identifiers the
/// project defines from identifiers the platform provides, which is the
/// only distinction the member-access override needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Unstyled text: plain names, punctuation, whitespace.
    Plain,
    Comment,
    String,
    Number,
    Keyword,
    Operator,
    /// Preprocessor and compiler-directive text.
    Preproc,
    /// Identifiers defined by the project being highlighted.
    ProjectType,
    /// Identifiers provided by the platform (standard library, SDK).
    PlatformType,
}

impl Slot {
    /// Every slot, in declaration order.
    pub const ALL: [Slot; 9] = [
        Slot::Plain,
        Slot::Comment,
        Slot::String,
        Slot::Number,
        Slot::Keyword,
        Slot::Operator,
        Slot::Preproc,
        Slot::ProjectType,
        Slot::PlatformType,
    ];

    /// Short tag suffix for HTML/CSS output.
    /// Returns None for slots that produce no styling.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Slot::Plain => None,
            Slot::Comment => Some("c"),
            Slot::String => Some("s"),
            Slot::Number => Some("n"),
            Slot::Keyword => Some("k"),
            Slot::Operator => Some("o"),
            Slot::Preproc => Some("pp"),
            Slot::ProjectType => Some("tp"),
            Slot::PlatformType => Some("tm"),
        }
    }

    /// The long role name, used for class-based CSS output and as the
    /// key in TOML palette files.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Plain => "plain",
            Slot::Comment => "comment",
            Slot::String => "string",
            Slot::Number => "number",
            Slot::Keyword => "keyword",
            Slot::Operator => "operator",
            Slot::Preproc => "preproc",
            Slot::ProjectType => "project-type",
            Slot::PlatformType => "platform-type",
        }
    }
}

/// A fixed mapping from semantic role to display style, plus the block
/// background. Load-time configuration; never mutated while resolving.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,
    pub dark: bool,
    pub background: Color,
    pub plain: Style,
    pub comment: Style,
    pub string: Style,
    pub number: Style,
    pub keyword: Style,
    pub operator: Style,
    pub preproc: Style,
    pub project_type: Style,
    pub platform_type: Style,
}

impl Palette {
    /// Look up the style for a slot. Total over the slot set.
    pub fn style(&self, slot: Slot) -> &Style {
        match slot {
            Slot::Plain => &self.plain,
            Slot::Comment => &self.comment,
            Slot::String => &self.string,
            Slot::Number => &self.number,
            Slot::Keyword => &self.keyword,
            Slot::Operator => &self.operator,
            Slot::Preproc => &self.preproc,
            Slot::ProjectType => &self.project_type,
            Slot::PlatformType => &self.platform_type,
        }
    }

    /// The SGR prefix for a slot's style. Empty for plain slots.
    pub fn ansi_style(&self, slot: Slot) -> String {
        self.style(slot).ansi()
    }
}

/// Errors from loading a palette from external configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The file is not valid TOML.
    Parse(String),
    /// A required role has no entry.
    MissingSlot(String),
    /// A key that names no role (or palette field) was present.
    UnknownKey(String),
    /// A color value did not parse as `#rrggbb`.
    InvalidColor { key: String, value: String },
    /// A value had the wrong TOML type for its key.
    InvalidValue(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Parse(msg) => write!(f, "palette parse error: {msg}"),
            PaletteError::MissingSlot(name) => {
                write!(f, "palette is missing an entry for role `{name}`")
            }
            PaletteError::UnknownKey(key) => write!(f, "palette has unknown key `{key}`"),
            PaletteError::InvalidColor { key, value } => {
                write!(f, "palette key `{key}` has invalid color `{value}`")
            }
            PaletteError::InvalidValue(key) => {
                write!(f, "palette key `{key}` has the wrong type")
            }
        }
    }
}

impl std::error::Error for PaletteError {}

#[cfg(feature = "toml")]
mod from_toml {
    use super::*;

    impl Palette {
        /// Parse a palette from a flat TOML table.
        ///
        /// Every role in [`Slot::ALL`] except `plain` must be present
        /// (plain may be omitted and defaults to unstyled text). Role
        /// values are either a hex color string or a table:
        ///
        /// ```toml
        /// name = "my palette"
        /// dark = true
        /// background = "#282b35"
        /// plain = "#ffffff"
        /// comment = { color = "#41b645", italic = true }
        /// string = "#db2c38"
        /// number = "#786dc4"
        /// keyword = { color = "#b21889", bold = true }
        /// operator = "#ffffff"
        /// preproc = "#c77c48"
        /// project-type = "#04afc8"
        /// platform-type = "#00a0be"
        /// ```
        pub fn from_toml(input: &str) -> Result<Palette, PaletteError> {
            let value: toml::Value = input
                .parse()
                .map_err(|e| PaletteError::Parse(format!("{e}")))?;
            let table = value
                .as_table()
                .ok_or_else(|| PaletteError::Parse("expected a table".into()))?;

            for key in table.keys() {
                let known = key == "name"
                    || key == "dark"
                    || key == "background"
                    || Slot::ALL.iter().any(|s| s.name() == key.as_str());
                if !known {
                    return Err(PaletteError::UnknownKey(key.clone()));
                }
            }

            let name = match table.get("name") {
                None => String::new(),
                Some(toml::Value::String(s)) => s.clone(),
                Some(_) => return Err(PaletteError::InvalidValue("name".into())),
            };
            let dark = match table.get("dark") {
                None => false,
                Some(toml::Value::Boolean(b)) => *b,
                Some(_) => return Err(PaletteError::InvalidValue("dark".into())),
            };
            let background = match table.get("background") {
                None => return Err(PaletteError::MissingSlot("background".into())),
                Some(toml::Value::String(s)) => {
                    Color::from_hex(s).ok_or_else(|| PaletteError::InvalidColor {
                        key: "background".into(),
                        value: s.clone(),
                    })?
                }
                Some(_) => return Err(PaletteError::InvalidValue("background".into())),
            };

            let style_for = |slot: Slot| -> Result<Style, PaletteError> {
                let key = slot.name();
                match table.get(key) {
                    None => {
                        if slot == Slot::Plain {
                            Ok(Style::plain())
                        } else {
                            Err(PaletteError::MissingSlot(key.into()))
                        }
                    }
                    Some(value) => parse_style(key, value),
                }
            };

            Ok(Palette {
                name,
                dark,
                background,
                plain: style_for(Slot::Plain)?,
                comment: style_for(Slot::Comment)?,
                string: style_for(Slot::String)?,
                number: style_for(Slot::Number)?,
                keyword: style_for(Slot::Keyword)?,
                operator: style_for(Slot::Operator)?,
                preproc: style_for(Slot::Preproc)?,
                project_type: style_for(Slot::ProjectType)?,
                platform_type: style_for(Slot::PlatformType)?,
            })
        }
    }

    fn parse_style(key: &str, value: &toml::Value) -> Result<Style, PaletteError> {
        match value {
            toml::Value::String(s) => {
                let color = Color::from_hex(s).ok_or_else(|| PaletteError::InvalidColor {
                    key: key.into(),
                    value: s.clone(),
                })?;
                Ok(Style::fg(color))
            }
            toml::Value::Table(t) => {
                let mut style = Style::plain();
                for (k, v) in t {
                    match (k.as_str(), v) {
                        ("color", toml::Value::String(s)) => {
                            let color =
                                Color::from_hex(s).ok_or_else(|| PaletteError::InvalidColor {
                                    key: key.into(),
                                    value: s.clone(),
                                })?;
                            style.fg = Some(color);
                        }
                        ("bold", toml::Value::Boolean(b)) => style.modifiers.bold = *b,
                        ("italic", toml::Value::Boolean(b)) => style.modifiers.italic = *b,
                        _ => return Err(PaletteError::InvalidValue(format!("{key}.{k}"))),
                    }
                }
                Ok(style)
            }
            _ => Err(PaletteError::InvalidValue(key.into())),
        }
    }
}

/// Built-in palettes.
pub mod builtin {
    use super::*;
    use crate::style::Modifiers;

    /// Dark palette. Background near-black blue, white plain text, the
    /// classic role tiers: green comments, red strings, purple numbers,
    /// pink keywords, orange preprocessor text, cyan project types and
    /// blue platform types.
    pub fn dusk() -> Palette {
        Palette {
            name: "dusk".into(),
            dark: true,
            background: Color::rgb(0x28, 0x2b, 0x35),
            plain: Style::fg(Color::rgb(0xff, 0xff, 0xff)),
            comment: Style::fg(Color::rgb(0x41, 0xb6, 0x45)),
            string: Style::fg(Color::rgb(0xdb, 0x2c, 0x38)),
            number: Style::fg(Color::rgb(0x78, 0x6d, 0xc4)),
            keyword: Style::with_modifiers(Color::rgb(0xb2, 0x18, 0x89), Modifiers::BOLD),
            operator: Style::fg(Color::rgb(0xff, 0xff, 0xff)),
            preproc: Style::fg(Color::rgb(0xc7, 0x7c, 0x48)),
            project_type: Style::fg(Color::rgb(0x04, 0xaf, 0xc8)),
            platform_type: Style::fg(Color::rgb(0x00, 0xa0, 0xbe)),
        }
    }

    /// Light palette with the same role structure as [`dusk`].
    pub fn daylight() -> Palette {
        Palette {
            name: "daylight".into(),
            dark: false,
            background: Color::rgb(0xff, 0xff, 0xff),
            plain: Style::fg(Color::rgb(0x00, 0x00, 0x00)),
            comment: Style::fg(Color::rgb(0x00, 0x74, 0x00)),
            string: Style::fg(Color::rgb(0xc4, 0x1a, 0x16)),
            number: Style::fg(Color::rgb(0x1c, 0x00, 0xcf)),
            keyword: Style::with_modifiers(Color::rgb(0xaa, 0x0d, 0x91), Modifiers::BOLD),
            operator: Style::fg(Color::rgb(0x00, 0x00, 0x00)),
            preproc: Style::fg(Color::rgb(0x64, 0x38, 0x20)),
            project_type: Style::fg(Color::rgb(0x3f, 0x6e, 0x74)),
            platform_type: Style::fg(Color::rgb(0x5c, 0x26, 0x99)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slot_has_a_style() {
        // Completeness: lookup succeeds for every slot in both built-ins.
        for palette in [builtin::dusk(), builtin::daylight()] {
            for slot in Slot::ALL {
                let _ = palette.style(slot);
            }
        }
    }

    #[test]
    fn test_plain_slot_has_no_tag() {
        assert_eq!(Slot::Plain.tag(), None);
        for slot in Slot::ALL {
            if slot != Slot::Plain {
                assert!(slot.tag().is_some());
            }
        }
    }

    #[test]
    fn test_tags_are_unique() {
        let tags: Vec<_> = Slot::ALL.iter().filter_map(|s| s.tag()).collect();
        let mut deduped = tags.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(tags.len(), deduped.len());
    }

    #[test]
    fn test_builtin_metadata() {
        assert!(builtin::dusk().dark);
        assert!(!builtin::daylight().dark);
    }

    #[cfg(feature = "toml")]
    mod toml_tests {
        use super::*;

        const FULL: &str = r##"
name = "test"
dark = true
background = "#101010"
plain = "#eeeeee"
comment = { color = "#41b645", italic = true }
string = "#db2c38"
number = "#786dc4"
keyword = { color = "#b21889", bold = true }
operator = "#ffffff"
preproc = "#c77c48"
project-type = "#04afc8"
platform-type = "#00a0be"
"##;

        #[test]
        fn test_full_palette_parses() {
            let palette = Palette::from_toml(FULL).unwrap();
            assert_eq!(palette.name, "test");
            assert!(palette.dark);
            assert!(palette.comment.modifiers.italic);
            assert!(palette.keyword.modifiers.bold);
            assert_eq!(palette.string.fg, Color::from_hex("#db2c38"));
        }

        #[test]
        fn test_missing_role_rejected() {
            let input = FULL.replace("string = \"#db2c38\"\n", "");
            assert_eq!(
                Palette::from_toml(&input),
                Err(PaletteError::MissingSlot("string".into()))
            );
        }

        #[test]
        fn test_unknown_key_rejected() {
            let input = format!("{FULL}mystery = \"#000000\"\n");
            assert_eq!(
                Palette::from_toml(&input),
                Err(PaletteError::UnknownKey("mystery".into()))
            );
        }

        #[test]
        fn test_bad_color_rejected() {
            let input = FULL.replace("#db2c38", "red");
            assert!(matches!(
                Palette::from_toml(&input),
                Err(PaletteError::InvalidColor { .. })
            ));
        }

        #[test]
        fn test_plain_may_be_omitted() {
            let input = FULL.replace("plain = \"#eeeeee\"\n", "");
            let palette = Palette::from_toml(&input).unwrap();
            assert!(palette.plain.is_plain());
        }
    }
}
