//! Font registry for `<font NAME>` tags
//!
//! The set of fonts a document may request is fixed: each key maps to the CSS class
//! the stylesheet defines for it and to a human readable name. The registry also owns
//! the precompiled `<font KEY>` matcher, so only registered keys are ever rewritten.

use regex::Regex;
use std::sync::LazyLock;

/// A font that documents can select with `<font KEY>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontEntry {
    /// Tag key as written in documents (e.g. `pica`)
    pub key: &'static str,
    /// CSS class applied to the wrapping div (e.g. `pica-font`)
    pub css_class: &'static str,
    /// Display name of the typeface
    pub display_name: &'static str,
    /// CSS font-family stack used by the stylesheet
    pub family: &'static str,
}

/// Fonts available to every document.
pub const DEFAULT_FONTS: &[FontEntry] = &[
    FontEntry {
        key: "pica",
        css_class: "pica-font",
        display_name: "IM Fell DW Pica",
        family: "'IM Fell DW Pica', serif",
    },
    FontEntry {
        key: "roboto",
        css_class: "roboto-font",
        display_name: "Roboto",
        family: "'Roboto', sans-serif",
    },
    FontEntry {
        key: "raleway",
        css_class: "raleway-font",
        display_name: "Raleway",
        family: "'Raleway', sans-serif",
    },
    FontEntry {
        key: "montserrat",
        css_class: "montserrat-font",
        display_name: "Montserrat",
        family: "'Montserrat', sans-serif",
    },
    FontEntry {
        key: "courier",
        css_class: "courier-font",
        display_name: "Courier Prime",
        family: "'Courier Prime', monospace",
    },
    FontEntry {
        key: "newsreader",
        css_class: "newsreader-font",
        display_name: "Newsreader",
        family: "'Newsreader', serif",
    },
    FontEntry {
        key: "poppins",
        css_class: "poppins-font",
        display_name: "Poppins",
        family: "'Poppins', sans-serif",
    },
    FontEntry {
        key: "geist",
        css_class: "geist-font",
        display_name: "Geist",
        family: "'Geist', sans-serif",
    },
    FontEntry {
        key: "dmsans",
        css_class: "dmsans-font",
        display_name: "DM Sans",
        family: "'DM Sans', sans-serif",
    },
];

static DEFAULT_REGISTRY: LazyLock<FontRegistry> =
    LazyLock::new(|| FontRegistry::new(DEFAULT_FONTS));

/// Registry of fonts selectable from documents
///
/// Immutable once built. Lookups are by key; the open-tag matcher is an
/// alternation of exactly the registered keys.
///
/// # Examples
///
/// ```ignore
/// let registry = FontRegistry::global();
/// assert_eq!(registry.css_class("pica"), Some("pica-font"));
/// assert!(!registry.has("comic-sans"));
/// ```
#[derive(Debug)]
pub struct FontRegistry {
    fonts: &'static [FontEntry],
    open_tag: Regex,
}

impl FontRegistry {
    /// Build a registry over `fonts`, compiling the `<font KEY>` matcher once
    pub fn new(fonts: &'static [FontEntry]) -> Self {
        let alternation = fonts
            .iter()
            .map(|font| regex::escape(font.key))
            .collect::<Vec<_>>()
            .join("|");
        let open_tag = Regex::new(&format!("<font ({alternation})>"))
            .expect("font keys are escaped, so the alternation always compiles");
        FontRegistry { fonts, open_tag }
    }

    /// The process-wide registry over [`DEFAULT_FONTS`]
    pub fn global() -> &'static FontRegistry {
        &DEFAULT_REGISTRY
    }

    /// Get a font by key
    pub fn get(&self, key: &str) -> Option<&FontEntry> {
        self.fonts.iter().find(|font| font.key == key)
    }

    /// Check if a font key is registered
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn css_class(&self, key: &str) -> Option<&'static str> {
        self.get(key).map(|font| font.css_class)
    }

    pub fn display_name(&self, key: &str) -> Option<&'static str> {
        self.get(key).map(|font| font.display_name)
    }

    /// All registered fonts, in registration order
    pub fn fonts(&self) -> &'static [FontEntry] {
        self.fonts
    }

    /// List all registered keys (sorted)
    pub fn list_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.fonts.iter().map(|font| font.key).collect();
        keys.sort_unstable();
        keys
    }

    /// Matcher for `<font KEY>` where KEY is registered; group 1 is the key
    pub fn open_tag_pattern(&self) -> &Regex {
        &self.open_tag
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        FontRegistry::new(DEFAULT_FONTS)
    }
}
