//! Garment templates and the shape families they resize as.
//!
//! Display metadata for templates lives with the caller; this catalog only
//! knows each template's identifier and which resizing algorithm it uses.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Resizing algorithm selected by a template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShapeFamily {
    /// Flat panel: width × length.
    Rectangular,
    /// Linear taper between a narrow and a wide end.
    Tapered,
    /// Worked in the round: circumference × height.
    Cylindrical,
}

impl ShapeFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeFamily::Rectangular => "rectangular",
            ShapeFamily::Tapered => "tapered",
            ShapeFamily::Cylindrical => "cylindrical",
        }
    }

    /// Named new-dimension fields, in the new gauge's unit.
    pub fn target_fields(&self) -> &'static [&'static str] {
        match self {
            ShapeFamily::Rectangular => &["width", "length"],
            ShapeFamily::Tapered => &["narrow_width", "wide_width", "length"],
            ShapeFamily::Cylindrical => &["circumference", "height"],
        }
    }

    /// Named original-pattern fields.
    pub fn original_fields(&self) -> &'static [&'static str] {
        match self {
            ShapeFamily::Rectangular | ShapeFamily::Cylindrical => &["stitches", "rows"],
            ShapeFamily::Tapered => &[
                "narrow_stitches",
                "wide_stitches",
                "rows",
                "stitches_per_shaping_event",
            ],
        }
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resizable template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub family: ShapeFamily,
}

impl Template {
    pub fn new(id: impl Into<String>, name: impl Into<String>, family: ShapeFamily) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            family,
        }
    }
}

/// Registry of known templates, keyed by lowercase identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, Template>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the garment shapes knitwise ships with.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        catalog.register(Template::new("rectangle", "Rectangle", ShapeFamily::Rectangular));
        catalog.register(Template::new("scarf", "Scarf", ShapeFamily::Rectangular));
        catalog.register(Template::new("blanket", "Blanket", ShapeFamily::Rectangular));
        catalog.register(Template::new("flat-panel", "Flat panel", ShapeFamily::Rectangular));
        catalog.register(Template::new("dishcloth", "Dishcloth", ShapeFamily::Rectangular));

        catalog.register(Template::new("tapered-sleeve", "Tapered sleeve", ShapeFamily::Tapered));
        catalog.register(Template::new("sleeve", "Sleeve", ShapeFamily::Tapered));
        catalog.register(Template::new("leg-warmer", "Leg warmer", ShapeFamily::Tapered));

        catalog.register(Template::new("hat", "Hat", ShapeFamily::Cylindrical));
        catalog.register(Template::new("beanie", "Beanie", ShapeFamily::Cylindrical));
        catalog.register(Template::new("cylinder", "Cylinder", ShapeFamily::Cylindrical));
        catalog.register(Template::new("cowl", "Cowl", ShapeFamily::Cylindrical));

        catalog
    }

    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.id.to_lowercase(), template);
    }

    /// Look up a template, ignoring case and surrounding whitespace.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(&id.trim().to_lowercase())
    }

    pub fn list(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_is_case_insensitive() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.get("Scarf").unwrap().family, ShapeFamily::Rectangular);
        assert_eq!(catalog.get(" HAT ").unwrap().family, ShapeFamily::Cylindrical);
        assert_eq!(catalog.get("sleeve").unwrap().family, ShapeFamily::Tapered);
        assert!(catalog.get("sweater").is_none());
    }

    #[test]
    fn test_every_family_is_represented() {
        let catalog = TemplateCatalog::builtin();
        for family in [
            ShapeFamily::Rectangular,
            ShapeFamily::Tapered,
            ShapeFamily::Cylindrical,
        ] {
            assert!(catalog.list().any(|t| t.family == family), "{} missing", family);
        }
    }

    #[test]
    fn test_register_custom_template() {
        let mut catalog = TemplateCatalog::new();
        catalog.register(Template::new("Baby-Blanket", "Baby blanket", ShapeFamily::Rectangular));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("baby-blanket").is_some());
    }
}
