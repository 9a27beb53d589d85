use std::collections::BTreeSet;

use an_core::DEFAULT_CATEGORY;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub category: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

impl BadgeStyle {
    pub fn icon_class(&self) -> String {
        format!("fas {}", self.icon)
    }
}

const GENERAL: BadgeStyle = BadgeStyle {
    category: DEFAULT_CATEGORY,
    color: "#888888",
    icon: "fa-newspaper",
    label: "General News",
};

pub const BADGE_STYLES: &[BadgeStyle] = &[
    BadgeStyle { category: "llms", color: "#ff6b9d", icon: "fa-robot", label: "LLMs & Models" },
    BadgeStyle { category: "tech", color: "#00ffff", icon: "fa-microchip", label: "Technology" },
    BadgeStyle { category: "ml", color: "#b000ff", icon: "fa-brain", label: "Machine Learning" },
    BadgeStyle { category: "hardware", color: "#ffa500", icon: "fa-server", label: "Hardware" },
    BadgeStyle { category: "creative", color: "#00ff88", icon: "fa-palette", label: "Creative AI" },
    BadgeStyle { category: "nocode", color: "#ffaa00", icon: "fa-puzzle-piece", label: "No-Code" },
    GENERAL,
];

/// Style for a card category; unknown categories look like general news.
pub fn badge_style(category: &str) -> &'static BadgeStyle {
    BADGE_STYLES
        .iter()
        .find(|style| style.category == category)
        .unwrap_or(&GENERAL)
}

/// Badge rules for one category color.
pub fn badge_css(category: &str, color: &str) -> String {
    format!(
        r#"
.card-category[data-category="{category}"],
.card-category.styled-badge {{
    background: linear-gradient(135deg, {color}22, {color}11);
    border: 1px solid {color}44;
    color: {color};
    box-shadow: 0 0 20px {color}22;
}}

.card-category[data-category="{category}"]:hover,
.card-category.styled-badge:hover {{
    background: linear-gradient(135deg, {color}33, {color}22);
    box-shadow: 0 0 30px {color}44;
    border-color: {color}88;
}}
"#
    )
}

/// Accumulated badge stylesheet; each category is emitted once.
#[derive(Debug, Clone, Default)]
pub struct BadgeSheet {
    css: String,
    categories: BTreeSet<String>,
}

impl BadgeSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds rules for `category` and returns its style. Repeat calls for the
    /// same category leave the sheet unchanged.
    pub fn add(&mut self, category: &str) -> &'static BadgeStyle {
        let style = badge_style(category);
        if self.categories.insert(category.to_string()) {
            self.css.push_str(&badge_css(category, style.color));
        }
        style
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_styles() {
        assert_eq!(badge_style("llms").color, "#ff6b9d");
        assert_eq!(badge_style("nocode").icon_class(), "fas fa-puzzle-piece");
        assert_eq!(badge_style("robotics").label, "General News");
        assert_eq!(badge_style("").category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_hover_rule_is_well_formed() {
        let css = badge_css("ml", "#b000ff");
        assert!(css.contains("box-shadow: 0 0 30px #b000ff44;"));
        assert!(!css.contains("44}"));
        assert_eq!(css.matches('{').count(), css.matches('}').count());
    }

    #[test]
    fn test_sheet_adds_each_category_once() {
        let mut sheet = BadgeSheet::new();
        sheet.add("llms");
        let once = sheet.css().len();
        sheet.add("llms");
        assert_eq!(sheet.css().len(), once);
        sheet.add("hardware");
        assert_eq!(sheet.len(), 2);
        assert!(sheet.css().contains(r#"[data-category="hardware"]"#));
    }

    #[test]
    fn test_style_serializes() {
        let json = serde_json::to_value(badge_style("creative")).unwrap();
        assert_eq!(json["label"], "Creative AI");
    }
}
