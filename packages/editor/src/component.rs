//! # Page Components
//!
//! The value types the editor stores: one [`Component`] per block on the
//! page, in render order.
//!
//! Settings are a tagged union keyed by component type. Known kinds carry a
//! typed settings struct; `custom` keeps a free-form JSON object.
//!
//! ```json
//! {
//!   "id": "3fa1c2-1",
//!   "name": "Spring sale banner",
//!   "settings": { "type": "hero", "headline": "Spring sale", "alignment": "center" },
//!   "styles": { "padding": "48px 0" },
//!   "isHidden": false
//! }
//! ```

use pressroom_common::ComponentId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Closed set of component kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    Hero,
    Features,
    Text,
    ProductGrid,
    CallToAction,
    Custom,
}

impl ComponentType {
    /// Label used for undo descriptions and default names
    pub fn display_name(&self) -> &'static str {
        match self {
            ComponentType::Hero => "Hero",
            ComponentType::Features => "Features",
            ComponentType::Text => "Text",
            ComponentType::ProductGrid => "Product grid",
            ComponentType::CallToAction => "Call to action",
            ComponentType::Custom => "Custom",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSettings {
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_href: Option<String>,
    #[serde(default)]
    pub alignment: Alignment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub items: Vec<FeatureItem>,
    #[serde(default = "default_feature_columns")]
    pub columns: u8,
}

fn default_feature_columns() -> u8 {
    3
}

impl Default for FeaturesSettings {
    fn default() -> Self {
        Self {
            heading: None,
            items: Vec::new(),
            columns: default_feature_columns(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSettings {
    pub body: String,
    #[serde(default)]
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGridSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Explicit product ids; empty means "latest products"
    #[serde(default)]
    pub product_ids: Vec<String>,
    #[serde(default = "default_product_columns")]
    pub columns: u8,
    #[serde(default = "default_product_limit")]
    pub limit: u32,
    #[serde(default = "default_true")]
    pub show_prices: bool,
}

fn default_product_columns() -> u8 {
    4
}

fn default_product_limit() -> u32 {
    8
}

fn default_true() -> bool {
    true
}

impl Default for ProductGridSettings {
    fn default() -> Self {
        Self {
            heading: None,
            product_ids: Vec::new(),
            columns: default_product_columns(),
            limit: default_product_limit(),
            show_prices: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToActionSettings {
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub button_label: String,
    pub button_href: String,
}

/// Component settings, tagged by component type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ComponentSettings {
    Hero(HeroSettings),
    Features(FeaturesSettings),
    Text(TextSettings),
    ProductGrid(ProductGridSettings),
    CallToAction(CallToActionSettings),
    /// Free-form configuration for components the editor has no schema for
    Custom(Map<String, Value>),
}

impl ComponentSettings {
    pub fn component_type(&self) -> ComponentType {
        match self {
            ComponentSettings::Hero(_) => ComponentType::Hero,
            ComponentSettings::Features(_) => ComponentType::Features,
            ComponentSettings::Text(_) => ComponentType::Text,
            ComponentSettings::ProductGrid(_) => ComponentType::ProductGrid,
            ComponentSettings::CallToAction(_) => ComponentType::CallToAction,
            ComponentSettings::Custom(_) => ComponentType::Custom,
        }
    }

    /// Default settings for a freshly inserted component of the given type
    pub fn default_for(kind: ComponentType) -> Self {
        match kind {
            ComponentType::Hero => ComponentSettings::Hero(HeroSettings::default()),
            ComponentType::Features => ComponentSettings::Features(FeaturesSettings::default()),
            ComponentType::Text => ComponentSettings::Text(TextSettings::default()),
            ComponentType::ProductGrid => {
                ComponentSettings::ProductGrid(ProductGridSettings::default())
            }
            ComponentType::CallToAction => {
                ComponentSettings::CallToAction(CallToActionSettings::default())
            }
            ComponentType::Custom => ComponentSettings::Custom(Map::new()),
        }
    }
}

/// Visual overrides; every field is optional so the same shape doubles as a
/// partial override for breakpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

impl Styles {
    /// Layer `overrides` on top of `self`, field by field
    pub fn merged_with(&self, overrides: &Styles) -> Styles {
        Styles {
            padding: overrides.padding.clone().or_else(|| self.padding.clone()),
            margin: overrides.margin.clone().or_else(|| self.margin.clone()),
            background_color: overrides
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            text_color: overrides
                .text_color
                .clone()
                .or_else(|| self.text_color.clone()),
            background_image: overrides
                .background_image
                .clone()
                .or_else(|| self.background_image.clone()),
            custom_css: overrides
                .custom_css
                .clone()
                .or_else(|| self.custom_css.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Styles::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

/// Per-breakpoint partial style overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsive {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<Styles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<Styles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<Styles>,
}

impl Responsive {
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&Styles> {
        match breakpoint {
            Breakpoint::Mobile => self.mobile.as_ref(),
            Breakpoint::Tablet => self.tablet.as_ref(),
            Breakpoint::Desktop => self.desktop.as_ref(),
        }
    }
}

/// One block in a page layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    pub settings: ComponentSettings,
    #[serde(default, skip_serializing_if = "Styles::is_empty")]
    pub styles: Styles,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<Responsive>,
}

impl Component {
    /// Create a component with default settings for its type
    pub fn new(id: ComponentId, kind: ComponentType) -> Self {
        Self {
            id,
            name: kind.display_name().to_string(),
            settings: ComponentSettings::default_for(kind),
            styles: Styles::default(),
            is_hidden: false,
            responsive: None,
        }
    }

    pub fn with_settings(
        id: ComponentId,
        name: impl Into<String>,
        settings: ComponentSettings,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            settings,
            styles: Styles::default(),
            is_hidden: false,
            responsive: None,
        }
    }

    pub fn component_type(&self) -> ComponentType {
        self.settings.component_type()
    }

    /// Base styles with the breakpoint override (if any) layered on top
    pub fn resolved_styles(&self, breakpoint: Breakpoint) -> Styles {
        match self.responsive.as_ref().and_then(|r| r.get(breakpoint)) {
            Some(overrides) => self.styles.merged_with(overrides),
            None => self.styles.clone(),
        }
    }

    /// Shallow-merge a patch into this component
    pub fn apply_patch(&mut self, patch: &ComponentPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(settings) = &patch.settings {
            self.settings = settings.clone();
        }
        if let Some(styles) = &patch.styles {
            self.styles = styles.clone();
        }
        if let Some(is_hidden) = patch.is_hidden {
            self.is_hidden = is_hidden;
        }
        if let Some(responsive) = &patch.responsive {
            self.responsive = responsive.clone();
        }
    }
}

/// Partial update for a component. Present fields replace the component's
/// field wholesale; the id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<ComponentSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<Styles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    /// `Some(None)` clears the responsive overrides
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "double_option"
    )]
    pub responsive: Option<Option<Responsive>>,
}

impl ComponentPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn settings(settings: ComponentSettings) -> Self {
        Self {
            settings: Some(settings),
            ..Default::default()
        }
    }

    pub fn styles(styles: Styles) -> Self {
        Self {
            styles: Some(styles),
            ..Default::default()
        }
    }

    pub fn hidden(is_hidden: bool) -> Self {
        Self {
            is_hidden: Some(is_hidden),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ComponentPatch::default()
    }
}

/// Distinguishes a missing `responsive` key from an explicit `null`
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
