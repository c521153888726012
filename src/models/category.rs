use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Engagement category. Wire strings match the legacy option list exactly,
/// including the lowercase "Seo".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    RedesignThemeUpdate,
    Troubleshoot,
    ThemeCustomization,
    CroChanges,
    Graphics,
    Audit,
    Seo,
    Marketing,
    SpeedOptimization,
    Wordpress,
    ShopifyPlus,
    MonthlyMaintaining,
    CustloApp,
    Legacy(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::RedesignThemeUpdate => "Redesign/Theme update",
            Category::Troubleshoot => "Troubleshoot",
            Category::ThemeCustomization => "Theme Customization",
            Category::CroChanges => "CRO Changes",
            Category::Graphics => "Graphics",
            Category::Audit => "Audit",
            Category::Seo => "Seo",
            Category::Marketing => "Marketing",
            Category::SpeedOptimization => "Speed Optimization",
            Category::Wordpress => "Wordpress",
            Category::ShopifyPlus => "Shopify Plus",
            Category::MonthlyMaintaining => "Monthly Maintaining",
            Category::CustloApp => "Custlo App",
            Category::Legacy(s) => s,
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "Redesign/Theme update" => Category::RedesignThemeUpdate,
            "Troubleshoot" => Category::Troubleshoot,
            "Theme Customization" => Category::ThemeCustomization,
            "CRO Changes" => Category::CroChanges,
            "Graphics" => Category::Graphics,
            "Audit" => Category::Audit,
            "Seo" => Category::Seo,
            "Marketing" => Category::Marketing,
            "Speed Optimization" => Category::SpeedOptimization,
            "Wordpress" => Category::Wordpress,
            "Shopify Plus" => Category::ShopifyPlus,
            "Monthly Maintaining" => Category::MonthlyMaintaining,
            "Custlo App" => Category::CustloApp,
            other => Category::Legacy(other.to_string()),
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::RedesignThemeUpdate
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Category::from_wire(&s))
    }
}
