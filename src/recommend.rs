//! Weather-to-tag rule engine.
//!
//! Maps the current condition to one search tag per product category. Rules
//! are checked in order and the first match wins; several predicates overlap
//! so the order is significant. Substring checks are case-sensitive against
//! the provider's raw weather text.

use std::{fmt, ops::Index};

use serde::Serialize;

/// Product categories, in the order every per-category sequence uses.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Blush,
    Eyeliner,
    Foundation,
    Lipstick,
    Mascara,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Blush,
        Category::Eyeliner,
        Category::Foundation,
        Category::Lipstick,
        Category::Mascara,
    ];

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Value of the catalog's `product_type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Blush => "blush",
            Category::Eyeliner => "eyeliner",
            Category::Foundation => "foundation",
            Category::Lipstick => "lipstick",
            Category::Mascara => "mascara",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tag per category; an empty tag means "any product".
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TagSet([String; 5]);

impl TagSet {
    fn from_tags(tags: [&str; 5]) -> Self {
        TagSet(tags.map(str::to_string))
    }

    pub fn get(&self, category: Category) -> &str {
        &self.0[category.index()]
    }

    pub fn as_array(&self) -> &[String; 5] {
        &self.0
    }

    /// True when no category is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.0.iter().all(String::is_empty)
    }
}

impl Index<Category> for TagSet {
    type Output = str;

    fn index(&self, category: Category) -> &str {
        self.get(category)
    }
}

/// Which rule of the table produced a [`TagSet`].
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    HotHumid,
    ColdHumid,
    ColdDry,
    ColdTextDry,
    Rain,
    SunnyDry,
    HumidShine,
    WindyDry,
    Anything,
}

impl Rule {
    pub fn tags(self) -> TagSet {
        match self {
            Rule::HotHumid => TagSet::from_tags(["", "", "oil-free", "", "waterproof"]),
            Rule::ColdHumid | Rule::ColdTextDry => {
                TagSet::from_tags(["cream", "", "hydrating", "moisturizing", ""])
            }
            Rule::ColdDry => TagSet::from_tags(["", "", "dewy", "", ""]),
            Rule::Rain => TagSet::from_tags(["", "waterproof", "", "long", "waterproof"]),
            Rule::SunnyDry => TagSet::from_tags(["", "", "spf", "", ""]),
            Rule::HumidShine => TagSet::from_tags(["matte", "matte", "matte", "matte", "matte"]),
            Rule::WindyDry => TagSet::from_tags(["", "smudger", "", "matte", "waterproof"]),
            Rule::Anything => TagSet::from_tags(["", "", "", "", ""]),
        }
    }
}

/// First rule whose predicate holds.
pub fn classify_with_rule(weather_text: &str, temperature_celsius: f64, relative_humidity: i32) -> Rule {
    let has = |needle: &str| weather_text.contains(needle);
    let humid = relative_humidity > 60;
    let dry = relative_humidity < 30;
    let cold = has("cold") || temperature_celsius <= 10.0;

    if (has("hot") || temperature_celsius > 35.0) && humid {
        Rule::HotHumid
    } else if cold && humid {
        Rule::ColdHumid
    } else if cold && dry {
        Rule::ColdDry
    } else if has("cold") && dry {
        // shadowed by ColdDry; kept so the table reads in full
        Rule::ColdTextDry
    } else if has("rain") || has("showers") {
        Rule::Rain
    } else if has("sunny") && dry {
        Rule::SunnyDry
    } else if (has("sunny") && humid) || (has("windy") && humid) {
        Rule::HumidShine
    } else if has("windy") && dry {
        Rule::WindyDry
    } else {
        Rule::Anything
    }
}

pub fn classify(weather_text: &str, temperature_celsius: f64, relative_humidity: i32) -> TagSet {
    classify_with_rule(weather_text, temperature_celsius, relative_humidity).tags()
}
