use serde::{Deserialize, Serialize};

use crate::models::{FoodId, Nutrient};

/// A food placed into a meal at a consumed quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    pub food_id: FoodId,

    /// Consumed quantity, in the unit of the food's reference quantity.
    pub quantity: f64,

    #[serde(default)]
    pub meal_label: String,
}

impl MealEntry {
    pub fn new(food_id: impl Into<FoodId>, quantity: f64, meal_label: &str) -> Self {
        Self {
            food_id: food_id.into(),
            quantity,
            meal_label: meal_label.to_string(),
        }
    }
}

/// Named list of entries. Entry order only matters for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,

    #[serde(default)]
    pub entries: Vec<MealEntry>,
}

impl Meal {
    pub fn new(name: &str, entries: Vec<MealEntry>) -> Self {
        Self {
            name: name.to_string(),
            entries,
        }
    }
}

/// A diet plan as stored by the backend.
///
/// Accepts either nested `meals` or a flat `entries` list grouped on
/// `meal_label`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawDietPlan")]
pub struct DietPlan {
    pub name: String,

    pub owner: Option<String>,

    pub target: Option<String>,

    pub meals: Vec<Meal>,
}

#[derive(Deserialize)]
struct RawDietPlan {
    #[serde(default)]
    name: String,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    meals: Vec<Meal>,
    #[serde(default)]
    entries: Vec<MealEntry>,
}

impl From<RawDietPlan> for DietPlan {
    fn from(raw: RawDietPlan) -> Self {
        let mut meals = raw.meals;
        meals.extend(group_by_meal_label(raw.entries));
        Self {
            name: raw.name,
            owner: raw.owner,
            target: raw.target,
            meals,
        }
    }
}

impl DietPlan {
    pub fn new(name: &str, meals: Vec<Meal>) -> Self {
        Self {
            name: name.to_string(),
            meals,
            ..Default::default()
        }
    }

    /// Build a plan from flat entries, one meal per distinct label.
    pub fn from_entries(name: &str, entries: Vec<MealEntry>) -> Self {
        Self::new(name, group_by_meal_label(entries))
    }

    pub fn entry_count(&self) -> usize {
        self.meals.iter().map(|m| m.entries.len()).sum()
    }
}

/// Group entries into meals, ordered by first appearance of each label.
fn group_by_meal_label(entries: Vec<MealEntry>) -> Vec<Meal> {
    let mut meals: Vec<Meal> = Vec::new();
    for entry in entries {
        match meals.iter_mut().find(|m| m.name == entry.meal_label) {
            Some(meal) => meal.entries.push(entry),
            None => meals.push(Meal {
                name: entry.meal_label.clone(),
                entries: vec![entry],
            }),
        }
    }
    meals
}

/// One substitute food and the quantity that keeps the preserved nutrient
/// constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstitutionResult {
    pub food_id: FoodId,

    pub name: String,

    /// Rounded to one decimal place.
    pub quantity: f64,

    pub nutrient: Nutrient,
}
