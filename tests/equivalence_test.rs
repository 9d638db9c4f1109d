use assert_float_eq::assert_float_absolute_eq;
use diet_equivalence_rs::catalog::{FoodCatalog, FoodSource};
use diet_equivalence_rs::engine::{
    classify, equivalences, find_equivalents, scale, EquivalenceBasis, EquivalenceConfig,
};
use diet_equivalence_rs::models::{FoodId, FoodItem, Macronutrient, Nutrient};

fn make_food(id: u64, name: &str, category: &str, ref_qty: f64, kcal: f64, c: f64, p: f64, l: f64) -> FoodItem {
    FoodItem {
        id: FoodId::from(id),
        name: name.to_string(),
        category: category.to_string(),
        reference_quantity: ref_qty,
        calories: kcal,
        carbohydrate: c,
        protein: p,
        lipid: l,
    }
}

fn sample_catalog() -> FoodCatalog {
    FoodCatalog::new(vec![
        make_food(1, "Rice", "Carbohydrate", 100.0, 130.0, 28.0, 2.7, 0.3),
        make_food(2, "Potato", "Carbohydrate", 100.0, 77.0, 17.0, 2.0, 0.1),
        make_food(3, "Banana", "Carbohydrate", 120.0, 105.0, 27.0, 1.3, 0.4),
        make_food(4, "Oats", "Carbohydrate", 40.0, 150.0, 27.0, 5.0, 2.5),
        make_food(5, "Chicken breast", "Protein", 100.0, 165.0, 0.0, 31.0, 3.6),
        make_food(6, "Egg", "Protein", 50.0, 72.0, 0.4, 6.3, 4.8),
        make_food(7, "Whey", "Protein", 30.0, 120.0, 3.0, 24.0, 1.5),
        make_food(8, "Gelatin dessert", "Protein", 100.0, 62.0, 14.0, 0.0, 0.0),
        make_food(9, "Avocado", "Lipid", 100.0, 160.0, 8.5, 2.0, 14.7),
        make_food(10, "Peanut butter", "Lipid", 32.0, 190.0, 7.0, 8.0, 16.0),
        make_food(11, "Greek yogurt", "Dairy", 170.0, 100.0, 6.0, 17.0, 0.7),
        make_food(12, "Milk", "Dairy", 240.0, 150.0, 12.0, 8.0, 8.0),
        make_food(13, "Cheddar", "Dairy", 28.0, 115.0, 0.4, 7.0, 9.5),
    ])
}

fn wide() -> EquivalenceConfig {
    EquivalenceConfig {
        limit: 100,
        ..Default::default()
    }
}

#[test]
fn test_rice_to_potato_scenario() {
    let catalog = sample_catalog();
    let rice = catalog.get(&FoodId::from(1u64)).unwrap();

    let consumed = scale(rice, 150.0).unwrap();
    assert_float_absolute_eq!(consumed.calories, 195.0, 1e-9);
    assert_float_absolute_eq!(consumed.carbohydrate, 42.0, 1e-9);
    assert_float_absolute_eq!(consumed.protein, 4.05, 1e-9);
    assert_float_absolute_eq!(consumed.lipid, 0.45, 1e-9);

    assert_eq!(classify(rice), Macronutrient::Carbohydrate);

    let results = catalog
        .find_equivalents(&rice.id, 150.0, &EquivalenceConfig::default())
        .unwrap();
    let potato = results.iter().find(|r| r.name == "Potato").unwrap();
    assert_eq!(potato.quantity, 247.1);
    assert_eq!(potato.nutrient.label(), "Carbohydrate");
}

#[test]
fn test_equivalence_round_trip() {
    let catalog = sample_catalog();

    for food in catalog.foods() {
        for quantity in [15.0, 100.0, 150.0, 333.0] {
            let dominant: Nutrient = classify(food).into();
            let results = find_equivalents(food, quantity, catalog.category_pool(food), &wide()).unwrap();
            let original = scale(food, quantity).unwrap().get(dominant);

            for sub in &results {
                let candidate = catalog.get(&sub.food_id).unwrap();
                let replaced = scale(candidate, sub.quantity).unwrap().get(dominant);
                assert_float_absolute_eq!(replaced, original, 0.05);
            }
        }
    }
}

#[test]
fn test_never_suggests_itself() {
    let catalog = sample_catalog();

    // Pool deliberately includes the item itself.
    for food in catalog.foods() {
        let results = find_equivalents(food, 100.0, catalog.foods(), &wide()).unwrap();
        assert!(results.iter().all(|r| r.food_id != food.id), "{} suggested itself", food.name);
    }
}

#[test]
fn test_only_same_category() {
    let catalog = sample_catalog();
    let chicken = catalog.get(&FoodId::from(5u64)).unwrap();

    let results = find_equivalents(chicken, 100.0, catalog.foods(), &wide()).unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();

    // Gelatin has no protein and is skipped.
    assert_eq!(names, vec!["Egg", "Whey"]);
}

#[test]
fn test_zero_dominant_yields_empty_list() {
    let catalog = sample_catalog();
    let gelatin = catalog.get(&FoodId::from(8u64)).unwrap();

    // Category forces protein, which gelatin lacks.
    assert_eq!(classify(gelatin), Macronutrient::Protein);
    let results = catalog
        .find_equivalents(&gelatin.id, 100.0, &EquivalenceConfig::default())
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_order_follows_pool_not_magnitude() {
    let catalog = sample_catalog();
    let rice = catalog.get(&FoodId::from(1u64)).unwrap();

    let forward = find_equivalents(rice, 100.0, catalog.foods(), &wide()).unwrap();
    let mut reversed_pool = catalog.foods();
    reversed_pool.reverse();
    let backward = find_equivalents(rice, 100.0, reversed_pool, &wide()).unwrap();

    let mut expected = forward.clone();
    expected.reverse();
    assert_eq!(backward, expected);
    assert_eq!(
        forward.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        vec!["Potato", "Banana", "Oats"]
    );
}

#[test]
fn test_default_limit_truncates_to_three() {
    let mut foods = sample_catalog().to_foods();
    for i in 0..5 {
        foods.push(make_food(100 + i, &format!("Bread {}", i), "Carbohydrate", 50.0, 130.0, 24.0, 4.0, 1.5));
    }
    let catalog = FoodCatalog::new(foods);

    let results = catalog
        .find_equivalents(&FoodId::from(1u64), 100.0, &EquivalenceConfig::default())
        .unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[2].name, "Oats");
}

#[test]
fn test_free_form_category_uses_numeric_dominant() {
    let catalog = sample_catalog();
    let yogurt = catalog.get(&FoodId::from(11u64)).unwrap();

    assert_eq!(classify(yogurt), Macronutrient::Protein);

    // 17 g protein in 170 g yogurt; milk has 8 g per 240 g, cheddar 7 g per 28 g.
    let results = find_equivalents(yogurt, 170.0, catalog.category_pool(yogurt), &wide()).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "Milk");
    assert_eq!(results[0].quantity, 510.0);
    assert_eq!(results[1].name, "Cheddar");
    assert_eq!(results[1].quantity, 68.0);
}

#[test]
fn test_calorie_basis_with_different_reference_quantities() {
    let catalog = sample_catalog();
    let avocado = catalog.get(&FoodId::from(9u64)).unwrap();

    let config = EquivalenceConfig {
        basis: EquivalenceBasis::Calories,
        ..Default::default()
    };
    let results = equivalences(avocado, 100.0, catalog.category_pool(avocado), &config).unwrap();

    // 160 kcal / (190 kcal per 32 g)
    assert_eq!(results[0].name, "Peanut butter");
    assert_eq!(results[0].quantity, 26.9);
    assert_eq!(results[0].nutrient, Nutrient::Calories);
}

#[test]
fn test_zero_quantity_gives_zero_equivalents() {
    let catalog = sample_catalog();
    let results = catalog
        .find_equivalents(&FoodId::from(1u64), 0.0, &EquivalenceConfig::default())
        .unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.quantity == 0.0));
}
