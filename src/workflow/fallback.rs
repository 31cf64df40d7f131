use std::sync::LazyLock;

use crate::models::{Day, Meal, MealSlot, Plan};

/// The bundled plan shown whenever generation fails.
///
/// Three balanced days of roughly 2000 kcal, one meal per slot.
static FALLBACK_PLAN: LazyLock<Plan> = LazyLock::new(|| {
    use MealSlot::*;

    Plan::new(vec![
        Day::new(
            1,
            vec![
                Meal::new(Breakfast, "Oatmeal with berries and walnuts", 420.0, 12.0, 62.0, 14.0)
                    .with_description("Rolled oats cooked in milk, topped with mixed berries"),
                Meal::new(Lunch, "Grilled chicken quinoa bowl", 610.0, 45.0, 58.0, 20.0)
                    .with_description("Quinoa, grilled chicken, roasted vegetables, lemon dressing"),
                Meal::new(Dinner, "Baked salmon with sweet potato", 680.0, 42.0, 55.0, 30.0)
                    .with_description("Oven-baked salmon, sweet potato wedges, steamed broccoli"),
                Meal::new(Snacks, "Greek yogurt with honey", 230.0, 15.0, 28.0, 6.0),
            ],
        ),
        Day::new(
            2,
            vec![
                Meal::new(Breakfast, "Spinach and feta omelette", 390.0, 26.0, 8.0, 28.0)
                    .with_description("Three-egg omelette with spinach, feta and whole-grain toast"),
                Meal::new(Lunch, "Lentil and vegetable soup", 520.0, 28.0, 72.0, 12.0)
                    .with_description("Red lentils, carrots, celery and tomatoes"),
                Meal::new(Dinner, "Turkey stir-fry with brown rice", 690.0, 44.0, 70.0, 22.0)
                    .with_description("Lean turkey, peppers, snap peas, soy-ginger sauce"),
                Meal::new(Snacks, "Apple with almond butter", 250.0, 6.0, 28.0, 14.0),
            ],
        ),
        Day::new(
            3,
            vec![
                Meal::new(Breakfast, "Banana protein smoothie", 380.0, 28.0, 52.0, 8.0)
                    .with_description("Banana, oats, milk and whey protein"),
                Meal::new(Lunch, "Chickpea and tuna salad", 560.0, 38.0, 45.0, 24.0)
                    .with_description("Chickpeas, tuna, cucumber, tomato, olive oil"),
                Meal::new(Dinner, "Whole-wheat pasta primavera", 650.0, 24.0, 92.0, 20.0)
                    .with_description("Pasta with seasonal vegetables and parmesan"),
                Meal::new(Snacks, "Hummus with carrot sticks", 210.0, 7.0, 22.0, 11.0),
            ],
        ),
    ])
});

/// A copy of the bundled fallback plan.
pub fn fallback_plan() -> Plan {
    FALLBACK_PLAN.clone()
}

/// Whether `plan` is exactly the bundled fallback.
pub fn is_fallback(plan: &Plan) -> bool {
    *plan == *FALLBACK_PLAN
}
