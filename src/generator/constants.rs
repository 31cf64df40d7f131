// ─────────────────────────────────────────────────────────────────────────────
// Daily calorie split
// ─────────────────────────────────────────────────────────────────────────────

/// Relative share of the daily calorie target per slot, before
/// normalisation over the meals actually planned.
pub const BREAKFAST_SHARE: f64 = 0.25;
pub const LUNCH_SHARE: f64 = 0.35;
pub const DINNER_SHARE: f64 = 0.40;

/// Share of a single snack.
pub const SNACK_SHARE: f64 = 0.10;

// ─────────────────────────────────────────────────────────────────────────────
// Recipe ranking
// ─────────────────────────────────────────────────────────────────────────────

/// Quadratic penalty strength for missing the slot's calorie share.
pub const CALORIE_FIT_GAMMA: f64 = 4.0;

/// Weight-loss: reward per gram of protein per 100 kcal.
pub const LEAN_PROTEIN_GAMMA: f64 = 0.12;

/// Weight-loss: penalty per unit of fat calorie share.
pub const LEAN_FAT_GAMMA: f64 = 0.6;

/// Muscle-gain: reward per gram of protein per 100 kcal.
pub const MUSCLE_PROTEIN_GAMMA: f64 = 0.2;

/// Maintenance: reward for macro split close to the reference split.
pub const BALANCE_GAMMA: f64 = 1.0;

/// Reference (protein, carbs, fats) calorie split for balanced meals.
pub const BALANCED_SPLIT: (f64, f64, f64) = (0.25, 0.50, 0.25);

/// Energy: reward per unit of carb calorie share.
pub const ENERGY_CARB_GAMMA: f64 = 0.8;

/// Heart-health: bonus for low-sodium dishes, penalty per fat share.
pub const HEART_LOW_SODIUM_BONUS: f64 = 0.4;
pub const HEART_FAT_GAMMA: f64 = 0.5;

/// Bonus for dishes common where the user lives.
pub const LOCAL_BONUS: f64 = 0.3;

/// Penalty per earlier use of the same recipe in the plan.
pub const REPETITION_PENALTY_GAMMA: f64 = 0.35;

/// Candidates within this score window of the best are near-equal and
/// picked between with seeded jitter.
pub const TIE_EPSILON: f64 = 0.05;
