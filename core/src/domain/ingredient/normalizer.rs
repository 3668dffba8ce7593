//! Canonicalization of raw detector class names into the ingredient vocabulary.
//!
//! A raw label goes through three stages:
//! 1. [`normalize_label`] folds variants onto a food family by substring rules.
//!    Rules are evaluated in a fixed order and the first family that matches
//!    wins, so a label such as `"milk tea"` resolves to `"milk"`.
//! 2. The normalized name is rejected if it is a scene object ([`SKIP_LABELS`])
//!    or if it is not a recognized food ([`FOOD_LABELS`]).
//! 3. [`FRIENDLY_NAMES`] rewrites some names into their display form.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Scene objects the detector reports around food that are never ingredients.
pub const SKIP_LABELS: &[&str] = &[
    "food colorings",
    "person",
    "storage box",
    "socket",
    "mixing bowl",
    "pot",
    "pan",
    "lid",
    "chemistry lab",
    "appliance",
    "basket",
    "container",
    "basket container",
    "crock pot",
    "breadbox",
    "fridge",
    "bottle",
    "bottle cap",
    "sink",
    "chair",
    "dining table",
    "cup",
    "fork",
    "knife",
    "spoon",
    "bowl",
    "tv",
    "remote",
    "keyboard",
    "book",
];

/// Display forms for canonical names. Names absent here pass through.
pub const FRIENDLY_NAMES: &[(&str, &str)] = &[
    ("apple", "apples"),
    ("banana", "bananas"),
    ("orange", "oranges"),
    ("carrot", "carrots"),
    ("broccoli", "broccoli"),
    ("tomato", "tomatoes"),
    ("egg", "eggs"),
    ("sandwich", "sandwich"),
    ("pizza", "pizza"),
    ("cake", "cake"),
    ("rice", "rice"),
    ("boiled rice", "boiled rice"),
    ("pasta", "pasta"),
    ("noodles", "noodles"),
    ("bread", "bread"),
    ("milk", "milk"),
    ("cheese", "cheese"),
    ("yogurt", "yogurt"),
    ("butter", "butter"),
    ("chicken", "chicken"),
    ("fish", "fish"),
    ("beans", "beans"),
    ("lentils", "lentils"),
    ("chickpeas", "chickpeas"),
    ("oats", "oats"),
    ("flour", "flour"),
    ("sugar", "sugar"),
    ("oil", "cooking oil"),
    ("nuts", "nuts"),
];

/// Closed vocabulary of recognized food concepts.
pub const FOOD_LABELS: &[&str] = &[
    // fruits
    "apple", "banana", "orange", "grape", "strawberry", "blueberry", "raspberry",
    "blackberry", "mango", "peach", "pear", "plum", "pineapple", "watermelon",
    "melon", "kiwi", "lemon", "lime", "pomegranate", "avocado", "coconut",
    // vegetables
    "carrot", "broccoli", "tomato", "onion", "lettuce", "cucumber", "pepper",
    "bell pepper", "corn", "garlic", "potato", "sweet potato", "spinach",
    "zucchini", "cauliflower", "cabbage", "celery", "radish", "ginger",
    "eggplant", "beetroot", "okra", "peas", "bean", "green beans", "mushroom",
    // dairy and protein
    "egg", "milk", "butter", "cheese", "yogurt", "cream", "paneer", "tofu",
    "chicken", "beef", "pork", "lamb", "turkey", "fish", "salmon", "shrimp",
    "prawns", "crab", "tuna", "ham", "sausage", "bacon", "steak", "meatballs",
    // grains and pantry
    "rice", "boiled rice", "brown rice", "white rice", "basmati rice",
    "quinoa", "barley", "pasta", "spaghetti", "macaroni", "noodles",
    "bread", "bun", "tortilla", "wrap", "flour", "cornflour", "maida",
    "oats", "cereal", "cornflakes", "wheat", "semolina", "couscous",
    "sugar", "salt", "oil", "olive oil", "vinegar",
    "baking powder", "baking soda", "yeast", "honey", "jam", "peanut butter",
    // pulses and legumes
    "beans", "kidney beans", "black beans", "white beans", "lentils",
    "red lentils", "green lentils", "chickpeas", "gram", "split peas",
    // snacks and desserts
    "cupcake", "cookie", "pastry", "donut", "chocolate", "candy",
    "chips", "crisps", "popcorn", "ice cream", "waffle", "pancake",
    "muffin", "pie", "brownie", "biscuit", "snack", "cracker", "cake",
    // prepared dishes
    "sandwich", "pizza", "burger", "hot dog", "taco", "burrito", "sushi",
    "omelette", "boiled egg", "fried egg", "salad", "soup", "noodle bowl",
    "pasta salad", "fried rice", "rice bowl", "stir fry", "toast",
    "roti", "naan", "paratha", "curry", "stew", "lasagna", "cilantro", "parsley",
    "coriander",
    // condiments and sauces
    "ketchup", "mustard", "mayonnaise", "soy sauce", "chili sauce",
    "barbecue sauce", "salsa", "pickle", "relish",
    "spice", "seasoning", "herbs", "masala", "curry powder",
    // drinks
    "coffee", "tea", "milkshake", "juice", "orange juice", "smoothie",
    "soda", "water bottle", "energy drink", "wine", "beer", "milk bottle",
    // misc
    "nuts", "almonds", "cashew", "walnut", "peanut", "raisins",
    "dates", "seeds", "sunflower seeds", "pumpkin seeds",
];

static SKIP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SKIP_LABELS.iter().copied().collect());

static FOOD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FOOD_LABELS.iter().copied().collect());

static FRIENDLY_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FRIENDLY_NAMES.iter().copied().collect());

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}

/// Folds a raw detector label onto its food family.
///
/// Returns the lowercased, trimmed label unchanged when no family matches.
pub fn normalize_label(raw_name: &str) -> String {
    let name = raw_name.trim().to_lowercase();

    let family = if name.contains("chicken") {
        "chicken"
    } else if name.contains("egg") {
        if name.contains("boiled") {
            "boiled egg"
        } else if name.contains("fried") {
            "fried egg"
        } else {
            "egg"
        }
    } else if name.contains("milk") {
        "milk"
    } else if contains_any(&name, &["yogurt", "curd"]) {
        "yogurt"
    } else if name.contains("cheese") {
        "cheese"
    } else if contains_any(&name, &["butter", "margarine"]) {
        "butter"
    } else if name.contains("cream") {
        "cream"
    } else if name.contains("rice") {
        if name.contains("fried") {
            "fried rice"
        } else if name.contains("bowl") {
            "rice bowl"
        } else if name.contains("boiled") {
            "boiled rice"
        } else {
            "rice"
        }
    } else if contains_any(&name, &["spaghetti", "macaroni", "penne"]) {
        "pasta"
    } else if name.contains("noodle") {
        "noodles"
    } else if contains_any(&name, &["bread", "loaf", "baguette"]) {
        "bread"
    } else if name.contains("juice") {
        "juice"
    } else if name.contains("coffee") {
        "coffee"
    } else if name.contains("tea") {
        "tea"
    } else if contains_any(&name, &["soda", "cola"]) {
        "soda"
    } else if name.contains("water") {
        "water bottle"
    } else if name.contains("beer") {
        "beer"
    } else if name.contains("wine") {
        "wine"
    } else if name.contains("salad") {
        "salad"
    } else {
        return name;
    };

    family.to_string()
}

pub fn is_skipped(name: &str) -> bool {
    SKIP_SET.contains(name)
}

pub fn is_food(name: &str) -> bool {
    FOOD_SET.contains(name)
}

pub fn friendly_name(name: &str) -> &str {
    FRIENDLY_MAP.get(name).copied().unwrap_or(name)
}

/// Maps a raw label to its user-facing ingredient name, or `None` when the
/// label is a denylisted scene object or outside the food vocabulary.
pub fn canonicalize_label(raw_name: &str) -> Option<String> {
    let name = normalize_label(raw_name);

    if is_skipped(&name) || !is_food(&name) {
        return None;
    }

    Some(friendly_name(&name).to_string())
}
