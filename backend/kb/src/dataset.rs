//! Compiled-in fallback dataset used when no database is available.

use nutriscan_core::{Category, IngredientRecord};
use nutriscan_core::Category::{Caution, Danger, Safe};

/// (name, category, impact, description) rows, in load order.
const RECORDS: &[(&str, Category, &str, &str)] = &[
    // Safe — whole foods and natural ingredients
    ("rolled oats", Safe, "Heart-healthy food, high in fiber", "Excellent source of complex carbohydrates"),
    ("oats", Safe, "Heart-healthy food, high in fiber", "Good source of complex carbohydrates and nutrients"),
    ("almonds", Safe, "Good source of healthy fats and protein", "Rich in vitamin E and magnesium"),
    ("walnuts", Safe, "Contains omega-3 fatty acids", "Supports brain health"),
    ("flaxseed", Safe, "High in omega-3 fatty acids and fiber", "May help lower cholesterol"),
    ("chia seeds", Safe, "Rich in fiber and omega-3 fatty acids", "Good for digestive health"),
    ("quinoa", Safe, "Complete protein with all essential amino acids", "High in fiber and minerals"),
    ("spinach", Safe, "Nutrient-dense leafy green", "Rich in iron and antioxidants"),
    ("kale", Safe, "Excellent source of vitamins K, A, and C", "High in antioxidants"),
    ("blueberries", Safe, "High in antioxidants", "May improve brain function and heart health"),
    ("olive oil", Safe, "Source of healthy monounsaturated fats", "Good for heart health in moderation"),
    ("lentils", Safe, "Good source of plant protein and fiber", "Rich in folate and iron"),
    ("garlic", Safe, "Has antimicrobial properties", "May support immune function"),
    ("turmeric", Safe, "Contains anti-inflammatory compounds", "May have medicinal benefits"),
    ("cinnamon", Safe, "May help regulate blood sugar", "Has antioxidant properties"),
    ("whole grain", Safe, "Heart-healthy, supports digestion", "Contains more nutrients than refined grains"),
    ("fiber", Safe, "Essential for digestive health", "Helps maintain healthy blood sugar levels"),
    ("dietary fiber", Safe, "Promotes digestive health", "Important for overall gut health"),
    ("brown rice", Safe, "Good source of fiber and minerals", "Contains more nutrients than white rice"),
    ("ginger", Safe, "Anti-inflammatory properties", "May help with digestion and nausea"),
    ("dried potatoes", Safe, "Natural dried food product", "Made from real potatoes with minimal processing"),
    ("potatoes", Safe, "Natural vegetable, good source of potassium", "Contains vitamin C and fiber"),
    ("sea salt", Safe, "Less processed than table salt", "Contains trace minerals not found in regular salt"),
    ("calcium", Safe, "Essential mineral for bone health", "Necessary for healthy muscle and nerve function"),
    ("iron", Safe, "Essential mineral for blood health", "Needed for oxygen transport in the blood"),
    ("potassium", Safe, "Essential mineral for heart health", "Helps maintain fluid balance and supports nerve function"),
    ("banana", Safe, "Rich in potassium and fiber", "Good for heart health and digestion"),
    ("raw banana", Safe, "Natural fruit with nutrients", "Contains resistant starch that aids gut health"),
    ("himalayan pink salt", Safe, "Contains trace minerals", "Less refined than table salt"),
    // Caution — use in moderation
    ("honey", Caution, "Natural sugar, use in moderation", "Better alternative to refined sugar but still impacts blood sugar"),
    ("sunflower oil", Caution, "High in omega-6, consume in moderation", "May promote inflammation if consumed in excess"),
    ("canola oil", Caution, "Refined oil, consume in moderation", "Often highly processed"),
    ("salt", Caution, "Necessary but may raise blood pressure in excess", "Essential in small amounts but limit consumption"),
    ("sugar", Caution, "May contribute to various health issues", "Linked to obesity and metabolic disorders"),
    ("corn syrup", Caution, "Added sugar with minimal nutritional value", "Can contribute to weight gain and metabolic issues"),
    ("natural flavor", Caution, "Umbrella term for various flavor compounds", "May contain allergens or irritants for some people"),
    ("soy lecithin", Caution, "Common emulsifier, may cause reactions in some", "Usually well tolerated but may affect those with soy allergies"),
    ("xanthan gum", Caution, "Common thickener, may cause digestive issues", "Can cause bloating in sensitive individuals"),
    ("maltodextrin", Caution, "Processed carbohydrate with high glycemic index", "May cause blood sugar spikes"),
    ("cane sugar", Caution, "Less processed than white sugar but still impacts blood sugar", "Use sparingly"),
    ("palm oil", Caution, "High in saturated fat, environmental concerns", "Raises LDL cholesterol, linked to deforestation"),
    ("natural sweeteners", Caution, "Better than refined sugar but still impacts blood sugar", "Use in moderation"),
    ("jaggery", Caution, "Less processed sugar alternative", "Contains some minerals but still affects blood sugar"),
    ("coconut oil", Caution, "High in saturated fat, consume in moderation", "May raise cholesterol levels"),
    ("corn oil", Caution, "Refined oil high in omega-6 fatty acids", "May contribute to inflammation when consumed in excess"),
    ("corn starch", Caution, "Highly refined carbohydrate", "Minimal nutritional value, high glycemic index"),
    ("dextrose", Caution, "Simple sugar with high glycemic index", "Causes rapid blood sugar spikes"),
    ("annatto", Caution, "Natural food coloring, may cause reactions in some", "Generally safe but can trigger allergic reactions in sensitive individuals"),
    ("annatto extracts", Caution, "Natural food coloring derived from seeds", "May cause allergic reactions in some people"),
    ("soy", Caution, "Common allergen, may affect hormones", "Contains phytoestrogens that may affect hormone balance"),
    ("soy ingredients", Caution, "Common allergen, consume in moderation", "May cause allergic reactions in sensitive individuals"),
    ("vitamin d", Caution, "Essential in moderation, toxic in excess", "Fat-soluble vitamin that can accumulate in the body"),
    // Danger — harmful additives and heavily processed ingredients
    ("high fructose corn syrup", Danger, "Linked to obesity and metabolic syndrome", "May contribute to fatty liver disease"),
    ("partially hydrogenated oil", Danger, "Contains trans fats linked to heart disease", "Increases bad cholesterol"),
    ("hydrogenated oil", Danger, "Contains trans fats linked to heart disease", "Raises LDL cholesterol levels"),
    ("hydrogenated", Danger, "Process that creates harmful trans fats", "Associated with increased heart disease risk"),
    ("trans fat", Danger, "Directly linked to heart disease", "Raises bad cholesterol (LDL) while lowering good cholesterol (HDL)"),
    ("sodium nitrite", Danger, "Preservative linked to cancer risk", "Found in processed meats"),
    ("sodium nitrate", Danger, "Preservative with potential cancer risk", "Used in processed meats, linked to health issues"),
    ("artificial flavor", Danger, "May contain synthetic chemicals with potential sensitivities", "Can trigger allergic reactions in some people"),
    ("artificial sweeteners", Danger, "May disrupt gut microbiome", "Associated with metabolic issues"),
    ("artificial colors", Danger, "Linked to behavioral issues and allergies", "May cause hypersensitivity reactions"),
    ("aspartame", Danger, "Controversial sweetener with potential adverse effects", "May cause headaches and other symptoms in sensitive individuals"),
    ("bha", Danger, "Preservative with potential carcinogenic effects", "Banned in some countries"),
    ("bht", Danger, "Preservative with potential endocrine disrupting effects", "May affect hormones"),
    ("red 40", Danger, "Artificial color linked to hyperactivity", "May cause allergic reactions and behavioral issues in children"),
    ("yellow 5", Danger, "Artificial color with potential behavioral effects", "May trigger sensitivities and hyperactivity"),
    ("propylparaben", Danger, "Preservative with potential hormone disruption", "May mimic estrogen"),
    ("msg", Danger, "Flavor enhancer that may cause reactions", "Can trigger headaches and other symptoms in sensitive individuals"),
    ("monosodium glutamate", Danger, "Flavor enhancer that may cause reactions", "Can trigger headaches and other symptoms in sensitive individuals"),
];

/// Materialize the compiled-in dataset.
pub fn static_records() -> Vec<IngredientRecord> {
    RECORDS
        .iter()
        .map(|&(name, category, impact, description)| IngredientRecord {
            name: name.to_string(),
            impact: impact.to_string(),
            category,
            description: Some(description.to_string()),
        })
        .collect()
}
