use std::collections::HashMap;

use nutriscan_core::IngredientRecord;

/// Immutable knowledge-base snapshot.
///
/// Records keep their load order, and `iter()` yields them in that
/// order — the matcher's tie-break depends on iteration order being
/// deterministic. Names are lowercased on insert; if a loader hands us
/// duplicate names the first record wins.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    records: Vec<IngredientRecord>,
    index: HashMap<String, usize>,
}

impl KnowledgeBase {
    pub fn from_records(records: impl IntoIterator<Item = IngredientRecord>) -> Self {
        let mut kb = KnowledgeBase::default();
        for mut record in records {
            record.name = record.name.trim().to_lowercase();
            if kb.index.contains_key(&record.name) {
                continue;
            }
            kb.index.insert(record.name.clone(), kb.records.len());
            kb.records.push(record);
        }
        kb
    }

    /// Exact lookup by canonical (lowercase) name.
    pub fn get(&self, name: &str) -> Option<&IngredientRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Records in load order.
    pub fn iter(&self) -> impl Iterator<Item = &IngredientRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscan_core::Category;

    fn record(name: &str, category: Category) -> IngredientRecord {
        IngredientRecord {
            name: name.into(),
            impact: "test".into(),
            category,
            description: None,
        }
    }

    #[test]
    fn lookup_is_case_normalized_at_build() {
        let kb = KnowledgeBase::from_records([record("  Sea Salt ", Category::Safe)]);
        assert!(kb.contains("sea salt"));
        assert_eq!(kb.get("sea salt").unwrap().category, Category::Safe);
    }

    #[test]
    fn first_record_wins_on_duplicate_name() {
        let kb = KnowledgeBase::from_records([
            record("sugar", Category::Caution),
            record("sugar", Category::Danger),
        ]);
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.get("sugar").unwrap().category, Category::Caution);
    }

    #[test]
    fn iteration_preserves_load_order() {
        let kb = KnowledgeBase::from_records([
            record("oats", Category::Safe),
            record("salt", Category::Caution),
            record("msg", Category::Danger),
        ]);
        let names: Vec<&str> = kb.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["oats", "salt", "msg"]);
    }
}
