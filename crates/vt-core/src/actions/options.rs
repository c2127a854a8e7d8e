use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::model::ActionRecord;

/// Distinct values available for the filter dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub areas: Vec<String>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[ActionRecord]) -> Self {
        let mut areas = BTreeSet::new();
        let mut states = BTreeSet::new();
        let mut cities = BTreeSet::new();

        for record in records {
            insert_non_empty(&mut areas, Some(record.area.as_str()));
            insert_non_empty(&mut states, record.state());
            insert_non_empty(&mut cities, record.city());
        }

        Self {
            areas: areas.into_iter().collect(),
            states: states.into_iter().collect(),
            cities: cities.into_iter().collect(),
        }
    }
}

/// Cities that appear together with `state`, sorted.
pub fn cities_in_state(records: &[ActionRecord], state: &str) -> Vec<String> {
    let mut cities = BTreeSet::new();
    for record in records.iter().filter(|r| r.state() == Some(state)) {
        insert_non_empty(&mut cities, record.city());
    }
    cities.into_iter().collect()
}

fn insert_non_empty(set: &mut BTreeSet<String>, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        set.insert(v.to_string());
    }
}
