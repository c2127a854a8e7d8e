use serde::{Deserialize, Serialize};

/// User-selected predicates. An empty string means "unset".
///
/// Criteria are replaced wholesale on every edit; see [`FilterCriteria::with_field`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search: String,
    pub area: String,
    pub city: String,
    pub state: String,
    pub date_from: String,
    pub date_to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    Search,
    Area,
    City,
    State,
    DateFrom,
    DateTo,
}

impl FilterCriteria {
    /// Returns a copy with one field replaced.
    pub fn with_field(&self, field: FilterField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FilterField::Search => next.search = value,
            FilterField::Area => next.area = value,
            FilterField::City => next.city = value,
            FilterField::State => next.state = value,
            FilterField::DateFrom => next.date_from = value,
            FilterField::DateTo => next.date_to = value,
        }
        next
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.area.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.date_from.is_empty()
            && self.date_to.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let base = FilterCriteria::default();
        let next = base.with_field(FilterField::State, "SP");

        assert!(base.is_empty());
        assert_eq!(next.state, "SP");
        assert!(!next.is_empty());
    }

    #[test]
    fn test_deserializes_partial_camel_case() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"dateFrom":"2024-01-01","area":"Educação"}"#).unwrap();
        assert_eq!(criteria.date_from, "2024-01-01");
        assert_eq!(criteria.area, "Educação");
        assert!(criteria.search.is_empty());
    }
}
