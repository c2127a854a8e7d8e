use super::criteria::FilterCriteria;
use super::model::{calendar_prefix, ActionRecord};

/// Keeps the records that satisfy every active criterion, in input order.
pub fn apply_filter(records: &[ActionRecord], criteria: &FilterCriteria) -> Vec<ActionRecord> {
    let search = criteria.search.to_lowercase();
    records
        .iter()
        .filter(|r| matches_with(r, criteria, &search))
        .cloned()
        .collect()
}

/// Single-record predicate behind [`apply_filter`].
pub fn matches(record: &ActionRecord, criteria: &FilterCriteria) -> bool {
    matches_with(record, criteria, &criteria.search.to_lowercase())
}

fn matches_with(record: &ActionRecord, criteria: &FilterCriteria, search: &str) -> bool {
    matches_search(record, search)
        && matches_exact(Some(record.area.as_str()), &criteria.area)
        && matches_exact(record.city(), &criteria.city)
        && matches_exact(record.state(), &criteria.state)
        && matches_date(record, &criteria.date_from, |date, bound| date >= bound)
        && matches_date(record, &criteria.date_to, |date, bound| date <= bound)
}

// `search` is already lowercased.
fn matches_search(record: &ActionRecord, search: &str) -> bool {
    search.is_empty()
        || record.title.to_lowercase().contains(search)
        || record.description.to_lowercase().contains(search)
}

fn matches_exact(value: Option<&str>, wanted: &str) -> bool {
    wanted.is_empty() || value == Some(wanted)
}

fn matches_date(record: &ActionRecord, bound: &str, cmp: impl Fn(&str, &str) -> bool) -> bool {
    if bound.is_empty() {
        return true;
    }
    match record.calendar_date() {
        Some(date) if !date.is_empty() => cmp(date, calendar_prefix(bound)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::fixtures::{record, sample};
    use crate::actions::FilterField;

    fn titles(records: &[ActionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_empty_collection_stays_empty() {
        let criteria = FilterCriteria::default().with_field(FilterField::Search, "x");
        assert!(apply_filter(&[], &criteria).is_empty());
        assert!(apply_filter(&[], &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let records = sample();
        assert_eq!(apply_filter(&records, &FilterCriteria::default()), records);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let records = sample();
        let by_title = FilterCriteria::default().with_field(FilterField::Search, "MUTIRÃO");
        assert_eq!(titles(&apply_filter(&records, &by_title)), ["Mutirão de limpeza"]);

        let by_description =
            FilterCriteria::default().with_field(FilterField::Search, "descrição de plantio");
        assert_eq!(
            titles(&apply_filter(&records, &by_description)),
            ["Plantio de mudas"]
        );
    }

    #[test]
    fn test_exact_fields_combine_with_and() {
        let records = sample();
        let criteria = FilterCriteria::default()
            .with_field(FilterField::Area, "Educação")
            .with_field(FilterField::State, "PE");
        assert_eq!(
            titles(&apply_filter(&records, &criteria)),
            ["Leitura para crianças"]
        );

        let partial_area = FilterCriteria::default().with_field(FilterField::Area, "Educ");
        assert!(apply_filter(&records, &partial_area).is_empty());
    }

    #[test]
    fn test_output_preserves_input_order() {
        let records = sample();
        let criteria = FilterCriteria::default().with_field(FilterField::Area, "Meio Ambiente");
        assert_eq!(
            titles(&apply_filter(&records, &criteria)),
            ["Mutirão de limpeza", "Plantio de mudas"]
        );
    }

    #[test]
    fn test_date_range_is_inclusive_on_calendar_dates() {
        let records = sample();
        let criteria = FilterCriteria::default()
            .with_field(FilterField::DateFrom, "2024-04-02")
            .with_field(FilterField::DateTo, "2024-06-01");
        assert_eq!(
            titles(&apply_filter(&records, &criteria)),
            ["Aula de reforço", "Campanha do agasalho", "Plantio de mudas"]
        );
    }

    #[test]
    fn test_missing_location_fails_location_criteria_only() {
        let mut homeless = record("Sem local", "Educação", "", "", "2024-01-01");
        homeless.location = None;

        let by_city = FilterCriteria::default().with_field(FilterField::City, "Recife");
        assert!(!matches(&homeless, &by_city));

        let by_area = FilterCriteria::default().with_field(FilterField::Area, "Educação");
        assert!(matches(&homeless, &by_area));
    }

    #[test]
    fn test_missing_date_fails_date_criteria() {
        let mut undated = record("Sem data", "Educação", "Recife", "PE", "");
        undated.date = None;

        let criteria = FilterCriteria::default().with_field(FilterField::DateTo, "2030-01-01");
        assert!(!matches(&undated, &criteria));
        assert!(matches(&undated, &FilterCriteria::default()));
    }
}
