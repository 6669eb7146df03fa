use crate::domain::dates::FiscalYear;
use crate::domain::model::{FiscalYearRoster, Person};
use std::collections::BTreeSet;

/// Lists, per requested training, the people who completed it inside `fiscal_year`.
///
/// Every requested name is present in the result, with an empty list when nobody
/// matched. People appear in input order and are not deduplicated: two in-window
/// completions of the same training put the same person in the list twice.
pub fn filter_by_fiscal_year(
    people: &[Person],
    training_names: &BTreeSet<String>,
    fiscal_year: FiscalYear,
) -> FiscalYearRoster {
    let mut roster: FiscalYearRoster = training_names
        .iter()
        .map(|name| (name.clone(), Vec::new()))
        .collect();

    for person in people {
        for completion in &person.completions {
            if !fiscal_year.contains(completion.timestamp) {
                continue;
            }
            if let Some(names) = roster.get_mut(&completion.name) {
                names.push(person.name.clone());
            }
        }
    }

    roster
}
