use crate::domain::model::{CompletionCounts, Person};

/// Counts completion records per training name. Names never seen are absent, not zero.
pub fn count_completions(people: &[Person]) -> CompletionCounts {
    let mut counts = CompletionCounts::new();

    for completion in people.iter().flat_map(|person| &person.completions) {
        *counts.entry(completion.name.clone()).or_insert(0) += 1;
    }

    counts
}
