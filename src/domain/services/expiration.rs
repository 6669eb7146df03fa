use crate::domain::dates::one_month_after;
use crate::domain::model::{ExpiringPerson, ExpiringTraining, Person, TrainingStatus};
use chrono::NaiveDate;

pub fn find_expiring(people: &[Person], reference_date: NaiveDate) -> Vec<ExpiringPerson> {
    let horizon = one_month_after(reference_date);

    people
        .iter()
        .filter_map(|person| {
            let trainings: Vec<ExpiringTraining> = person
                .completions
                .iter()
                .filter_map(|completion| {
                    let status = classify(completion.expires?, reference_date, horizon)?;
                    Some(ExpiringTraining {
                        name: completion.name.clone(),
                        status,
                    })
                })
                .collect();

            (!trainings.is_empty()).then(|| ExpiringPerson {
                name: person.name.clone(),
                trainings,
            })
        })
        .collect()
}

fn classify(expires: NaiveDate, reference: NaiveDate, horizon: NaiveDate) -> Option<TrainingStatus> {
    if expires < reference {
        Some(TrainingStatus::Expired)
    } else if expires <= horizon {
        Some(TrainingStatus::ExpiresSoon)
    } else {
        None
    }
}
