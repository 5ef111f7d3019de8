use super::prelude::*;
use crate::util::{text::non_empty, validate::Validate};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct PreferenceParams<'a> {
    pub budget              : f64,
    pub accommodation       : Accommodation,
    pub stars               : u8,
    pub forks               : u8,
    pub departure_date      : &'a str,
    pub arrival_date        : &'a str,
    pub departure_city      : Option<Id>,
    pub arrival_city        : Option<Id>,
    pub activity_categories : Vec<String>,
    pub cuisines            : Vec<String>,
}

fn clean_labels(labels: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        if let Some(label) = non_empty(Some(&label)) {
            if !cleaned.iter().any(|l| l == label) {
                cleaned.push(label.to_owned());
            }
        }
    }
    cleaned
}

fn check_destination<R: DestinationRepo>(repo: &R, id: Option<Id>) -> Result<()> {
    let Some(id) = id else {
        return Ok(());
    };
    match repo.get_destination(id) {
        Ok(_) => Ok(()),
        Err(RepoError::NotFound) => Err(Error::UnknownDestination),
        Err(err) => Err(err.into()),
    }
}

pub fn get_preference<R>(repo: &R, actor: Option<&User>) -> Result<Preference>
where
    R: PreferenceRepo,
{
    authorize(actor, Subject::Preference, ownership_of(actor), Action::Read)?;
    let user = require_user(actor)?;
    repo.try_get_preference(user.id)?
        .ok_or(Error::Repo(RepoError::NotFound))
}

/// Create or replace the preference of the acting user.
pub fn save_preference<R>(repo: &R, actor: Option<&User>, params: PreferenceParams) -> Result<Preference>
where
    R: PreferenceRepo + DestinationRepo,
{
    authorize(actor, Subject::Preference, ownership_of(actor), Action::Update)?;
    let user = require_user(actor)?;
    let preference = Preference {
        user: user.id,
        budget: params.budget,
        accommodation: params.accommodation,
        stars: params.stars,
        forks: params.forks,
        departure_date: parse_date(params.departure_date).map_err(|_| Error::InvalidDate)?,
        arrival_date: parse_date(params.arrival_date).map_err(|_| Error::InvalidDate)?,
        departure_city: params.departure_city,
        arrival_city: params.arrival_city,
        activity_categories: clean_labels(params.activity_categories),
        cuisines: clean_labels(params.cuisines),
    };
    preference.validate()?;
    check_destination(repo, preference.departure_city)?;
    check_destination(repo, preference.arrival_city)?;
    repo.save_preference(&preference)?;
    Ok(preference)
}

pub fn delete_preference<R>(repo: &R, actor: Option<&User>) -> Result<()>
where
    R: PreferenceRepo,
{
    authorize(actor, Subject::Preference, ownership_of(actor), Action::Delete)?;
    let user = require_user(actor)?;
    Ok(repo.delete_preference(user.id)?)
}
