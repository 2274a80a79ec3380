//! Plain-data projections of a catalog. Components only turn these into markup.

use crate::models::{Activity, Catalog};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet.";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

#[derive(Debug, Clone, PartialEq)]
pub enum Roster {
    Empty,
    Participants(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub roster: Roster,
}

impl ActivityCardView {
    pub fn from_activity(activity: &Activity) -> Self {
        let participants = &activity.details.participants;
        Self {
            name: activity.name.clone(),
            description: activity.details.description.clone(),
            schedule: activity.details.schedule.clone(),
            spots_left: activity.spots_left(),
            roster: if participants.is_empty() {
                Roster::Empty
            } else {
                Roster::Participants(participants.clone())
            },
        }
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

pub fn activity_cards(catalog: &Catalog) -> Vec<ActivityCardView> {
    catalog.iter().map(ActivityCardView::from_activity).collect()
}

pub fn selector_options(catalog: &Catalog) -> Vec<String> {
    catalog.iter().map(|a| a.name.clone()).collect()
}

pub fn unregister_label(email: &str) -> String {
    format!("Unregister {email}")
}
