use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    /// Remaining capacity. Goes negative when the server over-allocates.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.details.max_participants) - self.details.participants.len() as i64
    }
}

/// Activities keyed by name, in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    activities: Vec<Activity>,
}

impl Catalog {
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }
}

impl FromIterator<(String, ActivityDetails)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, ActivityDetails)>>(iter: I) -> Self {
        Self {
            activities: iter
                .into_iter()
                .map(|(name, details)| Activity { name, details })
                .collect(),
        }
    }
}

// A HashMap would lose the server's key order, so walk the JSON object by hand.
impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activity details")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Catalog, M::Error> {
                let mut activities: Vec<Activity> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    // Last value wins for a repeated key, like a JS object.
                    if let Some(existing) = activities.iter_mut().find(|a| a.name == name) {
                        existing.details = details;
                    } else {
                        activities.push(Activity { name, details });
                    }
                }
                Ok(Catalog { activities })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Body of a signup/unregister response: `{message}` on success, `{detail}` on error.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
