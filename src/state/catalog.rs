// Activity catalog management
// Contains the activity records, participant rosters, and signup rules

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Unique identifier for an activity (its display name)
pub type ActivityName = String;

/// Errors produced by catalog operations
///
/// Validation fully precedes mutation: a rejected signup or withdrawal
/// leaves the catalog unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The named activity does not exist in the catalog
    #[error("Activity not found")]
    ActivityNotFound,
    /// The email is already on the activity's roster
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    /// The email is not on the activity's roster
    #[error("Participant not found in this activity")]
    ParticipantNotFound,
}

/// Activity structure
/// Represents one extracurricular offering with its roster of participants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Unique name of the activity, immutable after catalog initialization
    pub name: ActivityName,
    /// Display-only description of the activity
    pub description: String,
    /// Display-only meeting schedule
    pub schedule: String,
    /// Informational capacity; signup does not enforce it
    pub max_participants: u32,
    /// Emails of enrolled students, in signup order
    pub participants: Vec<String>,
}

impl Activity {
    /// Create a new activity with an empty roster
    pub fn new(
        name: ActivityName,
        description: String,
        schedule: String,
        max_participants: u32,
    ) -> Self {
        Self {
            name,
            description,
            schedule,
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Create a new activity with a pre-populated roster
    pub fn with_participants(
        name: ActivityName,
        description: String,
        schedule: String,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        let mut activity = Self::new(name, description, schedule, max_participants);
        activity.participants = participants;
        activity
    }

    /// Check whether an email is on the roster
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// The activity catalog
///
/// Sole owner of all activity records, keyed by activity name. Populated
/// once at process start and mutated in place by signup/withdraw; it is
/// handed to the handler layer as shared state so tests can construct
/// isolated instances.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Registry of all activities (name -> Activity)
    pub activities: HashMap<ActivityName, Activity>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a pre-built activity mapping
    ///
    /// Entries are re-keyed by each activity's own name so the mapping
    /// invariant (key == value.name) holds for hand-edited seed files.
    pub fn from_activities(activities: HashMap<ActivityName, Activity>) -> Self {
        let mut catalog = Self::new();
        for activity in activities.into_values() {
            catalog.add_activity(activity);
        }
        catalog
    }

    /// Add an activity to the catalog
    /// Returns true if the activity was added (false if the name already exists)
    pub fn add_activity(&mut self, activity: Activity) -> bool {
        if self.activities.contains_key(&activity.name) {
            false
        } else {
            self.activities.insert(activity.name.clone(), activity);
            true
        }
    }

    /// Get all activities as a vector, sorted by name
    pub fn activities_list(&self) -> Vec<&Activity> {
        let mut activities: Vec<&Activity> = self.activities.values().collect();
        activities.sort_by(|a, b| a.name.cmp(&b.name));
        activities
    }

    /// Get the number of activities in the catalog
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Sign a student up for an activity
    ///
    /// The email is an opaque identifier; no format validation is performed.
    /// Fails if the activity does not exist or the email is already enrolled.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<(), CatalogError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or(CatalogError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(CatalogError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Withdraw a student from an activity
    ///
    /// Fails if the activity does not exist or the email is not enrolled.
    pub fn withdraw(&mut self, name: &str, email: &str) -> Result<(), CatalogError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or(CatalogError::ActivityNotFound)?;

        let index = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(CatalogError::ParticipantNotFound)?;

        activity.participants.remove(index);
        Ok(())
    }

    /// Load activities from a seed file
    /// Replaces all current activities with those loaded from the file
    /// Returns the number of activities loaded, or an error if loading failed
    pub fn load_seed<P: AsRef<std::path::Path>>(
        &mut self,
        path: P,
    ) -> Result<usize, super::seed::SeedError> {
        let loaded = super::seed::CatalogSeed::load_from_file(path)?;
        let catalog = Catalog::from_activities(loaded);
        let count = catalog.activity_count();
        self.activities = catalog.activities;
        Ok(count)
    }

    /// Save the current activities to a seed file
    /// Returns Ok(()) if successful, or an error if saving failed
    #[allow(dead_code)] // Not used by the server; seed files are authored offline
    pub fn save_seed<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), super::seed::SeedError> {
        super::seed::CatalogSeed::save_to_file(&self.activities, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club() -> Activity {
        Activity::with_participants(
            "Chess Club".to_string(),
            "Learn strategies and compete in chess tournaments".to_string(),
            "Fridays, 3:30 PM - 5:00 PM".to_string(),
            12,
            vec!["michael@mergington.edu".to_string()],
        )
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.activity_count(), 0);
        assert!(catalog.activities.get("Chess Club").is_none());
    }

    #[test]
    fn test_activity_new_has_empty_roster() {
        let activity = Activity::new(
            "Art Club".to_string(),
            "Painting and drawing".to_string(),
            "Mondays, 3:30 PM - 5:00 PM".to_string(),
            15,
        );
        assert_eq!(activity.name, "Art Club");
        assert!(activity.participants.is_empty());
        assert!(!activity.has_participant("anyone@mergington.edu"));
    }

    #[test]
    fn test_add_activity() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_activity(chess_club()));
        assert_eq!(catalog.activity_count(), 1);
        assert!(!catalog.add_activity(chess_club())); // Duplicate name should fail
        assert_eq!(catalog.activity_count(), 1);
    }

    #[test]
    fn test_from_activities_rekeys_by_name() {
        let mut activities = HashMap::new();
        // Key deliberately disagrees with the activity's own name
        activities.insert("wrong-key".to_string(), chess_club());

        let catalog = Catalog::from_activities(activities);
        assert!(catalog.activities.get("wrong-key").is_none());
        assert!(catalog.activities.get("Chess Club").is_some());
    }

    #[test]
    fn test_signup_success() {
        let mut catalog = Catalog::new();
        catalog.add_activity(chess_club());

        assert!(catalog.signup("Chess Club", "newstudent@mergington.edu").is_ok());
        assert!(catalog
            .activities
            .get("Chess Club")
            .unwrap()
            .has_participant("newstudent@mergington.edu"));
    }

    #[test]
    fn test_signup_preserves_roster_order() {
        let mut catalog = Catalog::new();
        catalog.add_activity(chess_club());

        catalog.signup("Chess Club", "a@mergington.edu").unwrap();
        catalog.signup("Chess Club", "b@mergington.edu").unwrap();

        let roster = &catalog.activities.get("Chess Club").unwrap().participants;
        assert_eq!(
            roster,
            &vec![
                "michael@mergington.edu".to_string(),
                "a@mergington.edu".to_string(),
                "b@mergington.edu".to_string(),
            ]
        );
    }

    #[test]
    fn test_signup_duplicate_rejected() {
        let mut catalog = Catalog::new();
        catalog.add_activity(chess_club());

        let result = catalog.signup("Chess Club", "michael@mergington.edu");
        assert_eq!(result, Err(CatalogError::AlreadySignedUp));
        // Roster unchanged
        assert_eq!(catalog.activities.get("Chess Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn test_signup_unknown_activity() {
        let mut catalog = Catalog::new();
        catalog.add_activity(chess_club());

        let result = catalog.signup("Nonexistent", "someone@mergington.edu");
        assert_eq!(result, Err(CatalogError::ActivityNotFound));
        assert_eq!(catalog.activity_count(), 1);
    }

    #[test]
    fn test_withdraw_success() {
        let mut catalog = Catalog::new();
        catalog.add_activity(chess_club());

        assert!(catalog.withdraw("Chess Club", "michael@mergington.edu").is_ok());
        assert!(!catalog
            .activities
            .get("Chess Club")
            .unwrap()
            .has_participant("michael@mergington.edu"));
    }

    #[test]
    fn test_withdraw_missing_participant() {
        let mut catalog = Catalog::new();
        catalog.add_activity(chess_club());

        let result = catalog.withdraw("Chess Club", "ghost@mergington.edu");
        assert_eq!(result, Err(CatalogError::ParticipantNotFound));
        assert_eq!(catalog.activities.get("Chess Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn test_withdraw_unknown_activity() {
        let mut catalog = Catalog::new();
        let result = catalog.withdraw("Nonexistent", "michael@mergington.edu");
        assert_eq!(result, Err(CatalogError::ActivityNotFound));
    }

    #[test]
    fn test_failed_operations_are_repeatable() {
        let mut catalog = Catalog::new();
        catalog.add_activity(chess_club());

        // Repeating a failed call yields the same error and no state change
        for _ in 0..2 {
            assert_eq!(
                catalog.signup("Chess Club", "michael@mergington.edu"),
                Err(CatalogError::AlreadySignedUp)
            );
            assert_eq!(
                catalog.withdraw("Chess Club", "ghost@mergington.edu"),
                Err(CatalogError::ParticipantNotFound)
            );
        }
        assert_eq!(
            catalog.activities.get("Chess Club").unwrap().participants,
            vec!["michael@mergington.edu".to_string()]
        );
    }

    #[test]
    fn test_activities_list_sorted() {
        let mut catalog = Catalog::new();
        catalog.add_activity(Activity::new(
            "Gym Class".to_string(),
            "Physical education".to_string(),
            "Mondays, 2:00 PM - 3:00 PM".to_string(),
            30,
        ));
        catalog.add_activity(chess_club());
        catalog.add_activity(Activity::new(
            "Art Club".to_string(),
            "Painting and drawing".to_string(),
            "Mondays, 3:30 PM - 5:00 PM".to_string(),
            15,
        ));

        let activities = catalog.activities_list();
        assert_eq!(activities.len(), 3);
        assert_eq!(activities[0].name, "Art Club");
        assert_eq!(activities[1].name, "Chess Club");
        assert_eq!(activities[2].name, "Gym Class");
    }
}
