// Catalog seed module
// Handles the built-in activity roster and loading/saving seed files

use super::catalog::{Activity, ActivityName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error types for seed operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// File I/O error
    IoError(String),
    /// JSON serialization/deserialization error
    JsonError(String),
    /// Invalid data format
    InvalidData(String),
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::IoError(msg) => write!(f, "IO Error: {}", msg),
            SeedError::JsonError(msg) => write!(f, "JSON Error: {}", msg),
            SeedError::InvalidData(msg) => write!(f, "Invalid Data: {}", msg),
        }
    }
}

impl std::error::Error for SeedError {}

/// Serializable structure for the catalog seed
/// Used for saving/loading activities to/from JSON files
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogSeedData {
    /// Version of the seed format (for future migration support)
    version: u32,
    /// Map of activity name to activity data
    activities: HashMap<ActivityName, Activity>,
}

/// Catalog seed file operations
pub struct CatalogSeed;

impl CatalogSeed {
    /// Save activities to a JSON seed file
    ///
    /// # Arguments
    /// * `activities` - HashMap of activities to save
    /// * `path` - Path to the JSON file
    ///
    /// # Returns
    /// * `Ok(())` if successful
    /// * `Err(SeedError)` if an error occurred
    pub fn save_to_file<P: AsRef<Path>>(
        activities: &HashMap<ActivityName, Activity>,
        path: P,
    ) -> Result<(), SeedError> {
        let data = CatalogSeedData {
            version: 1,
            activities: activities.clone(),
        };

        let json = serde_json::to_string_pretty(&data)
            .map_err(|e| SeedError::JsonError(e.to_string()))?;

        fs::write(path.as_ref(), json).map_err(|e| SeedError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Load activities from a JSON seed file
    ///
    /// # Arguments
    /// * `path` - Path to the JSON file
    ///
    /// # Returns
    /// * `Ok(HashMap<ActivityName, Activity>)` if successful
    /// * `Err(SeedError)` if an error occurred
    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<HashMap<ActivityName, Activity>, SeedError> {
        if !path.as_ref().exists() {
            return Ok(HashMap::new());
        }

        let json = fs::read_to_string(path.as_ref())
            .map_err(|e| SeedError::IoError(e.to_string()))?;

        let data: CatalogSeedData =
            serde_json::from_str(&json).map_err(|e| SeedError::JsonError(e.to_string()))?;

        // Validate version (for future migration support)
        if data.version != 1 {
            return Err(SeedError::InvalidData(format!(
                "Unsupported seed version: {}",
                data.version
            )));
        }

        Ok(data.activities)
    }

    /// Get the default path for the seed file
    /// Returns a path in the user's home directory or current directory
    pub fn default_path() -> std::path::PathBuf {
        if let Some(home) = std::env::var_os("HOME") {
            let mut path = std::path::PathBuf::from(home);
            path.push(".activity-signup");
            path.push("activities.json");
            path
        } else {
            std::path::PathBuf::from("activities.json")
        }
    }
}

/// The built-in activity roster used when no seed file is present
pub fn default_activities() -> HashMap<ActivityName, Activity> {
    let seed = [
        Activity::with_participants(
            "Chess Club".to_string(),
            "Learn strategies and compete in chess tournaments".to_string(),
            "Fridays, 3:30 PM - 5:00 PM".to_string(),
            12,
            vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        ),
        Activity::with_participants(
            "Programming Class".to_string(),
            "Learn programming fundamentals and build software projects".to_string(),
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
            20,
            vec![
                "emma@mergington.edu".to_string(),
                "sophia@mergington.edu".to_string(),
            ],
        ),
        Activity::with_participants(
            "Gym Class".to_string(),
            "Physical education and sports activities".to_string(),
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
            30,
            vec![
                "john@mergington.edu".to_string(),
                "olivia@mergington.edu".to_string(),
            ],
        ),
    ];

    seed.into_iter()
        .map(|activity| (activity.name.clone(), activity))
        .collect()
}
