//! JSON encoding of colony knowledge.

use blob_core::{BlobConfig, Cell, Knowledge};
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// Serialized form of [`Knowledge`]: configuration and known food cells.
///
/// The target population is derived state and is not stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeRecord {
    /// Colony configuration.
    pub config: BlobConfig,
    /// Known food cells, in discovery order.
    pub food: Vec<Cell>,
}

impl From<&Knowledge> for KnowledgeRecord {
    fn from(knowledge: &Knowledge) -> Self {
        Self {
            config: knowledge.config.clone(),
            food: knowledge.known_food().iter().copied().collect(),
        }
    }
}

/// Encode `knowledge` as pretty-printed JSON.
pub fn encode_knowledge(knowledge: &Knowledge) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(&KnowledgeRecord::from(knowledge))?)
}

/// Decode knowledge written by [`encode_knowledge`].
///
/// Missing keys take their defaults. Duplicate food cells collapse.
///
/// # Errors
///
/// [`SnapshotError::Json`] on unparsable input, [`SnapshotError::Config`]
/// when the configuration fails validation.
pub fn decode_knowledge(text: &str) -> Result<Knowledge, SnapshotError> {
    let record: KnowledgeRecord = serde_json::from_str(text)?;
    record.config.validate()?;
    Ok(Knowledge::with_food(record.config, record.food))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_keeps_food_order() {
        let mut config = BlobConfig::default();
        config.scouting.sightline = 7;
        let knowledge = Knowledge::with_food(config, [Cell::new(5, 1), Cell::new(0, 3)]);
        let back = decode_knowledge(&encode_knowledge(&knowledge).unwrap()).unwrap();
        assert_eq!(back.config, knowledge.config);
        assert_eq!(back.food_at(0), Some(Cell::new(5, 1)));
        assert_eq!(back.food_at(1), Some(Cell::new(0, 3)));
    }

    #[test]
    fn food_is_a_list_of_pairs() {
        let knowledge = Knowledge::with_food(BlobConfig::default(), [Cell::new(2, 9)]);
        let value: serde_json::Value =
            serde_json::from_str(&encode_knowledge(&knowledge).unwrap()).unwrap();
        assert_eq!(value["food"], serde_json::json!([[2, 9]]));
    }

    #[test]
    fn sparse_json_takes_defaults() {
        let knowledge = decode_knowledge(r#"{"food": [[1, 1], [1, 1]]}"#).unwrap();
        assert_eq!(knowledge.config, BlobConfig::default());
        assert_eq!(knowledge.food_count(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = decode_knowledge(r#"{"global_decrease": -1.0}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Config(_)));
        let err = decode_knowledge("not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }
}
