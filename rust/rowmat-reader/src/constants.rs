//! Field-id to constant maps, used to inject values that are not stored per row
//! (partition values, schema evolution defaults).

use std::collections::HashMap;

use ahash::AHashMap;
use rowmat_common::{Result, error::Error};

use crate::value::Value;

/// Maps a schema field id to the constant bound to that field.
pub type IdToConstant = AHashMap<i32, Value>;

/// Parses a constant map from a JSON object keyed by field id, e.g.
/// `{"2": {"string": "X"}, "5": {"int": 2024}}`.
pub fn constants_from_json(json: &str) -> Result<IdToConstant> {
    let constants: HashMap<i32, Value> =
        serde_json::from_str(json).map_err(|e| Error::config("constants", e))?;
    Ok(constants.into_iter().collect())
}
