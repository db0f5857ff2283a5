//! `serde` support: a reference serializes as its dotted string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Reference;

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dotted = String::deserialize(deserializer)?;
        Ok(Reference::new(&dotted))
    }
}
