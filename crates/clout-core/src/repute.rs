// crates/clout-core/src/repute.rs
//
// Endorsement records as submitted by reputers and persisted by the store.
//
// A record is keyed by `{rid}-{reputer}-{reputee}`. The triple, not the rid
// alone, is the deduplication unit: the first record stored under a key wins.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A scored dimension of a reputee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    /// How far the reputee's work travels.
    Reach,
    /// How clear the reputee's work is.
    Clarity,
}

impl Feature {
    /// All features that contribute to a reputation.
    pub const ALL: [Feature; 2] = [Feature::Reach, Feature::Clarity];

    /// The wire name of this feature (`"reach"` or `"clarity"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Reach => "reach",
            Feature::Clarity => "clarity",
        }
    }

    /// Parse a wire name. Returns `None` for anything that is not a scored feature.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "reach" => Some(Feature::Reach),
            "clarity" => Some(Feature::Clarity),
            _ => None,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rating carried by an endorsement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repute {
    /// Caller-supplied endorsement id. Numeric ids are accepted and kept as
    /// their decimal text.
    #[serde(deserialize_with = "rid_from_text_or_number")]
    pub rid: String,
    /// Feature name. Stored verbatim; names other than `reach` and `clarity`
    /// are kept but never scored.
    pub feature: String,
    /// Numeric rating. Not range-checked.
    pub value: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRid {
    Text(String),
    Number(serde_json::Number),
}

fn rid_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawRid::deserialize(deserializer)? {
        RawRid::Text(s) => s,
        RawRid::Number(n) => n.to_string(),
    })
}

/// A single stored endorsement of `reputee` by `reputer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputeRecord {
    /// Who is endorsing.
    pub reputer: String,
    /// Who is being endorsed.
    pub reputee: String,
    /// The rating itself.
    pub repute: Repute,
}

impl ReputeRecord {
    /// Build a record from its parts.
    pub fn new(
        reputer: impl Into<String>,
        reputee: impl Into<String>,
        rid: impl Into<String>,
        feature: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            reputer: reputer.into(),
            reputee: reputee.into(),
            repute: Repute {
                rid: rid.into(),
                feature: feature.into(),
                value,
            },
        }
    }

    /// The deduplication key: `{rid}-{reputer}-{reputee}`.
    pub fn storage_key(&self) -> String {
        format!("{}-{}-{}", self.repute.rid, self.reputer, self.reputee)
    }

    /// The scored feature this record rates, if any.
    pub fn feature(&self) -> Option<Feature> {
        Feature::from_name(&self.repute.feature)
    }

    /// Whether this record rates `feature` for `reputee`.
    pub fn rates(&self, reputee: &str, feature: Feature) -> bool {
        self.reputee == reputee && self.feature() == Some(feature)
    }
}
