// Mixnode Records
// Data types returned by the explorer API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of micro-units in one whole token
const MICRO_UNITS: u128 = 1_000_000;

/// Identity key of a mixnode, used as its identifier everywhere
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MixnodeId(String);

impl MixnodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for narrow columns
    pub fn short(&self) -> String {
        if self.0.chars().count() > 12 {
            let head: String = self.0.chars().take(6).collect();
            let tail: String = self.0.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
            format!("{}…{}", head, tail)
        } else {
            self.0.clone()
        }
    }
}

impl fmt::Display for MixnodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MixnodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// An amount of tokens in micro-units
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    #[serde(default)]
    pub denom: String,
    #[serde(default)]
    pub amount: String,
}

impl Coin {
    pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            denom: denom.into(),
        }
    }

    /// Raw amount as an integer, if it parses
    pub fn micro_amount(&self) -> Option<u128> {
        self.amount.trim().parse().ok()
    }

    /// Human readable amount
    ///
    /// Micro denominations (`unym`, `upunk`) are converted to whole units
    /// with six decimals. Anything that does not parse is shown verbatim.
    pub fn display_amount(&self) -> String {
        let Some(micro) = self.micro_amount() else {
            return format!("{} {}", self.amount, self.denom).trim().to_string();
        };

        match self.denom.strip_prefix('u') {
            Some(base) if !base.is_empty() => format!(
                "{}.{:06} {}",
                micro / MICRO_UNITS,
                micro % MICRO_UNITS,
                base.to_uppercase()
            ),
            _ => format!("{} {}", micro, self.denom).trim().to_string(),
        }
    }
}

/// Network details advertised by the node itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixNode {
    pub identity_key: MixnodeId,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub mix_port: u16,
    #[serde(default)]
    pub verloc_port: u16,
    #[serde(default)]
    pub http_api_port: u16,
    #[serde(default)]
    pub sphinx_key: String,
    #[serde(default)]
    pub version: String,
    /// Free-form location string set by the operator
    #[serde(default)]
    pub location: String,
}

/// Geo location resolved by the explorer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub two_letter_iso_country_code: String,
    #[serde(default)]
    pub three_letter_iso_country_code: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

/// A bonded mixnode as served by the explorer API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MixnodeRecord {
    pub mix_node: MixNode,
    #[serde(default)]
    pub owner: String,
    #[serde(default, alias = "bond_amount")]
    pub pledge_amount: Coin,
    #[serde(default)]
    pub total_delegation: Coin,
    #[serde(default)]
    pub layer: u64,
    #[serde(default)]
    pub block_height: u64,
    #[serde(default)]
    pub location: Option<Location>,
}

impl MixnodeRecord {
    pub fn id(&self) -> &MixnodeId {
        &self.mix_node.identity_key
    }

    /// Country from the resolved location, falling back to the operator's string
    pub fn country(&self) -> &str {
        match &self.location {
            Some(location) if !location.country_name.is_empty() => &location.country_name,
            _ => &self.mix_node.location,
        }
    }

    /// Pledge plus delegation, when both amounts parse, share a denom and fit in a `u128`
    pub fn total_stake(&self) -> Option<Coin> {
        let pledge = self.pledge_amount.micro_amount()?;
        let delegation = self.total_delegation.micro_amount().unwrap_or(0);
        if !self.total_delegation.denom.is_empty() && self.total_delegation.denom != self.pledge_amount.denom {
            return None;
        }
        let total = pledge.checked_add(delegation)?;
        Some(Coin::new(total.to_string(), self.pledge_amount.denom.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "mix_node": {
            "host": "109.74.197.180",
            "mix_port": 1789,
            "verloc_port": 1790,
            "http_api_port": 8000,
            "sphinx_key": "5S9NQ7Q2ezwCyx4P3x7vzh4ghdqYjgXvumbxjnd3E7LP",
            "identity_key": "4yRfauFzZnejJhG2FACTVQ7UnYEcFUYw3HzXrmuwLMaR",
            "version": "0.11.0",
            "location": "London"
        },
        "owner": "punk1jw6mp7d5xqc7w6xm79lha27glmd0vdt32a3fj2",
        "bond_amount": { "denom": "upunk", "amount": "100000000" },
        "total_delegation": { "denom": "upunk", "amount": "2500000" },
        "layer": 2,
        "block_height": 1234,
        "location": {
            "country_name": "United Kingdom",
            "two_letter_iso_country_code": "GB",
            "three_letter_iso_country_code": "GBR",
            "lat": 51.5,
            "lng": -0.12
        }
    }"#;

    #[test]
    fn test_deserialize_explorer_record() {
        let record: MixnodeRecord = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(record.id().as_str(), "4yRfauFzZnejJhG2FACTVQ7UnYEcFUYw3HzXrmuwLMaR");
        assert_eq!(record.layer, 2);
        assert_eq!(record.pledge_amount.amount, "100000000");
        assert_eq!(record.country(), "United Kingdom");
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let record: MixnodeRecord =
            serde_json::from_str(r#"{ "mix_node": { "identity_key": "abc" } }"#).unwrap();
        assert_eq!(record.id(), &MixnodeId::from("abc"));
        assert_eq!(record.owner, "");
        assert!(record.location.is_none());
        assert_eq!(record.country(), "");
    }

    #[test]
    fn test_coin_display() {
        assert_eq!(Coin::new("1500000", "unym").display_amount(), "1.500000 NYM");
        assert_eq!(Coin::new("42", "upunk").display_amount(), "0.000042 PUNK");
        assert_eq!(Coin::new("7", "nym").display_amount(), "7 nym");
        assert_eq!(Coin::new("n/a", "unym").display_amount(), "n/a unym");
    }

    #[test]
    fn test_total_stake() {
        let record: MixnodeRecord = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(record.total_stake(), Some(Coin::new("102500000", "upunk")));

        let mut mismatched = record.clone();
        mismatched.total_delegation.denom = "unym".to_string();
        assert_eq!(mismatched.total_stake(), None);

        let mut huge = record.clone();
        huge.pledge_amount.amount = u128::MAX.to_string();
        huge.total_delegation.amount = "1".to_string();
        assert_eq!(huge.total_stake(), None);
    }

    #[test]
    fn test_short_id() {
        let id = MixnodeId::from("4yRfauFzZnejJhG2FACTVQ7UnYEcFUYw3HzXrmuwLMaR");
        assert_eq!(id.short(), "4yRfau…LMaR");
        assert_eq!(MixnodeId::from("short").short(), "short");
    }
}
