use core_types::FactorId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Which factors of the catalog are switched on.
///
/// Deserializes from a plain `KEY = bool` table. Keys that do not name a
/// catalog factor are ignored, and catalog factors missing from the table are
/// disabled. When the whole table is absent, [`FactorConfig::default`] applies
/// and every factor is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct FactorConfig {
    enabled: BTreeMap<FactorId, bool>,
}

impl FactorConfig {
    /// A configuration with every factor disabled.
    pub fn none() -> Self {
        Self {
            enabled: FactorId::ALL.into_iter().map(|id| (id, false)).collect(),
        }
    }

    /// A configuration enabling exactly the given factors.
    pub fn only(ids: impl IntoIterator<Item = FactorId>) -> Self {
        let mut config = Self::none();
        for id in ids {
            config.set(id, true);
        }
        config
    }

    /// Builds a configuration from raw string keys.
    pub fn from_map<K: AsRef<str>>(map: impl IntoIterator<Item = (K, bool)>) -> Self {
        let mut config = Self::none();
        for (key, flag) in map {
            match key.as_ref().parse::<FactorId>() {
                Ok(id) => config.set(id, flag),
                Err(_) => tracing::debug!("Ignoring unknown factor key '{}'", key.as_ref()),
            }
        }
        config
    }

    pub fn is_enabled(&self, id: FactorId) -> bool {
        self.enabled.get(&id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: FactorId, enabled: bool) {
        self.enabled.insert(id, enabled);
    }

    /// Flips the flag of one factor and returns the new state.
    pub fn toggle(&mut self, id: FactorId) -> bool {
        let next = !self.is_enabled(id);
        self.set(id, next);
        next
    }

    /// Enabled factors, in catalog order.
    pub fn enabled_ids(&self) -> Vec<FactorId> {
        FactorId::ALL
            .into_iter()
            .filter(|id| self.is_enabled(*id))
            .collect()
    }
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            enabled: FactorId::ALL.into_iter().map(|id| (id, true)).collect(),
        }
    }
}

impl From<HashMap<String, bool>> for FactorConfig {
    fn from(map: HashMap<String, bool>) -> Self {
        Self::from_map(map)
    }
}

impl From<FactorConfig> for BTreeMap<String, bool> {
    fn from(config: FactorConfig) -> Self {
        FactorId::ALL
            .into_iter()
            .map(|id| (id.as_str().to_string(), config.is_enabled(id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_the_whole_catalog() {
        let config = FactorConfig::default();
        assert_eq!(config.enabled_ids(), FactorId::ALL.to_vec());
    }

    #[test]
    fn unknown_keys_are_ignored_and_missing_keys_disabled() {
        let config = FactorConfig::from_map([("TECH_RSI", true), ("NOT_A_FACTOR", true)]);
        assert_eq!(config.enabled_ids(), vec![FactorId::TechRsi]);
        assert!(!config.is_enabled(FactorId::Alpha006));
    }

    #[test]
    fn keys_are_matched_case_insensitively() {
        let config = FactorConfig::from_map([("alpha_009", true)]);
        assert!(config.is_enabled(FactorId::Alpha009));
    }

    #[test]
    fn toggle_flips_state() {
        let mut config = FactorConfig::none();
        assert!(config.toggle(FactorId::TechMacd));
        assert!(config.is_enabled(FactorId::TechMacd));
        assert!(!config.toggle(FactorId::TechMacd));
        assert!(config.enabled_ids().is_empty());
    }

    #[test]
    fn deserializes_from_a_flag_table() {
        let json = r#"{ "ALPHA_006": true, "TECH_ADX": false, "EXTRA": true }"#;
        let config: FactorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.enabled_ids(), vec![FactorId::Alpha006]);
    }

    #[test]
    fn serializes_every_catalog_key() {
        let map: BTreeMap<String, bool> = FactorConfig::only([FactorId::StatSkew]).into();
        assert_eq!(map.len(), FactorId::ALL.len());
        assert_eq!(map.get("STAT_SKEW"), Some(&true));
        assert_eq!(map.get("TECH_BOLL"), Some(&false));
    }
}
