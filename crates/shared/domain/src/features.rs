use bitflags::bitflags;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Dashboard features a variant turns on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u32 {
        const CRYPTO_MARKETS = 1 << 0;
        const GLOBAL_CONFLICTS = 1 << 1;
        const NATO_TRACKER = 1 << 2;
        const MIDDLE_EAST = 1 << 3;
        const BORDER_MONITOR = 1 << 4;
        const MEKONG_MONITOR = 1 << 5;
        const ASEAN_NEWS = 1 << 6;
        const ECONOMIC_CORRIDORS = 1 << 7;
    }
}

/// Host-facing flag names, in display order.
pub const FEATURE_NAMES: [(&str, FeatureSet); 8] = [
    ("showCryptoMarkets", FeatureSet::CRYPTO_MARKETS),
    ("showGlobalConflicts", FeatureSet::GLOBAL_CONFLICTS),
    ("showNATOTracker", FeatureSet::NATO_TRACKER),
    ("showMiddleEast", FeatureSet::MIDDLE_EAST),
    ("showBorderMonitor", FeatureSet::BORDER_MONITOR),
    ("showMekongMonitor", FeatureSet::MEKONG_MONITOR),
    ("showASEANNews", FeatureSet::ASEAN_NEWS),
    ("showEconomicCorridors", FeatureSet::ECONOMIC_CORRIDORS),
];

impl FeatureSet {
    /// Resolves a flag name.
    ///
    /// Matching ignores ASCII case, `_` and `-`, so `showBorderMonitor`,
    /// `show_border_monitor` and `SHOW-BORDER-MONITOR` all name the same flag.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        FEATURE_NAMES
            .iter()
            .find(|(candidate, _)| same_flag_name(candidate, name))
            .map(|&(_, flag)| flag)
    }

    /// Every flag paired with whether it is set, in display order.
    pub fn entries(self) -> impl Iterator<Item = (&'static str, bool)> {
        FEATURE_NAMES.into_iter().map(move |(name, flag)| (name, self.contains(flag)))
    }
}

fn same_flag_name(a: &str, b: &str) -> bool {
    let significant = |s: &str| {
        s.chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect::<Vec<_>>()
    };
    significant(a) == significant(b)
}

impl From<u32> for FeatureSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(FEATURE_NAMES.len()))?;
        for (name, enabled) in self.entries() {
            map.serialize_entry(name, &enabled)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlagMap;

        impl<'de> Visitor<'de> for FlagMap {
            type Value = FeatureSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of feature flag names to booleans")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut set = FeatureSet::empty();
                while let Some((name, enabled)) = access.next_entry::<String, bool>()? {
                    let flag = FeatureSet::lookup(&name).ok_or_else(|| {
                        serde::de::Error::custom(format!("unknown feature flag `{name}`"))
                    })?;
                    set.set(flag, enabled);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(FlagMap)
    }
}
