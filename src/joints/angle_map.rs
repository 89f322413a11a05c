use super::JointAngle;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dense map from [`JointAngle`] to `T`.
///
/// Serialized as an object keyed by the canonical angle names; unknown keys
/// are rejected on deserialization.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleMap<T> {
    slots: [Option<T>; JointAngle::COUNT],
}

impl<T> Default for AngleMap<T> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }
}

impl<T> AngleMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, angle: JointAngle) -> Option<&T> {
        self.slots[angle.index()].as_ref()
    }

    pub fn get_mut(&mut self, angle: JointAngle) -> Option<&mut T> {
        self.slots[angle.index()].as_mut()
    }

    pub fn get_or_insert_with(&mut self, angle: JointAngle, f: impl FnOnce() -> T) -> &mut T {
        self.slots[angle.index()].get_or_insert_with(f)
    }

    pub fn insert(&mut self, angle: JointAngle, value: T) -> Option<T> {
        self.slots[angle.index()].replace(value)
    }

    pub fn remove(&mut self, angle: JointAngle) -> Option<T> {
        self.slots[angle.index()].take()
    }

    pub fn contains(&self, angle: JointAngle) -> bool {
        self.slots[angle.index()].is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Present entries in canonical [`JointAngle::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (JointAngle, &T)> + '_ {
        JointAngle::ALL
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(angle, slot)| slot.as_ref().map(|v| (*angle, v)))
    }

    pub fn keys(&self) -> impl Iterator<Item = JointAngle> + '_ {
        self.iter().map(|(angle, _)| angle)
    }
}

impl<T: Copy> AngleMap<T> {
    /// Copy of the value stored for `angle`, if any.
    #[inline]
    pub fn value(&self, angle: JointAngle) -> Option<T> {
        self.slots[angle.index()]
    }
}

impl<T> FromIterator<(JointAngle, T)> for AngleMap<T> {
    fn from_iter<I: IntoIterator<Item = (JointAngle, T)>>(iter: I) -> Self {
        let mut map = AngleMap::new();
        for (angle, value) in iter {
            map.insert(angle, value);
        }
        map
    }
}

impl<T: Serialize> Serialize for AngleMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (angle, value) in self.iter() {
            map.serialize_entry(angle.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for AngleMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, T>::deserialize(deserializer)?;
        let mut map = AngleMap::new();
        for (key, value) in raw {
            let angle = key
                .parse::<JointAngle>()
                .map_err(<D::Error as de::Error>::custom)?;
            map.insert(angle, value);
        }
        Ok(map)
    }
}
