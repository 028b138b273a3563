//! 서버가 보낸 키 순서를 유지하는 JSON 객체 매핑.
//!
//! 섹터 비중, 기대 효과 등은 서버가 보낸 순서대로 화면에 나열되고
//! 차트 색상도 순서로 배정되므로 `HashMap`/`BTreeMap` 대신 이 타입을 씁니다.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// 삽입 순서를 유지하는 문자열 키 매핑.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    /// 빈 매핑을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 값을 추가합니다. 같은 키가 있으면 값만 바꾸고 위치는 유지합니다.
    ///
    /// 키를 선형 탐색하므로 수십 개 이하의 작은 매핑(섹터, 지표)을 전제로 합니다.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// 키로 값을 조회합니다.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// 순서대로 (키, 값)을 순회합니다.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// 순서대로 키를 순회합니다.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// 첫 번째 값.
    pub fn first_value(&self) -> Option<&V> {
        self.entries.first().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<V> {
    marker: PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_server_order() {
        let map: OrderedMap<f64> =
            serde_json::from_str(r#"{"IT": 0.65, "금융": 0.15, "화학": 0.10, "바이오": 0.05}"#)
                .unwrap();

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["IT", "금융", "화학", "바이오"]);
        assert_eq!(map.first_value(), Some(&0.65));
        assert_eq!(map.get("화학"), Some(&0.10));
        assert!(map.get("에너지").is_none());
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let map: OrderedMap<i64> = [("plan_adherence", 7), ("no_fomo", 14)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"plan_adherence":7,"no_fomo":14}"#);
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert("a", 1.0);
        map.insert("b", 2.0);
        map.insert("a", 3.0);

        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&3.0));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(serde_json::from_str::<OrderedMap<f64>>("[1, 2]").is_err());
    }
}
