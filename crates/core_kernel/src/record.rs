//! Flat field records
//!
//! Workflow entities are handled as flat key-value records keyed by a closed
//! field enum. A record distinguishes three states for every field:
//!
//! - absent: the key is not present (untouched in an update)
//! - `FieldValue::Null`: the key is present but explicitly cleared
//! - any other `FieldValue`: the key holds a typed value
//!
//! Values are parsed according to the field's declared [`FieldKind`], so a
//! record that deserializes successfully is already shape-checked.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::RecordError;

/// The value type a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Identifier of a related entity
    Reference,
    /// Free text
    Text,
    /// Monetary amount
    Amount,
    /// Calendar date
    Date,
    /// Whole number
    Count,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Reference => "reference",
            FieldKind::Text => "text",
            FieldKind::Amount => "amount",
            FieldKind::Date => "date",
            FieldKind::Count => "count",
        };
        f.write_str(s)
    }
}

/// A closed set of field names
pub trait FieldName: Copy + Ord + fmt::Debug + 'static {
    /// Every field in declaration order
    const ALL: &'static [Self];

    /// Wire name of the field
    fn as_str(&self) -> &'static str;

    /// Declared value kind
    fn kind(&self) -> FieldKind;

    /// Resolves a wire name
    fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

/// A typed field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Reference(Uuid),
    Text(String),
    Amount(Decimal),
    Date(NaiveDate),
    Count(i64),
}

impl FieldValue {
    /// Returns true for null and for blank text
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_amount(&self) -> Option<Decimal> {
        match self {
            FieldValue::Amount(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Parses a JSON value for a field of the given kind.
    ///
    /// Blank strings are accepted as null for every non-text kind, since
    /// forms submit cleared inputs that way.
    pub fn from_json(
        field: &'static str,
        kind: FieldKind,
        value: serde_json::Value,
    ) -> Result<Self, RecordError> {
        use serde_json::Value;

        let invalid = |found: &Value| RecordError::InvalidValue {
            field,
            expected: kind,
            found: found.to_string(),
        };

        match (kind, &value) {
            (_, Value::Null) => Ok(FieldValue::Null),
            (FieldKind::Text, Value::String(s)) => Ok(FieldValue::Text(s.clone())),
            (_, Value::String(s)) if s.trim().is_empty() => Ok(FieldValue::Null),
            (FieldKind::Reference, Value::String(s)) => Uuid::parse_str(s)
                .map(FieldValue::Reference)
                .map_err(|_| invalid(&value)),
            (FieldKind::Amount, Value::Number(n)) => Decimal::from_str(&n.to_string())
                .or_else(|_| Decimal::from_scientific(&n.to_string()))
                .map(FieldValue::Amount)
                .map_err(|_| invalid(&value)),
            (FieldKind::Amount, Value::String(s)) => Decimal::from_str(s.trim())
                .map(FieldValue::Amount)
                .map_err(|_| invalid(&value)),
            (FieldKind::Date, Value::String(s)) => parse_date(s)
                .map(FieldValue::Date)
                .ok_or_else(|| invalid(&value)),
            (FieldKind::Count, Value::Number(n)) => n
                .as_i64()
                .map(FieldValue::Count)
                .ok_or_else(|| invalid(&value)),
            _ => Err(invalid(&value)),
        }
    }
}

/// Accepts plain dates and RFC 3339 timestamps (the date part is kept)
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.date_naive())
    })
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Amount(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        FieldValue::Reference(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Count(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// A flat record of field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<F: FieldName> {
    values: BTreeMap<F, FieldValue>,
}

impl<F: FieldName> Default for Record<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldName> Record<F> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Sets a field, builder style
    pub fn with(mut self, field: F, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: F, value: impl Into<FieldValue>) {
        self.values.insert(field, value.into());
    }

    /// Marks a field as explicitly cleared
    pub fn clear(&mut self, field: F) {
        self.values.insert(field, FieldValue::Null);
    }

    pub fn remove(&mut self, field: F) -> Option<FieldValue> {
        self.values.remove(&field)
    }

    pub fn get(&self, field: F) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn contains(&self, field: F) -> bool {
        self.values.contains_key(&field)
    }

    /// True when the field holds a non-empty value
    pub fn is_filled(&self, field: F) -> bool {
        self.get(field).map(|v| !v.is_empty()).unwrap_or(false)
    }

    pub fn amount(&self, field: F) -> Option<Decimal> {
        self.get(field).and_then(FieldValue::as_amount)
    }

    pub fn date(&self, field: F) -> Option<NaiveDate> {
        self.get(field).and_then(FieldValue::as_date)
    }

    pub fn text(&self, field: F) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Present keys in field order
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &FieldValue)> + '_ {
        self.values.iter().map(|(f, v)| (*f, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlays `updates` on a copy of this record
    pub fn merged_with(&self, updates: &Record<F>) -> Record<F> {
        let mut merged = self.clone();
        for (field, value) in updates.iter() {
            merged.values.insert(field, value.clone());
        }
        merged
    }
}

impl<F: FieldName> FromIterator<(F, FieldValue)> for Record<F> {
    fn from_iter<I: IntoIterator<Item = (F, FieldValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<F: FieldName> Serialize for Record<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in &self.values {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de, F: FieldName> Deserialize<'de> for Record<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor<F>(PhantomData<F>);

        impl<'de, F: FieldName> Visitor<'de> for RecordVisitor<F> {
            type Value = Record<F>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut record = Record::new();
                while let Some(key) = access.next_key::<String>()? {
                    let field = F::parse(&key)
                        .ok_or_else(|| de::Error::custom(RecordError::UnknownField(key.clone())))?;
                    let raw: serde_json::Value = access.next_value()?;
                    let value = FieldValue::from_json(field.as_str(), field.kind(), raw)
                        .map_err(de::Error::custom)?;
                    record.values.insert(field, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        Name,
        Total,
        DueOn,
    }

    impl FieldName for Field {
        const ALL: &'static [Self] = &[Field::Name, Field::Total, Field::DueOn];

        fn as_str(&self) -> &'static str {
            match self {
                Field::Name => "name",
                Field::Total => "total",
                Field::DueOn => "dueOn",
            }
        }

        fn kind(&self) -> FieldKind {
            match self {
                Field::Name => FieldKind::Text,
                Field::Total => FieldKind::Amount,
                Field::DueOn => FieldKind::Date,
            }
        }
    }

    #[test]
    fn test_blank_text_is_empty() {
        assert!(FieldValue::Text("   ".into()).is_empty());
        assert!(FieldValue::Null.is_empty());
        assert!(!FieldValue::Amount(dec!(0)).is_empty());
    }

    #[test]
    fn test_merge_overwrites_only_present_keys() {
        let current = Record::new()
            .with(Field::Name, "a")
            .with(Field::Total, dec!(10));
        let mut updates = Record::new();
        updates.clear(Field::Name);

        let merged = current.merged_with(&updates);
        assert!(!merged.is_filled(Field::Name));
        assert_eq!(merged.amount(Field::Total), Some(dec!(10)));
    }

    #[test]
    fn test_deserialize_parses_by_kind() {
        let record: Record<Field> =
            serde_json::from_str(r#"{"name": "x", "total": 12.5, "dueOn": "2024-03-10"}"#).unwrap();
        assert_eq!(record.amount(Field::Total), Some(dec!(12.5)));
        assert_eq!(record.date(Field::DueOn), NaiveDate::from_ymd_opt(2024, 3, 10));
    }

    #[test]
    fn test_blank_amount_string_is_null() {
        let record: Record<Field> = serde_json::from_str(r#"{"total": ""}"#).unwrap();
        assert_eq!(record.get(Field::Total), Some(&FieldValue::Null));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Record<Field>, _> = serde_json::from_str(r#"{"bogus": 1}"#);
        assert!(result.unwrap_err().to_string().contains("Unknown field: bogus"));
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let result: Result<Record<Field>, _> = serde_json::from_str(r#"{"dueOn": "soon"}"#);
        assert!(result.is_err());
    }
}
