use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidateLength;

/// Tri-state field for PATCH requests on nullable columns.
///
/// Deserialize with `#[serde(default)]`:
/// - key absent → `Unchanged`
/// - `null` → `SetToNull`
/// - value → `SetToValue`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OptionField<T> {
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> Default for OptionField<T> {
    fn default() -> Self {
        OptionField::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => OptionField::SetToValue(value),
            None => OptionField::SetToNull,
        })
    }
}

impl<T> ValidateLength<u64> for OptionField<T>
where
    T: ValidateLength<u64>
{
    fn length(&self) -> Option<u64> {
        match self {
            OptionField::SetToValue(value) => value.length(),
            _ => None,
        }
    }

    fn validate_length(&self, min: Option<u64>, max: Option<u64>, equal: Option<u64>) -> bool {
        match self {
            OptionField::SetToValue(value) => value.validate_length(min, max, equal),
            _ => true,
        }
    }
}

impl<T> OptionField<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Writes the change into `target`, leaving it alone when `Unchanged`.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Self::Unchanged => {}
            Self::SetToNull => *target = None,
            Self::SetToValue(value) => *target = Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default)]
        live_url: OptionField<String>,
    }

    #[test]
    fn missing_null_and_value_are_distinct() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"live_url": null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"live_url": "https://demo.example"}"#).unwrap();

        assert_eq!(absent.live_url, OptionField::Unchanged);
        assert_eq!(null.live_url, OptionField::SetToNull);
        assert_eq!(value.live_url, OptionField::SetToValue("https://demo.example".to_string()));
    }

    #[test]
    fn apply_to_respects_tri_state() {
        let mut url = Some("https://old.example".to_string());

        OptionField::Unchanged.apply_to(&mut url);
        assert_eq!(url.as_deref(), Some("https://old.example"));

        OptionField::SetToValue("https://new.example".to_string()).apply_to(&mut url);
        assert_eq!(url.as_deref(), Some("https://new.example"));

        OptionField::SetToNull.apply_to(&mut url);
        assert_eq!(url, None);
    }

    #[test]
    fn length_is_skipped_unless_value_set() {
        let long = OptionField::SetToValue("x".repeat(20));
        assert!(!long.validate_length(None, Some(10), None));
        assert!(OptionField::<String>::SetToNull.validate_length(None, Some(10), None));
    }
}
