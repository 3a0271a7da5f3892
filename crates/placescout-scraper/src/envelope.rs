//! Caller-facing result envelope.

use serde::Serialize;

use crate::error::PlaceError;
use crate::types::BusinessRecord;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSuccess {
    pub original_url: String,
    pub place_data: BusinessRecord,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceFailure {
    pub error_kind: String,
    pub message: String,
}

impl PlaceFailure {
    pub fn new(error_kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_kind: error_kind.into(),
            message: message.into(),
        }
    }
}

impl From<&PlaceError> for PlaceFailure {
    fn from(err: &PlaceError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

/// Either `{ originalUrl, placeData }` or `{ errorKind, message }`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PlaceEnvelope {
    Success(PlaceSuccess),
    Failure(PlaceFailure),
}

impl PlaceEnvelope {
    pub fn from_result(original_url: &str, result: Result<BusinessRecord, PlaceError>) -> Self {
        match result {
            Ok(place_data) => PlaceEnvelope::Success(PlaceSuccess {
                original_url: original_url.to_owned(),
                place_data,
            }),
            Err(err) => PlaceEnvelope::Failure(PlaceFailure::from(&err)),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, PlaceEnvelope::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExtractionSource;

    fn record() -> BusinessRecord {
        BusinessRecord {
            site_id: Some("1".to_string()),
            category: None,
            road_address: Some("123 Road".to_string()),
            address: None,
            title: Some("Cafe X".to_string()),
            phone: None,
            virtual_phone: None,
            description: None,
            reviews: Vec::new(),
            source: ExtractionSource::EmbeddedGraph,
        }
    }

    #[test]
    fn success_serializes_with_camel_case_keys_and_omits_absent_fields() {
        let envelope = PlaceEnvelope::from_result("https://naver.me/abc", Ok(record()));
        let json = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(json["originalUrl"], "https://naver.me/abc");
        assert_eq!(json["placeData"]["siteId"], "1");
        assert_eq!(json["placeData"]["roadAddress"], "123 Road");
        assert_eq!(json["placeData"]["source"], "embedded_graph");
        assert!(json["placeData"].get("phone").is_none());
        assert!(json["placeData"].get("reviews").is_none());
    }

    #[test]
    fn failure_carries_kind_and_message() {
        let err = PlaceError::NoRecord {
            url: "https://m.place.naver.com/place/1".to_string(),
        };
        let envelope = PlaceEnvelope::from_result("https://naver.me/abc", Err(err));
        assert!(!envelope.is_success());
        let json = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(json["errorKind"], "no_record");
        assert!(json["message"]
            .as_str()
            .is_some_and(|m| m.contains("no place record")));
        assert!(json.get("placeData").is_none());
    }
}
