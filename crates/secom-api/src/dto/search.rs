//! Discovery search DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use secom_core::DataProductType;

/// Filter for a discovery search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilterObject {
    /// Free-text query over service descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Geographic filter, WKT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freetext: Option<String>,
}

/// One discovered service instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchObjectResult {
    pub instance_id: Uuid,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_product_type: Option<DataProductType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,

    /// Base URI of the instance's protocol endpoint.
    pub endpoint_uri: String,
}

/// Response of the search operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub search_service_result: Vec<SearchObjectResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let response = SearchResponse {
            search_service_result: vec![SearchObjectResult {
                instance_id: Uuid::from_u128(11),
                name: "VTS Warnings".to_string(),
                status: Some("released".to_string()),
                description: None,
                data_product_type: Some(DataProductType::S124),
                organization_id: Some("urn:mrn:org:example".to_string()),
                endpoint_uri: "https://secom.example/api".to_string(),
            }],
        };

        let json = serde_json::to_string(&response).unwrap();
        let back: SearchResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
