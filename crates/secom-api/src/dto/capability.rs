//! Capability discovery DTOs.

use serde::{Deserialize, Serialize};

use secom_core::{ContainerType, DataProductType};

/// Response of the capability operation: what this endpoint implements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityResponse {
    pub capability: Vec<CapabilityObject>,
}

/// One advertised capability: a data product the endpoint serves and the
/// interfaces available for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityObject {
    pub container_type: ContainerType,
    pub data_product_type: DataProductType,

    /// Product specification version served.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_version: Option<String>,

    /// Location of the product schema, when published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_schema_url: Option<String>,

    pub implemented_interfaces: ImplementedInterfaces,

    /// Version of this service implementation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,
}

/// Which protocol interfaces the endpoint implements for a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementedInterfaces {
    pub upload: bool,
    pub upload_link: bool,
    pub get: bool,
    pub get_summary: bool,
    pub get_by_link: bool,
    pub subscription: bool,
    pub access: bool,
    pub encryption_key: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let response = CapabilityResponse {
            capability: vec![CapabilityObject {
                container_type: ContainerType::S100DataSet,
                data_product_type: DataProductType::S101,
                product_version: Some("1.1.0".to_string()),
                product_schema_url: None,
                implemented_interfaces: ImplementedInterfaces {
                    upload: true,
                    get: true,
                    ..Default::default()
                },
                service_version: Some("0.1.0".to_string()),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        let entry = &json["capability"][0];
        assert_eq!(entry["containerType"], 0);
        assert_eq!(entry["dataProductType"], "S101");
        assert_eq!(entry["implementedInterfaces"]["upload"], true);
        assert_eq!(entry["implementedInterfaces"]["uploadLink"], false);
        assert!(entry.get("productSchemaUrl").is_none());
    }
}
