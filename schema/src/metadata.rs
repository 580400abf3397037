use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///ObjectMeta identity of an API object, the name is unique within its namespace
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String, //`json:"name,omitempty"`
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub namespace: String, //`json:"namespace,omitempty"`
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub labels: BTreeMap<String, String>, //`json:"labels,omitempty"`
    #[serde(rename = "resourceVersion")]
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub resource_version: String, //`json:"resourceVersion,omitempty"`
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub uid: String, //`json:"uid,omitempty"`
    //rfc3339
    #[serde(rename = "creationTimestamp")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>, //`json:"creationTimestamp,omitempty"`
}

///ListMeta metadata of a collection response
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ListMeta {
    #[serde(rename = "resourceVersion")]
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub resource_version: String, //`json:"resourceVersion,omitempty"`
}

///TemplateMeta the metadata a pod template carries
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct TemplateMeta {
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub labels: BTreeMap<String, String>, //`json:"labels,omitempty"`
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub annotations: BTreeMap<String, String>, //`json:"annotations,omitempty"`
}
