use crate::metadata::{ListMeta, ObjectMeta, TemplateMeta};
use crate::quantity::Quantity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const API_VERSION: &str = "k8s.io/v1";
pub const FUNCTION_KIND: &str = "Function";
pub const FUNCTION_LIST_KIND: &str = "FunctionList";
///resource kind of the memory quantity in limits and requests
pub const RESOURCE_MEMORY: &str = "memory";

///Function a deployable unit: handler, runtime, trigger, dependencies and pod template
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Function {
    #[serde(rename = "apiVersion")]
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub api_version: String, //`json:"apiVersion"`
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub kind: String, //`json:"kind"`
    #[serde(default)]
    pub metadata: ObjectMeta, //`json:"metadata"`
    #[serde(default)]
    pub spec: FunctionSpec, //`json:"spec"`
}

///FunctionList ordered collection of functions as returned by the API server
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct FunctionList {
    #[serde(rename = "apiVersion")]
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub api_version: String, //`json:"apiVersion"`
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub kind: String, //`json:"kind"`
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub metadata: ListMeta, //`json:"metadata"`
    #[serde(default)]
    pub items: Vec<Function>, //`json:"items"`
}

///FunctionSpec describes how a function is built and triggered
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct FunctionSpec {
    ///Handler file and entry point, e.g. `hello.handler`
    #[serde(default)]
    pub handler: String, //`json:"handler"`
    ///Function source of the function
    #[serde(default)]
    pub function: String, //`json:"function"`
    #[serde(default)]
    pub runtime: String, //`json:"runtime"`
    ///Type trigger type, e.g. HTTP, PubSub or Scheduled
    #[serde(rename = "type")]
    #[serde(default)]
    pub trigger_type: String, //`json:"type"`
    #[serde(default)]
    pub topic: String, //`json:"topic"`
    ///Deps dependency descriptor, usually the content of a requirements file
    #[serde(default)]
    pub deps: String, //`json:"deps"`
    ///cron expression of scheduled functions
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>, //`json:"schedule,omitempty"`
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>, //`json:"timeout,omitempty"`
    #[serde(default)]
    pub template: PodTemplateSpec, //`json:"template"`
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct PodTemplateSpec {
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub metadata: TemplateMeta, //`json:"metadata,omitempty"`
    #[serde(default)]
    pub spec: PodSpec, //`json:"spec"`
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct PodSpec {
    #[serde(default)]
    pub containers: Vec<Container>, //`json:"containers"`
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Container {
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub name: String, //`json:"name,omitempty"`
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub image: String, //`json:"image,omitempty"`
    ///Env keeps the order it was declared in, names may repeat
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub env: Vec<EnvVar>, //`json:"env,omitempty"`
    #[serde(default)]
    pub resources: ResourceRequirements, //`json:"resources"`
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct EnvVar {
    pub name: String, //`json:"name"`
    #[serde(default)]
    pub value: String, //`json:"value,omitempty"`
}

///ResourceRequirements limits and requests keyed by resource kind (memory, cpu ...)
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ResourceRequirements {
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub limits: BTreeMap<String, Quantity>, //`json:"limits,omitempty"`
    #[serde(default)]
    #[serde(skip_serializing_if = "utility::is_default")]
    pub requests: BTreeMap<String, Quantity>, //`json:"requests,omitempty"`
}

impl Function {
    pub fn new(namespace: &str, name: &str, spec: FunctionSpec) -> Function {
        Function {
            api_version: API_VERSION.into(),
            kind: FUNCTION_KIND.into(),
            metadata: ObjectMeta {
                name: name.into(),
                namespace: namespace.into(),
                ..Default::default()
            },
            spec,
        }
    }

    ///first container of the pod template, the one the runtime image runs in
    pub fn first_container(&self) -> Option<&Container> {
        self.spec.template.spec.containers.first()
    }
}

impl FunctionList {
    pub fn new(items: Vec<Function>) -> FunctionList {
        FunctionList {
            api_version: API_VERSION.into(),
            kind: FUNCTION_LIST_KIND.into(),
            metadata: Default::default(),
            items,
        }
    }
}

impl Container {
    ///memory limit, or the memory request when no limit is set
    pub fn memory(&self) -> Option<&Quantity> {
        self.resources
            .limits
            .get(RESOURCE_MEMORY)
            .or_else(|| self.resources.requests.get(RESOURCE_MEMORY))
    }
}
