use async_trait::async_trait;
use schema::{Function, FunctionList};
use utility::Result;

pub mod client;
pub mod functions;
pub mod utils;

///FunctionClient read access to the function resources of a cluster.
///
/// `Client` talks to a real API server; tests can implement it over an in-memory list.
#[async_trait]
pub trait FunctionClient {
    ///all functions of the namespace, in the order the server returns them
    async fn list_functions(&self, namespace: &str) -> Result<FunctionList>;
    ///a single function, `Error::NotFound` when it doesn't exist
    async fn get_function(&self, namespace: &str, name: &str) -> Result<Function>;
}
