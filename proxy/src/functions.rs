use crate::client::{decode_response, Client};
use crate::utils::{function_path, functions_path};
use crate::FunctionClient;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use schema::{Function, FunctionList};
use utility::{Error, Result};

#[async_trait]
impl FunctionClient for Client {
    async fn list_functions(&self, namespace: &str) -> Result<FunctionList> {
        let req = self
            .new_request(Method::GET, &functions_path(namespace))?
            .build()?;
        let res = self.do_request(req).await?;
        decode_response(res).await
    }

    async fn get_function(&self, namespace: &str, name: &str) -> Result<Function> {
        let req = self
            .new_request(Method::GET, &function_path(namespace, name))?
            .build()?;
        let res = self.do_request(req).await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            });
        }
        decode_response(res).await
    }
}
