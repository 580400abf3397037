use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use utility::{Error, Result};

///an API client to read function resources from a Kubernetes style API server
pub struct Client {
    pub(crate) http_client: reqwest::Client,
    ///server base url of the API server, e.g. the address `kubectl proxy` listens on
    pub server: Url,
    ///user agent for the client
    pub user_agent: Option<String>,
}

impl Client {
    /// initializes a new API client
    pub fn new(server: &str) -> Result<Client> {
        let url = server.trim_end_matches('/');
        let url = Url::parse(url)?;
        if url.cannot_be_a_base() {
            return Err(Error::Custom(format!(
                "server URL {} can't be used as a base URL",
                server
            )));
        }

        Ok(Client {
            http_client: reqwest::Client::new(),
            server: url,
            user_agent: Some(format!("kubeless/{}", env!("CARGO_PKG_VERSION"))),
        })
    }

    ///builds the url of the given path segments below the server url, segments are escaped
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        // deep copy server url and then add the supplied segments to the copy so that
        // we preserve the original server url as much as possible
        let mut endpoint = self.server.clone();
        endpoint
            .path_segments_mut()
            .map_err(|_| Error::Custom(format!("server URL {} can't be a base", self.server)))?
            .pop_if_empty()
            .extend(segments);
        Ok(endpoint)
    }

    ///create a new HTTP request for the given path segments
    pub fn new_request(
        &self,
        method: reqwest::Method,
        segments: &[&str],
    ) -> Result<reqwest::RequestBuilder> {
        let endpoint = self.endpoint(segments)?;
        let mut req = self
            .http_client
            .request(method, endpoint)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(agent) = &self.user_agent {
            req = req.header(reqwest::header::USER_AGENT, agent.as_str());
        }
        Ok(req)
    }

    ///perform an HTTP request
    pub(crate) async fn do_request(&self, req: reqwest::Request) -> Result<reqwest::Response> {
        let url = req.url().to_string();
        tracing::debug!("{} {}", req.method(), url);
        let resp = self
            .http_client
            .execute(req)
            .await
            .map_err(|source| Error::Transport { url, source })?;
        tracing::debug!("{} returned {}", resp.url(), resp.status());
        Ok(resp)
    }
}

///reads the body of a successful response into `T`, any other status becomes an error
pub(crate) async fn decode_response<T: DeserializeOwned>(res: reqwest::Response) -> Result<T> {
    let url = res.url().to_string();
    let status = res.status();
    let body = res.text().await.map_err(|source| Error::Transport {
        url: url.clone(),
        source,
    })?;
    match status {
        StatusCode::OK => serde_json::from_str(body.as_str()).map_err(|e| Error::Decode {
            url,
            reason: e.to_string(),
        }),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Unauthorized(url)),
        status => Err(Error::UnexpectedStatus {
            status: status.as_u16(),
            body,
        }),
    }
}

#[test]
fn test_endpoint() {
    struct TestCase {
        _name: &'static str,
        server: &'static str,
        segments: Vec<&'static str>,
        expected_url: &'static str,
    }

    let cases = vec![
        TestCase {
            _name: "server without path",
            server: "http://127.0.0.1:8001",
            segments: vec!["apis", "k8s.io", "v1", "namespaces", "myns", "functions"],
            expected_url: "http://127.0.0.1:8001/apis/k8s.io/v1/namespaces/myns/functions",
        },
        TestCase {
            _name: "server with base path",
            server: "http://127.0.0.1:8001/proxy/",
            segments: vec!["namespaces", "myns"],
            expected_url: "http://127.0.0.1:8001/proxy/namespaces/myns",
        },
        TestCase {
            _name: "segment is escaped",
            server: "http://127.0.0.1:8001",
            segments: vec!["functions", "a/b c"],
            expected_url: "http://127.0.0.1:8001/functions/a%2Fb%20c",
        },
    ];

    for test in cases {
        let client = Client::new(test.server).unwrap();
        let url = client.endpoint(&test.segments).unwrap();
        assert_eq!(url.as_str(), test.expected_url, "{}", test._name);
    }
}
