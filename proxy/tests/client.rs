use proxy::client::*;

#[test]
fn test_new_client() {
    struct TestCase {
        _name: &'static str,
        input: &'static str,
        output: &'static str,
    }

    let cases = vec![
        TestCase {
            _name: "Without trailing slash",
            input: "http://127.0.0.1:8001",
            output: "http://127.0.0.1:8001/",
        },
        TestCase {
            _name: "With trailing slash",
            input: "http://127.0.0.1:8001/",
            output: "http://127.0.0.1:8001/",
        },
        TestCase {
            _name: "With base path",
            input: "https://cluster.example.com/k8s/",
            output: "https://cluster.example.com/k8s",
        },
    ];

    for test in cases {
        let res = Client::new(test.input);
        assert!(res.is_ok());
        let client = res.unwrap();
        let url = client.server.to_string();
        assert_eq!(test.output, url);
    }
}

#[test]
fn test_new_client_errors() {
    let res = Client::new("bad gateway");
    assert!(res.is_err());
    assert!(format!("{:?}", res.err()).contains("RelativeUrlWithoutBase"));

    let res = Client::new("mailto:admin@example.com");
    assert!(res.is_err());
    assert!(format!("{}", res.err().unwrap()).contains("can't be used as a base URL"));
}

#[test]
fn test_new_request_url() {
    let mut client = Client::new("http://127.0.0.1:8001/base/path").unwrap();
    client.user_agent = Some("kubeless-test".into());

    let req = client
        .new_request(reqwest::Method::GET, &["namespaces", "myns", "functions"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        req.url().as_str(),
        "http://127.0.0.1:8001/base/path/namespaces/myns/functions"
    );
    assert_eq!(req.headers()[reqwest::header::ACCEPT], "application/json");
    assert_eq!(req.headers()[reqwest::header::USER_AGENT], "kubeless-test");
}

#[test]
fn test_default_user_agent() {
    let client = Client::new("http://127.0.0.1:8001").unwrap();
    let agent = client.user_agent.clone().unwrap();
    assert!(agent.starts_with("kubeless/"));

    let req = client
        .new_request(reqwest::Method::GET, &["namespaces"])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(req.headers()[reqwest::header::USER_AGENT], agent.as_str());
}
