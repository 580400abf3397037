/// NOT_TLS_WARN Warning thrown when no SSL/TLS is used
pub(crate) const NOT_TLS_WARN: &str =
    "WARNING! You are not using an encrypted connection to the API server, consider using HTTPS.";

/// check_tls_insecure returns a warning message if the given server does not have https
/// and is not the local proxy
pub(crate) fn check_tls_insecure(server: &str) -> String {
    let mut res = String::new();
    if !server.starts_with("https")
        && !server.starts_with("http://127.0.0.1")
        && !server.starts_with("http://localhost")
    {
        res = NOT_TLS_WARN.to_string();
    }
    res
}

#[cfg(test)]
mod tests {
    use crate::error::check_tls_insecure;

    #[test]
    fn test_check_tls_insecure() {
        struct TestCase {
            _name: &'static str,
            server: &'static str,
            want: &'static str,
        }
        let tests = vec![
            TestCase {
                _name: "HTTPS server",
                server: "https://192.168.0.101:6443",
                want: "",
            },
            TestCase {
                _name: "HTTP server",
                server: "http://192.168.0.101:8001",
                want: "WARNING! You are not using an encrypted connection to the API server, consider using HTTPS.",
            },
            TestCase {
                _name: "HTTP server on 127.0.0.1",
                server: "http://127.0.0.1:8001",
                want: "",
            },
            TestCase {
                _name: "HTTP server on localhost",
                server: "http://localhost:8001",
                want: "",
            },
        ];

        for case in tests {
            let got = check_tls_insecure(case.server);
            assert_eq!(got, case.want, "{}", case._name);
        }
    }
}
