///group and version the function resource is served under
pub const API_PATH: [&str; 3] = ["apis", "k8s.io", "v1"];
pub const NAMESPACES: &str = "namespaces";
pub const FUNCTIONS: &str = "functions";

///path segments of the function collection of a namespace
pub fn functions_path(namespace: &str) -> Vec<&str> {
    let mut path = API_PATH.to_vec();
    path.extend_from_slice(&[NAMESPACES, namespace, FUNCTIONS]);
    path
}

///path segments of a single function
pub fn function_path<'a>(namespace: &'a str, name: &'a str) -> Vec<&'a str> {
    let mut path = functions_path(namespace);
    path.push(name);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_paths() {
        assert_eq!(
            functions_path("myns").join("/"),
            "apis/k8s.io/v1/namespaces/myns/functions"
        );
        assert_eq!(
            function_path("myns", "foo").join("/"),
            "apis/k8s.io/v1/namespaces/myns/functions/foo"
        );
    }
}
