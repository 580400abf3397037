pub(crate) const DEFAULT_NAMESPACE: &str = "default";

/// the server url from the first source that sets it:
/// the flag (unless it is the default), the config file, the environment, the default
pub(crate) fn get_server_url(
    argument_url: &str,
    default_url: &str,
    config_url: &str,
    environment_url: &str,
) -> String {
    let server_url = if !argument_url.is_empty() && argument_url != default_url {
        argument_url
    } else if !config_url.is_empty() && config_url != default_url {
        config_url
    } else if !environment_url.is_empty() {
        environment_url
    } else {
        default_url
    };

    let server_url = server_url.trim_end_matches('/');
    if server_url.starts_with("http://") || server_url.starts_with("https://") {
        server_url.to_string()
    } else {
        format!("http://{}", server_url)
    }
}

pub(crate) fn get_namespace(flag_namespace: &str, config_namespace: &str) -> String {
    // If the namespace flag is passed use it
    if !flag_namespace.is_empty() {
        flag_namespace.into()
    } else if !config_namespace.is_empty() {
        config_namespace.into()
    } else {
        DEFAULT_NAMESPACE.into()
    }
}
