use crate::function::Function;
use crate::kubeless::Kubeless;
use crate::{CommandAppend, State};
use clap::{App, AppSettings, ArgMatches};
use utility::{Error, Result};

const WELCOME_MSG: &str = "Inspect serverless functions running on Kubernetes from the command line";

pub fn build_cli() -> App<'static, 'static> {
    let app = App::new("kubeless")
        .version(env!("CARGO_PKG_VERSION"))
        .setting(AppSettings::VersionlessSubcommands)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::DeriveDisplayOrder)
        .global_settings(&[AppSettings::ColoredHelp])
        .about(WELCOME_MSG);

    let app = Kubeless::append_subcommand(app);
    let app = Function::append_subcommand(app);
    app
}

pub async fn run<'a>(args: &'a ArgMatches<'a>) -> Result<()> {
    match dispatch_command(args).await {
        Ok(_) => Err(Error::Custom(
            "command not matched please contact the development team".to_string(),
        )),
        Err(s) => match s {
            State::Matched => Ok(()),
            State::Error(e) => Err(e),
            state => Err(Error::Custom(state.to_string())),
        },
    }
}

pub async fn dispatch_command<'a>(args: &'a ArgMatches<'a>) -> crate::Result {
    Function::dispatch_command(args).await
}

#[cfg(test)]
mod tests {
    use super::build_cli;
    use crate::kubeless::{global_value, matches_chain, DEFAULT_SERVER};

    #[test]
    fn test_parse_list_args() {
        let args = build_cli()
            .get_matches_from_safe(vec![
                "kubeless", "function", "list", "foo", "bar", "-n", "myns", "-o", "wide",
            ])
            .unwrap();
        let fargs = args.subcommand_matches("function").unwrap();
        let largs = fargs.subcommand_matches("list").unwrap();

        let names: Vec<&str> = largs.values_of("names").unwrap().collect();
        assert_eq!(names, vec!["foo", "bar"]);
        assert_eq!(largs.value_of("namespace"), Some("myns"));
        assert_eq!(largs.value_of("output"), Some("wide"));

        let chain = matches_chain(&args);
        assert_eq!(chain.len(), 3);
        assert_eq!(global_value(&chain, "server"), Some(DEFAULT_SERVER));
        assert_eq!(global_value(&chain, "log-level"), Some("off"));
    }

    #[test]
    fn test_parse_list_defaults() {
        let args = build_cli()
            .get_matches_from_safe(vec!["kubeless", "--server", "http://10.0.0.1:8001", "function", "ls"])
            .unwrap();
        let largs = args
            .subcommand_matches("function")
            .and_then(|f| f.subcommand_matches("list"))
            .unwrap();

        assert!(largs.values_of("names").is_none());
        assert_eq!(largs.value_of("namespace"), None);
        assert_eq!(largs.value_of("output"), Some("table"));

        let chain = matches_chain(&args);
        assert_eq!(global_value(&chain, "server"), Some("http://10.0.0.1:8001"));
    }

    #[test]
    fn test_global_flag_after_sub_command() {
        let args = build_cli()
            .get_matches_from_safe(vec!["kubeless", "function", "list", "--log-level", "debug"])
            .unwrap();
        let chain = matches_chain(&args);
        assert_eq!(global_value(&chain, "log-level"), Some("debug"));
        assert_eq!(global_value(&chain, "server"), Some(DEFAULT_SERVER));
    }

    #[test]
    fn test_reject_unknown_output() {
        let res = build_cli().get_matches_from_safe(vec!["kubeless", "function", "list", "-o", "xml"]);
        assert!(res.is_err());
    }
}
