use crate::CommandAppend;
use clap::{App, Arg, ArgMatches};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8001";
pub(crate) const KUBELESS_SERVER_ENVIRONMENT: &str = "KUBELESS_SERVER";
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

pub(crate) struct Kubeless;

impl CommandAppend for Kubeless {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        app.arg(
            Arg::with_name("server")
                .long("server")
                .short("s")
                .default_value(DEFAULT_SERVER)
                .takes_value(true)
                .global(true)
                .help("API server URL starting with http(s)://, e.g. the address of `kubectl proxy`"),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .possible_values(&LOG_LEVELS)
                .default_value("off")
                .takes_value(true)
                .global(true)
                .help("Log level written to stderr, RUST_LOG is used when off"),
        )
    }
}

/// installs the stderr subscriber, a second call is a no-op
pub(crate) fn init_logging(level: &str) {
    let filter = match (level, std::env::var(EnvFilter::DEFAULT_ENV)) {
        ("off", Ok(directives)) => EnvFilter::new(directives),
        (level, _) => EnvFilter::new(level),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// the matches of the command and of every sub command used, outermost first
pub(crate) fn matches_chain<'a>(args: &'a ArgMatches<'a>) -> Vec<&'a ArgMatches<'a>> {
    let mut chain = vec![args];
    let mut current = args;
    while let (_, Some(sub)) = current.subcommand() {
        chain.push(sub);
        current = sub;
    }
    chain
}

/// value of a global flag from the innermost matches that set it, the default otherwise
pub(crate) fn global_value<'a>(chain: &[&'a ArgMatches<'a>], name: &str) -> Option<&'a str> {
    chain
        .iter()
        .rev()
        .find(|m| m.occurrences_of(name) > 0)
        .or_else(|| chain.first())
        .copied()
        .and_then(|m| m.value_of(name))
}
