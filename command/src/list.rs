use crate::error::check_tls_insecure;
use crate::kubeless::{global_value, DEFAULT_SERVER, KUBELESS_SERVER_ENVIRONMENT};
use crate::list_format::{render, OutputFormat, OUTPUT_FORMATS, TABLE_FORMAT};
use crate::priority::{get_namespace, get_server_url};
use crate::{State, SubCommandAppend};
use clap::{App, Arg, ArgMatches, SubCommand};
use config::config_file::ConfigFile;
use proxy::client::Client;
use proxy::utils::functions_path;
use proxy::FunctionClient;
use schema::FunctionList;
use std::io::Write;
use utility::{Error, Result};

pub(crate) struct List;

impl SubCommandAppend for List {
    #[inline(always)]
    fn append_subcommand() -> App<'static, 'static> {
        SubCommand::with_name("list")
            .alias("ls")
            .about(
                r#"List deployed functions of a namespace
  Example: `kubeless function list
  kubeless function list get-python --namespace myns --output wide`"#,
            )
            .arg(
                Arg::with_name("names")
                    .multiple(true)
                    .help("Names of the functions to show, all functions when omitted"),
            )
            .arg(
                Arg::with_name("namespace")
                    .long("namespace")
                    .short("n")
                    .takes_value(true)
                    .help("Namespace of the functions"),
            )
            .arg(
                Arg::with_name("output")
                    .long("output")
                    .short("o")
                    .takes_value(true)
                    .possible_values(&OUTPUT_FORMATS)
                    .default_value(TABLE_FORMAT)
                    .help("Output format"),
            )
    }
}

impl List {
    ///parents holds the matches of the enclosing commands, outermost first
    #[inline(always)]
    pub(crate) async fn dispatch_command<'a>(parents: &[&'a ArgMatches<'a>]) -> crate::Result {
        let args = match parents.last() {
            Some(args) => *args,
            None => return Ok(()),
        };
        if let Some(largs) = args.subcommand_matches("list") {
            let mut chain = parents.to_vec();
            chain.push(largs);
            let server = global_value(&chain, "server").unwrap_or(DEFAULT_SERVER);
            let names: Vec<&str> = largs
                .values_of("names")
                .map(|values| values.collect())
                .unwrap_or_default();
            let format: OutputFormat = largs.value_of("output").unwrap_or(TABLE_FORMAT).parse()?;

            let config = ConfigFile::load()?;
            let env_url = std::env::var(KUBELESS_SERVER_ENVIRONMENT).unwrap_or_default();
            let server_address = get_server_url(
                server,
                DEFAULT_SERVER,
                config.server.as_str(),
                env_url.as_str(),
            );
            let namespace = get_namespace(
                largs.value_of("namespace").unwrap_or(""),
                config.namespace.as_str(),
            );

            let msg = check_tls_insecure(server_address.as_str());
            if !msg.is_empty() {
                tracing::warn!("{}", msg);
            }

            let client = Client::new(server_address.as_str())?;
            do_list(&mut std::io::stdout(), &client, namespace.as_str(), format, &names).await?;

            //return error in match to easy use ? to check next subcommand
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

/// fetch_functions reads the whole namespace when names is empty, otherwise each name in turn.
///
/// The first failing request aborts the fetch, no partial list is returned.
pub async fn fetch_functions<C>(client: &C, namespace: &str, names: &[&str]) -> Result<FunctionList>
where
    C: FunctionClient + ?Sized,
{
    if names.is_empty() {
        tracing::debug!("listing functions of namespace {}", namespace);
        let mut list = client.list_functions(namespace).await?;
        for function in list.items.iter_mut() {
            let metadata = &mut function.metadata;
            if metadata.namespace.is_empty() {
                tracing::warn!(
                    "function {} has no namespace, assuming {}",
                    metadata.name,
                    namespace
                );
                metadata.namespace = namespace.to_string();
            } else if metadata.namespace != namespace {
                return Err(Error::Decode {
                    url: format!("/{}", functions_path(namespace).join("/")),
                    reason: format!(
                        "function {} belongs to namespace {}",
                        metadata.name, metadata.namespace
                    ),
                });
            }
        }
        return Ok(list);
    }

    let mut items = Vec::with_capacity(names.len());
    for name in names {
        tracing::debug!("getting function {} of namespace {}", name, namespace);
        items.push(client.get_function(namespace, name).await?);
    }
    Ok(FunctionList::new(items))
}

/// do_list fetches the functions and writes them to out in the requested format
pub async fn do_list<W, C>(
    out: &mut W,
    client: &C,
    namespace: &str,
    format: OutputFormat,
    names: &[&str],
) -> Result<()>
where
    W: Write,
    C: FunctionClient + ?Sized,
{
    let list = fetch_functions(client, namespace, names).await?;
    let text = render(&list, format)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
