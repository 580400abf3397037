use crate::list::List;
use crate::{CommandAppend, State, SubCommandAppend};
use clap::{App, ArgMatches, SubCommand};

pub(crate) struct Function;

impl CommandAppend for Function {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        app.subcommand(
            SubCommand::with_name("function")
                .about("Inspect functions deployed on a cluster")
                .subcommand(List::append_subcommand()),
        )
    }
}

impl Function {
    #[inline(always)]
    pub(crate) async fn dispatch_command<'a>(args: &'a ArgMatches<'a>) -> crate::Result {
        if let Some(f_args) = args.subcommand_matches("function") {
            List::dispatch_command(&[args, f_args]).await?;

            Err(State::Custom(format!(
                "function command must be followed by a sub command\n\
                {}\n\
                for example: kubeless function list --namespace default",
                f_args.usage()
            )))
        } else {
            Ok(())
        }
    }
}
