use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Install => commands::install::handle(ctx, flags),
        Commands::List => commands::list::handle(ctx, flags),
        Commands::Print(args) => commands::print::handle(args, ctx, flags),
        Commands::Test(args) => commands::test::handle(args, ctx, flags),
    }
}
