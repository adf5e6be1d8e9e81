use sitegrep::commands::command_argument_builder;
use sitegrep::handlers;
use sitegrep_core::print_banner;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    match chosen_command.subcommand() {
        Some(("crawl", primary_command)) => handlers::handle_crawl(primary_command).await,
        Some(("search", primary_command)) => handlers::handle_search(primary_command).await,
        _ => unreachable!("clap should ensure we don't get here"),
    }
}
