use clap::{arg, command};

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitegrep")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitegrep")
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("crawl")
                .about(
                    "Breadth-first crawl of a site, bounded by depth and width. Stays on the \
                seed's domain and its subdomains.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The seed URL (http:// is assumed when no scheme is given)"),
                )
                .arg(
                    arg!(-k --"keyword" <WORD>)
                        .required(false)
                        .help("Only report pages whose rendered text contains this word"),
                )
                .arg(depth_arg())
                .arg(width_arg())
                .arg(timeout_arg())
                .arg(json_arg()),
        )
        .subcommand(
            command!("search")
                .about("Crawl a site and report pages whose rendered text contains a keyword")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The seed URL (http:// is assumed when no scheme is given)"),
                )
                .arg(
                    arg!(-k --"keyword" <WORD>)
                        .required(true)
                        .help("The keyword to search for (case-insensitive)"),
                )
                .arg(depth_arg())
                .arg(width_arg())
                .arg(timeout_arg())
                .arg(json_arg()),
        )
}

fn depth_arg() -> clap::Arg {
    arg!(-d --"depth" <N>)
        .required(false)
        .help("Maximum link-hops from the seed")
        .value_parser(clap::value_parser!(usize))
        .default_value("3")
}

fn width_arg() -> clap::Arg {
    arg!(-w --"width" <N>)
        .required(false)
        .help("Maximum children admitted per page")
        .value_parser(clap::value_parser!(usize))
        .default_value("5")
}

fn timeout_arg() -> clap::Arg {
    arg!(-t --"timeout" <SECS>)
        .required(false)
        .help("Per-request timeout in seconds")
        .value_parser(clap::value_parser!(u64))
        .default_value("5")
}

fn json_arg() -> clap::Arg {
    arg!(--"json" "Emit the full response as JSON instead of a report").required(false)
}
