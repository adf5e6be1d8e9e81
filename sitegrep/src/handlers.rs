use clap::ArgMatches;
use colored::Colorize;
use sitegrep_core::{
    CrawlOptions, CrawlRequest, CrawlResponse, SessionRegistry, execute_crawl, execute_search,
    generate_crawl_report,
};
use sitegrep_engine::EngineError;
use tracing::debug;

/// Build a crawl request from parsed CLI arguments, falling back to the
/// documented defaults for anything not given.
pub fn request_from_args(args: &ArgMatches) -> CrawlRequest {
    let mut request =
        CrawlRequest::new(args.get_one::<String>("url").cloned().unwrap_or_default());
    if let Some(keyword) = args.get_one::<String>("keyword") {
        request.keyword = keyword.clone();
    }
    if let Some(depth) = args.get_one::<usize>("depth") {
        request.depth_limit = *depth;
    }
    if let Some(width) = args.get_one::<usize>("width") {
        request.width_limit = *width;
    }
    if let Some(timeout) = args.get_one::<u64>("timeout") {
        request.timeout = *timeout;
    }
    request
}

pub async fn handle_crawl(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let request = request_from_args(sub_matches);
    let json = sub_matches.get_flag("json");
    debug!("crawl request: {:?}", request);

    if !json {
        println!("\n🕷  Crawling {}", request.seed_url.bright_white());
        println!("Max depth: {}", request.depth_limit);
        println!("Max width: {}", request.width_limit);
        if !request.keyword.is_empty() {
            println!("Keyword: {}", request.keyword);
        }
        println!();
    }

    let registry = SessionRegistry::new();
    let options = CrawlOptions {
        request: request.clone(),
        show_progress_bar: !json,
    };

    match execute_crawl(options, &registry).await {
        Ok((_, response)) => print_response(&response, json),
        Err(err) => print_failure(request, err, json),
    }
}

pub async fn handle_search(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let request = request_from_args(sub_matches);
    let json = sub_matches.get_flag("json");
    debug!("search request: {:?}", request);

    if !json {
        println!(
            "\n🔍 Searching {} for {}",
            request.seed_url.bright_white(),
            format!("\"{}\"", request.keyword).bright_cyan()
        );
        println!(
            "Max depth: {}, max width: {}, timeout: {}s\n",
            request.depth_limit, request.width_limit, request.timeout
        );
    }

    let registry = SessionRegistry::new();
    let options = CrawlOptions {
        request: request.clone(),
        show_progress_bar: !json,
    };

    match execute_search(options, &registry).await {
        Ok((_, response)) => print_response(&response, json),
        Err(err) => print_failure(request, err, json),
    }
}

fn print_response(response: &CrawlResponse, json: bool) {
    if json {
        match response.to_json() {
            Ok(body) => println!("{body}"),
            Err(err) => {
                eprintln!("✗ Failed to encode response: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!();
    let report = generate_crawl_report(&response.results);
    print!("{report}");
    println!(
        "{} {} page(s) reported",
        "✓".green().bold(),
        response.count.to_string().bright_white()
    );
}

fn print_failure(request: CrawlRequest, err: EngineError, json: bool) {
    match &err {
        // Validation failures produce an empty result set plus a notice,
        // not a hard failure.
        EngineError::Validation(notice) => {
            let response = CrawlResponse::error(request, notice.clone());
            if json {
                println!("{}", response.to_json().unwrap_or_default());
            } else {
                eprintln!("{} {}", "✗".red().bold(), notice);
                println!("0 page(s) reported");
            }
        }
        EngineError::InvalidSeed(_) => {
            eprintln!("{} {}", "✗".red().bold(), err);
            std::process::exit(1);
        }
    }
}
