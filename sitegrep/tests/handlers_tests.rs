use clap::ArgMatches;
use sitegrep::commands::command_argument_builder;
use sitegrep::handlers::request_from_args;

fn subcommand_matches(argv: &[&str]) -> ArgMatches {
    let matches = command_argument_builder()
        .try_get_matches_from(argv.iter().copied())
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    sub.clone()
}

#[test]
fn test_crawl_request_defaults() {
    let sub = subcommand_matches(&["sitegrep", "crawl", "-u", "upi.edu"]);
    let request = request_from_args(&sub);

    assert_eq!(request.seed_url, "upi.edu");
    assert_eq!(request.depth_limit, 3);
    assert_eq!(request.width_limit, 5);
    assert_eq!(request.timeout, 5);
    assert!(request.keyword.is_empty());
}

#[test]
fn test_crawl_request_overrides() {
    let sub = subcommand_matches(&[
        "sitegrep", "crawl", "-u", "http://upi.edu", "-d", "2", "-w", "4", "-t", "10", "-k",
        "beasiswa",
    ]);
    let request = request_from_args(&sub);

    assert_eq!(request.seed_url, "http://upi.edu");
    assert_eq!(request.depth_limit, 2);
    assert_eq!(request.width_limit, 4);
    assert_eq!(request.timeout, 10);
    assert_eq!(request.keyword, "beasiswa");
}

#[test]
fn test_schemeless_seed_is_normalized_later() {
    let sub = subcommand_matches(&["sitegrep", "crawl", "-u", "upi.edu"]);
    let request = request_from_args(&sub);

    assert_eq!(request.normalized_seed().as_deref(), Some("http://upi.edu"));
}

#[test]
fn test_search_requires_keyword() {
    let result =
        command_argument_builder().try_get_matches_from(["sitegrep", "search", "-u", "upi.edu"]);
    assert!(result.is_err());
}

#[test]
fn test_search_requires_url() {
    let result =
        command_argument_builder().try_get_matches_from(["sitegrep", "search", "-k", "beasiswa"]);
    assert!(result.is_err());
}

#[test]
fn test_json_flag_parses() {
    let sub = subcommand_matches(&[
        "sitegrep", "search", "-u", "upi.edu", "-k", "beasiswa", "--json",
    ]);
    assert!(sub.get_flag("json"));
}
