pub mod crawl;
pub mod request;
pub mod session;

pub use crawl::{CrawlOptions, execute_crawl, execute_search, extract_url_path, generate_crawl_report};
pub use request::{CrawlRequest, CrawlResponse};
pub use session::SessionRegistry;

use colored::Colorize;

/// Print the startup banner.
pub fn print_banner() {
    let banner = r#"
     _ _
  __(_) |_ ___ __ _ _ _ ___ _ __
 (_-< |  _/ -_) _` | '_/ -_) '_ \
 /__/_|\__\___\__, |_| \___| .__/
              |___/        |_|
"#;
    println!("{}", banner.bright_cyan());
    println!(
        "{}",
        "  breadth-first site crawler & keyword search\n".bright_white()
    );
}
