//! Basic usage example for the Codeforces HTTP client
//!
//! Prints the accepted problems of a handle, grouped by rating.
//!
//! Run with: `cargo run -p cf-http-client --example basic_usage -- tourist`

use cf_http_client::CfClient;
use std::collections::BTreeMap;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let handle = std::env::args().nth(1).unwrap_or_else(|| "tourist".to_string());

    let client = CfClient::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    println!("Fetching accepted problems for {}...", handle);
    let problems = client.accepted_problems(&handle)?;

    let mut by_rating: BTreeMap<String, usize> = BTreeMap::new();
    for problem in &problems {
        *by_rating.entry(problem.rating_label()).or_default() += 1;
    }

    println!("{} distinct problems solved", problems.len());
    for (rating, count) in by_rating {
        println!("  {:>7}: {}", rating, count);
    }

    Ok(())
}
