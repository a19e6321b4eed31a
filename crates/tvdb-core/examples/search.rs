use tvdb_core::Tvdb;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let term = std::env::args().nth(1).unwrap_or_else(|| "Scrubs".to_string());

    // API key comes from ~/.tvdb
    let mut tvdb = Tvdb::builder().build()?;

    println!("Searching for '{}'...\n", term);
    let results = tvdb.search(&term).await?;

    println!("Found {} results:", results.len());
    for (i, series) in results.iter().enumerate() {
        println!(
            "  {}. {} (ID: {})",
            i + 1,
            series.name().unwrap_or("?"),
            series.id().map(|id| id.to_string()).unwrap_or_else(|| "?".to_string())
        );
        if let Some(overview) = series.overview() {
            let short: String = overview.chars().take(120).collect();
            println!("     {}", short);
        }
    }

    Ok(())
}
