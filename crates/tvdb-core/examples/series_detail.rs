use tvdb_core::Tvdb;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let term = std::env::args().nth(1).unwrap_or_else(|| "Scrubs".to_string());

    let mut tvdb = Tvdb::builder().build()?;

    println!("Searching for '{}'...\n", term);
    let results = tvdb.search(&term).await?;

    let Some(series) = results.first() else {
        println!("No results.");
        return Ok(());
    };

    println!(
        "Fetching detail for: {} (ID: {})\n",
        series.name().unwrap_or("?"),
        series.id().map(|id| id.to_string()).unwrap_or_else(|| "?".to_string())
    );
    let full = series.fetch().await?;

    println!("Name: {}", full.name().unwrap_or("?"));
    println!("Genres: {}", full.genres().join(", "));
    if let Some(overview) = full.attribute("Overview") {
        println!("Overview: {}", overview);
    }

    println!("\nEpisodes ({}):", full.episodes().len());
    for episode in full.episodes() {
        println!(
            "  S{:02}E{:02} {}",
            episode.season_number().unwrap_or(0),
            episode.episode_number().unwrap_or(0),
            episode.name().unwrap_or("?")
        );
    }

    println!("\nCast ({}):", full.actors().len());
    for actor in full.actors() {
        println!(
            "  {} as {}",
            actor.name().unwrap_or("?"),
            actor.role().unwrap_or("?")
        );
    }

    println!("\nBanners ({}):", full.banners().len());
    for banner in full.banners().iter().take(5) {
        if let Some(url) = banner.banner_url(series.mirrors()) {
            println!("  [{}] {}", banner.banner_type().unwrap_or("?"), url);
        }
    }

    Ok(())
}
