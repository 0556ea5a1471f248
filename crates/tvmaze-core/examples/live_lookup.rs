use tracing_subscriber::EnvFilter;
use tvmaze_core::TvMazeLookup;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let term = std::env::args().nth(1).unwrap_or_else(|| "Girls".to_string());
    let lookup = TvMazeLookup::new()?;

    println!("Searching for '{}'...\n", term);
    let shows = lookup.search_shows(&term).await?;

    println!("Found {} shows:", shows.len());
    for (i, show) in shows.iter().enumerate() {
        println!("  {}. {} (ID: {})", i + 1, show.name, show.id);
        println!("     image: {}", show.image);
    }

    let Some(show) = shows.first() else {
        return Ok(());
    };

    println!("\nEpisodes of {} (ID: {}):\n", show.name, show.id);
    let episodes = lookup.get_episodes(&show.id.to_string()).await?;
    for ep in &episodes {
        println!("  S{:02}E{:02} {}", ep.season, ep.number, ep.name);
    }
    println!("\n{} episodes in total.", episodes.len());

    Ok(())
}
