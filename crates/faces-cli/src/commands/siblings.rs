use anyhow::Result;

use faces_core::content::{ContentClient, ContentSource};
use faces_core::feed::resolve_siblings;
use faces_core::AppConfig;

pub async fn run(config: &AppConfig, directory: Option<&str>, slug: &str) -> Result<()> {
    let directory = directory.unwrap_or(&config.api.gallery_directory);
    let layout = config.gallery.layout()?;
    let client = ContentClient::new(config)?;

    let feed = client.feed(directory).await?;
    let siblings = resolve_siblings(&feed, slug, layout)?;

    let or_none = |slug: &str| if slug.is_empty() { "(none)".to_string() } else { slug.to_string() };

    println!("{} [{}] {}", siblings.item.slug, siblings.index, siblings.item.title);
    println!("  previous: {}", or_none(&siblings.previous_slug));
    println!("  next:     {}", or_none(&siblings.next_slug));
    if !layout.is_anchor(siblings.index) {
        println!("  (not a grid anchor, the site does not link neighbours from it)");
    }

    Ok(())
}
