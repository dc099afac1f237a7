use anyhow::Result;

use faces_core::content::{ContentClient, ContentSource};
use faces_core::feed::group_pairs;
use faces_core::AppConfig;

pub async fn run(config: &AppConfig, directory: Option<&str>) -> Result<()> {
    let directory = directory.unwrap_or(&config.api.gallery_directory);
    let layout = config.gallery.layout()?;
    let client = ContentClient::new(config)?;

    let feed = client.feed(directory).await?;

    if feed.is_empty() {
        println!("Directory '{}' has no items.", directory);
        return Ok(());
    }

    let title = if feed.title.is_empty() { directory } else { feed.title.as_str() };
    println!("{} ({} items):", title, feed.len());
    println!(
        "  groups of {}, item {} of each group is linked (*)\n",
        layout.width(),
        layout.anchor() + 1
    );

    for (index, item) in feed.items.iter().enumerate() {
        let marker = if layout.is_anchor(index) { "*" } else { " " };
        let slug = if item.slug.is_empty() { "(no slug)" } else { item.slug.as_str() };
        println!("  {} {:>3}  {}  {}", marker, index, slug, item.title);
    }

    println!("\nGrid:");
    for (row, pair) in group_pairs(&feed.items).iter().enumerate() {
        let second = pair.second.map(|item| item.slug.as_str()).unwrap_or("-");
        println!("  {:>3}  {} | {}  -> {}", row, pair.first.slug, second, pair.anchor().slug);
    }

    Ok(())
}
