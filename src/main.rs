use std::path::Path;

use clap::Parser;
use guide_search::cli::{Cli, Commands};
use guide_search::error::Result;
use guide_search::render::{self, RenderCache};
use guide_search::search::{FindOutcome, SearchIndex};
use guide_search::{loader, tracing as tracing_init};

fn main() -> Result<()> {
    tracing_init::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            query,
            data,
            min_token_length,
            json,
        } => search(&query, &data, min_token_length, json),
        Commands::Render {
            data,
            query,
            min_token_length,
        } => render_html(&data, query.as_deref(), min_token_length),
        Commands::Stats {
            data,
            min_token_length,
        } => stats(&data, min_token_length),
    }
}

fn search(query: &str, data: &Path, min_token_length: usize, json: bool) -> Result<()> {
    let categories = loader::load_categories(data)?;
    let index = SearchIndex::with_min_token_length(&categories, min_token_length);

    match index.find(query) {
        FindOutcome::TooShort => anyhow::bail!(
            "search term too short (less than {} characters)",
            index.min_token_length()
        ),
        FindOutcome::Matches(matches) if matches.is_empty() => {
            println!("no results for \"{query}\"");
        }
        FindOutcome::Matches(matches) => {
            if json {
                let entries: Vec<_> = matches
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "category": m.category_name,
                            "guide": m.guide,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for m in &matches {
                    println!("{} ({})", m.guide.name, m.category_name);
                }
                tracing::info!("{} matches for \"{}\"", matches.len(), query);
            }
        }
    }

    Ok(())
}

fn render_html(data: &Path, query: Option<&str>, min_token_length: usize) -> Result<()> {
    let categories = loader::load_categories(data)?;
    if categories.is_empty() {
        anyhow::bail!("no guide categories found");
    }

    let html = match query {
        None => {
            let mut cache = RenderCache::new();
            cache.full(&categories).to_string()
        }
        Some(query) => {
            let index = SearchIndex::with_min_token_length(&categories, min_token_length);
            match index.find(query) {
                FindOutcome::TooShort => render::render_search_error(&format!(
                    "Search term too short (less than {} characters).",
                    index.min_token_length()
                )),
                FindOutcome::Matches(matches) if matches.is_empty() => {
                    render::render_search_error(&format!("No results for &ldquo;{query}&rdquo;"))
                }
                FindOutcome::Matches(matches) => render::render_search_results(query, &matches),
            }
        }
    };

    println!("{html}");
    Ok(())
}

fn stats(data: &Path, min_token_length: usize) -> Result<()> {
    let categories = loader::load_categories(data)?;
    let index = SearchIndex::with_min_token_length(&categories, min_token_length);

    println!("categories:       {}", categories.len());
    println!("guides:           {}", index.guide_count());
    println!("unique prefixes:  {}", index.prefix_count());
    println!("min token length: {}", index.min_token_length());
    Ok(())
}
