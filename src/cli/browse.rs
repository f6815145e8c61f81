use tabled::Table;

use crate::{
    catalog::{Catalog, CatalogError},
    info,
    types::{MovieSummary, MovieTableRow, Page},
    utils, warning,
};

use super::catalog_client;

pub async fn popular(page: Option<u32>) {
    let catalog = catalog_client();
    let pb = utils::spinner("Fetching popular movies...");
    let result = catalog.popular(page.unwrap_or(1)).await;
    pb.finish_and_clear();

    render_page(result, "Failed to load popular movies");
}

pub async fn search(query: String, page: Option<u32>) {
    let catalog = catalog_client();
    let pb = utils::spinner(&format!("Searching for \"{}\"...", query));
    let result = catalog.search(&query, page.unwrap_or(1)).await;
    pb.finish_and_clear();

    render_page(result, "Search failed");
}

fn render_page(result: Result<Page<MovieSummary>, CatalogError>, failure: &str) {
    match result {
        Ok(page) if page.results.is_empty() => info!("No movies found."),
        Ok(page) => {
            let rows: Vec<MovieTableRow> = page.results.iter().map(MovieTableRow::from).collect();
            println!("{}", Table::new(rows));
            info!(
                "Page {page}/{total_pages} ({total_results} movies)",
                page = page.page,
                total_pages = page.total_pages,
                total_results = page.total_results
            );
        }
        Err(e) => warning!("{}. Err: {}", failure, e),
    }
}
