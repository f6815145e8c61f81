use colored::Colorize;
use tabled::Table;

use crate::{
    catalog::TmdbClient,
    controller::{DetailController, DetailState},
    info,
    store::FileStore,
    success,
    types::{Loadable, MovieTableRow},
    utils, warning,
};

use super::{catalog_client, favorites_repository};

type Controller = DetailController<FileStore, TmdbClient>;

async fn load(id: i64) -> (Controller, String) {
    let catalog = catalog_client();
    let image_url = catalog.config().image_url.clone();
    let controller = DetailController::new(id, favorites_repository(), catalog);

    let pb = utils::spinner(&format!("Fetching movie {}...", id));
    controller.activate().await;
    pb.finish_and_clear();

    (controller, image_url)
}

pub async fn detail(id: i64) {
    let (controller, image_url) = load(id).await;
    render(&controller.snapshot().await, &image_url);
}

pub async fn favorite(id: i64) {
    let (controller, _) = load(id).await;

    let title = match controller.snapshot().await.movie {
        Loadable::Loaded(movie) => movie.title,
        _ => format!("movie {}", id),
    };

    match controller.toggle().await {
        Ok(true) => success!("Added {} to favorites.", title),
        Ok(false) => success!("Removed {} from favorites.", title),
        Err(e) => warning!("Cannot update favorites. Err: {}", e),
    }
}

fn render(state: &DetailState, image_url: &str) {
    match &state.movie {
        Loadable::Loaded(movie) => {
            let year = utils::release_year(movie.release_date.as_deref())
                .map(|y| format!(" ({})", y))
                .unwrap_or_default();
            let marker = if state.is_favorite { " ★" } else { "" };
            println!("{}{}{}", movie.title.bold(), year, marker.yellow());

            if let Some(tagline) = movie.tagline.as_deref().filter(|t| !t.is_empty()) {
                println!("{}", tagline.italic());
            }

            let mut facts = vec![format!(
                "★ {} ({} votes)",
                utils::format_rating(movie.vote_average),
                movie.vote_count
            )];
            if let Some(runtime) = utils::format_runtime(movie.runtime) {
                facts.push(runtime);
            }
            if !movie.genres.is_empty() {
                facts.push(
                    movie
                        .genres
                        .iter()
                        .map(|g| g.name.clone())
                        .collect::<Vec<_>>()
                        .join(", "),
                );
            }
            println!("{}\n", facts.join(" | "));

            if !movie.overview.is_empty() {
                println!("{}\n", movie.overview);
            }
            if let Some(url) = utils::poster_url(image_url, movie.poster_path.as_deref()) {
                println!("Poster: {}\n", url);
            }
        }
        Loadable::Failed(_) => warning!("No data available for this movie."),
        Loadable::Loading => {}
    }

    match &state.recommendations {
        Loadable::Loaded(movies) if movies.is_empty() => info!("No recommendations."),
        Loadable::Loaded(movies) => {
            let rows: Vec<MovieTableRow> = movies.iter().map(MovieTableRow::from).collect();
            println!("Recommendations\n{}", Table::new(rows));
        }
        Loadable::Failed(_) => warning!("Recommendations are unavailable."),
        Loadable::Loading => {}
    }
}
