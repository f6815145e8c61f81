use tabled::Table;

use crate::{
    controller::ListController,
    info,
    types::{Loadable, MovieTableRow},
    warning,
};

use super::favorites_repository;

pub async fn favorites() {
    let controller = ListController::new(favorites_repository());
    controller.activate().await;

    match controller.snapshot().await {
        Loadable::Loaded(favorites) if favorites.is_empty() => info!("No favorites yet"),
        Loadable::Loaded(favorites) => {
            let rows: Vec<MovieTableRow> = favorites.iter().map(MovieTableRow::from).collect();
            println!("{}", Table::new(rows));
        }
        Loadable::Failed(e) => warning!("Failed to load favorites. Err: {}", e),
        Loadable::Loading => {}
    }
}
