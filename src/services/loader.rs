use anyhow::Result;
use tokio::sync::oneshot;

use movietui::dataset::{self, DatasetSource, MovieRecord};

use crate::log_debug;

/// Outcome of the one-shot dataset load
pub type LoadResult = Result<Vec<MovieRecord>>;

/// Load the dataset on a background task
///
/// The receiver yields exactly one result. There is no retry: the caller
/// reports a failure and leaves the app inert.
pub fn spawn_dataset_load(source: DatasetSource) -> oneshot::Receiver<LoadResult> {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        log_debug(&format!("Loading dataset from {}", source.describe()));
        let result = dataset::load_movies(&source).await;
        match &result {
            Ok(movies) => log_debug(&format!("Loaded {} movies", movies.len())),
            Err(e) => log_debug(&format!("Failed to load dataset: {:#}", e)),
        }
        // Receiver gone means the app already quit
        let _ = tx.send(result);
    });

    rx
}
