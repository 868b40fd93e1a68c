use serde::Deserialize;

use movietui::dataset::DEFAULT_DATASET;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Dataset path or http(s) URL
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default)]
    pub vim_mode: bool,
    /// Sort applied once the dataset loads (gross_asc, gross_desc, year_asc, year_desc)
    #[serde(default)]
    pub initial_sort: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            vim_mode: false,
            initial_sort: None,
        }
    }
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}
