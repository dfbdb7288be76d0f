mod selection_store;

pub use selection_store::{FileSelectionStore, DEFAULT_SELECTION_FILE};
