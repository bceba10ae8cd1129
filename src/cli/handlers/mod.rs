mod card;
mod init;
mod legacy;
mod note;
mod set;
mod study;
mod utils;

pub use card::handle_card;
pub use init::handle_init;
pub use legacy::{handle_export_legacy, handle_import_legacy};
pub use note::handle_note;
pub use set::handle_set;
pub use study::run_session;

use crate::config::StudyConfig;
use crate::storage::Store;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub store: Store,
}

impl CommandContext {
    /// Load config (or defaults) from `root` and open the store.
    pub fn open(root: PathBuf, data_dir: Option<String>) -> crate::error::Result<Self> {
        let (mut config, root) = StudyConfig::load_or_default(&root)?;
        if let Some(dir) = data_dir {
            config.storage.data_dir = dir;
        }
        let store = Store::open(&config, &root)?;
        tracing::debug!(
            sets = %store.set_path().display(),
            notes = %store.note_path().display(),
            "Opened study databases"
        );
        Ok(Self { store })
    }
}
