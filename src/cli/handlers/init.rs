use crate::config::{CONFIG_FILE_NAME, StorageSettings, StudyConfig};
use crate::error::StudyError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(data_dir: String) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(StudyError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = StudyConfig {
        storage: StorageSettings {
            data_dir,
            ..StorageSettings::default()
        },
    };

    let data_path = config.data_path(&cwd);
    std::fs::create_dir_all(&data_path)?;
    config.save(&config_path)?;

    println!(
        "{} flashstudy project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Sets:   {}", config.set_file_path(&cwd).display());
    println!("  Notes:  {}", config.note_file_path(&cwd).display());

    Ok(())
}
