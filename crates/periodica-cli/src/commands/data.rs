use crate::cli::{DataArgs, DataCommands};
use crate::data::{DataManager, InitOutcome};
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

pub async fn run(args: DataArgs) -> Result<()> {
    match args.command {
        DataCommands::Init { force } => {
            handle_init(force)?;
        }
        DataCommands::Path => {
            handle_path()?;
        }
        DataCommands::SetPath { path } => {
            handle_set_path(path)?;
        }
        DataCommands::ResetPath => {
            handle_reset_path()?;
        }
    }
    Ok(())
}

fn handle_init(force: bool) -> Result<()> {
    let manager = DataManager::new()?;
    println!("Writing bundled catalogs to: {}", manager.get_data_path().display());

    manager.init_data(force, |path, outcome| {
        let label = match outcome {
            InitOutcome::Written => "✓ wrote",
            InitOutcome::Overwritten => "✓ replaced",
            InitOutcome::Skipped => "- kept existing",
        };
        println!("  {} {}", label, path.display());
    })?;

    println!("Edit these files to customize the catalogs; they are picked up automatically.");
    Ok(())
}

fn handle_path() -> Result<()> {
    let manager = DataManager::new()?;
    println!("{}", manager.get_data_path().display());
    Ok(())
}

fn handle_set_path(path: PathBuf) -> Result<()> {
    DataManager::set_custom_path(&path)?;
    info!("Custom data path set to {:?}", &path);
    println!("Data directory set to: {}", path.display());
    Ok(())
}

fn handle_reset_path() -> Result<()> {
    DataManager::reset_path()?;
    let manager = DataManager::new()?;
    info!("Data path reset to default.");
    println!(
        "Data directory reset to default: {}",
        manager.get_data_path().display()
    );
    Ok(())
}
