// this_file: crates/filigree-cli/src/commands/profile.rs

//! Profile command implementation.
//!
//! CRUD plus import/export over the JSON profile store.

use crate::cli::{ProfileArgs, ProfileCommand};
use crate::profiles::ProfileStore;
use filigree_core::{FiligreeError, Result, StyleConfig};
use std::fs;

pub fn run(args: &ProfileArgs) -> Result<()> {
    let path = args.store.clone().unwrap_or_else(ProfileStore::default_path);
    let mut store = ProfileStore::open(path)?;

    match args.command {
        ProfileCommand::Save { ref name, ref style } => {
            let mut config = StyleConfig::default();
            style.apply_to(&mut config);
            store.save(name, config)?;
            println!("Saved profile \"{name}\"");
        }
        ProfileCommand::List => {
            if store.is_empty() {
                println!("No saved profiles");
            } else {
                for name in store.names() {
                    println!("{name}");
                }
            }
        }
        ProfileCommand::Show { ref name } => {
            let config = store.get(name)?;
            let json = serde_json::to_string_pretty(config)
                .map_err(|err| FiligreeError::ProfileStore(err.to_string()))?;
            println!("{json}");
        }
        ProfileCommand::Delete { ref name } => {
            store.delete(name)?;
            println!("Deleted profile \"{name}\"");
        }
        ProfileCommand::Export {
            ref name,
            ref output_file,
        } => {
            let json = store.export(name.as_deref())?;
            match output_file {
                Some(path) => {
                    fs::write(path, json)?;
                    println!("Exported to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
        ProfileCommand::Import { ref path } => {
            let json = fs::read_to_string(path)?;
            let outcome = store.import(&json)?;
            if outcome.skipped > 0 {
                println!(
                    "Imported {} profile(s), skipped {}",
                    outcome.imported, outcome.skipped
                );
            } else {
                println!("Imported {} profile(s)", outcome.imported);
            }
        }
    }
    Ok(())
}
