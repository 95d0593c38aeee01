// this_file: crates/filigree-cli/src/commands/render.rs

//! Render command implementation.
//!
//! Resolves input text and a style configuration, runs the pipeline, and
//! writes the styled text out.

use crate::cli::RenderArgs;
use crate::profiles::ProfileStore;
use filigree_core::{render, render_with, DefaultRng, Result, StyleConfig};
use std::fs;
use std::io::Read;

pub fn run(args: &RenderArgs) -> Result<()> {
    let text = input_text(args)?;
    let config = resolve_config(args)?;

    let styled = match args.seed {
        Some(seed) => {
            let mut rng = DefaultRng::seeded(seed);
            render_with(&text, &config, &mut rng)
        }
        None => render(&text, &config),
    };

    match args.output_file {
        Some(ref path) => fs::write(path, styled)?,
        None => println!("{styled}"),
    }
    Ok(())
}

/// The configuration for this run: a saved profile when `--profile` is
/// given, defaults otherwise, with the style flags layered on top.
fn resolve_config(args: &RenderArgs) -> Result<StyleConfig> {
    let mut config = match args.profile {
        Some(ref name) => {
            let path = args.store.clone().unwrap_or_else(ProfileStore::default_path);
            let store = ProfileStore::open(path)?;
            store.get(name)?.clone()
        }
        None => StyleConfig::default(),
    };
    args.style.apply_to(&mut config);
    Ok(config)
}

fn input_text(args: &RenderArgs) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }
    if let Some(ref path) = args.text_file {
        return Ok(fs::read_to_string(path)?);
    }
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    // A trailing newline from the shell is not part of the text.
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
