use anyhow::Result;

use webloader::application::{build_collection, CollectionSnapshot};

use super::{print_json, LoadedManifest};

pub fn cmd_list(loaded: &LoadedManifest, json: bool) -> Result<()> {
    let collection = build_collection(&loaded.manifest, &loaded.base_dir)?;
    let snapshot = CollectionSnapshot::of(&collection);

    if json {
        return print_json(&snapshot);
    }

    match &snapshot.root {
        Some(root) => println!("Root: {}", root.display()),
        None => println!("Root: (none)"),
    }

    println!("\nFiles ({}):", snapshot.files.len());
    for file in &snapshot.files {
        println!("  {}", file.display());
    }

    println!("\nWatch files ({}):", snapshot.watch_files.len());
    for file in &snapshot.watch_files {
        println!("  {}", file.display());
    }

    println!("\nRemote files ({}):", snapshot.remote_files.len());
    for url in &snapshot.remote_files {
        println!("  {}", url);
    }

    Ok(())
}
