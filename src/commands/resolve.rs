use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use webloader::FileCollection;

use super::{print_json, LoadedManifest};

#[derive(Debug, Serialize)]
struct Resolved {
    input: PathBuf,
    resolved: PathBuf,
}

pub fn cmd_resolve(loaded: &LoadedManifest, paths: &[PathBuf], json: bool) -> Result<()> {
    let collection = FileCollection::new(loaded.manifest.resolved_root(&loaded.base_dir));

    let resolved = paths
        .iter()
        .map(|input| {
            Ok(Resolved {
                input: input.clone(),
                resolved: collection.canonicalize(input)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        return print_json(&resolved);
    }

    for entry in &resolved {
        println!("{}", entry.resolved.display());
    }
    Ok(())
}
