use std::path::Path;

use crate::config::Config;

pub fn cmd_init() -> anyhow::Result<()> {
    let path = Path::new("authorbook.toml");
    if path.exists() {
        println!("{} already exists, leaving it alone.", path.display());
        return Ok(());
    }

    Config::default().save_to_path(path)?;
    println!("✓ Wrote {}", path.display());
    Ok(())
}
