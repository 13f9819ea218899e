mod activate;
mod add;
mod init;
mod remove;
mod search;
mod show;
mod update;

pub use activate::cmd_activate_author;
pub use add::cmd_add_author;
pub use init::cmd_init;
pub use remove::cmd_remove_author;
pub use search::cmd_search_authors;
pub use show::cmd_show_author;
pub use update::cmd_update_author;

use anyhow::Context;
use tokio::task;

use crate::config::SecurityConfig;
use crate::models::Author;
use crate::models::credentials::hash_password;

/// Argon2 is CPU-bound, so it runs off the async runtime.
async fn hash_in_background(password: String, config: &SecurityConfig) -> anyhow::Result<String> {
    let config = config.clone();
    let hash = task::spawn_blocking(move || hash_password(&password, &config))
        .await
        .context("Password hashing task panicked")??;

    Ok(hash)
}

fn print_author(author: &Author) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(author)?);
    Ok(())
}
