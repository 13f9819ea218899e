use crate::cli::AddArgs;
use crate::config::Config;
use crate::db::Store;
use crate::models::Author;
use crate::models::author_id::AuthorId;
use crate::models::credentials::generate_activation_token;

use super::{hash_in_background, print_author};

pub async fn cmd_add_author(config: &Config, store: &Store, args: AddArgs) -> anyhow::Result<()> {
    let hash = match (args.password, args.hash) {
        (Some(password), _) => hash_in_background(password, &config.security).await?,
        (None, Some(hash)) => hash,
        (None, None) => anyhow::bail!("Either --password or --hash is required"),
    };

    let token = (!args.activated).then(generate_activation_token);

    let author = Author::new(
        AuthorId::generate(),
        token.as_deref(),
        &args.avatar_url,
        &args.email,
        &hash,
        &args.username,
    )?;

    author.insert(&store.conn).await?;

    println!("✓ Added author {}", author.username());
    print_author(&author)?;

    if let Some(token) = author.activation_token() {
        println!();
        println!("Activate with: authorbook activate {token}");
    }

    Ok(())
}
