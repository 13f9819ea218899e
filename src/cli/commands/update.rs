use crate::cli::UpdateArgs;
use crate::config::Config;
use crate::db::Store;
use crate::models::Author;

use super::{hash_in_background, print_author};

pub async fn cmd_update_author(
    config: &Config,
    store: &Store,
    args: UpdateArgs,
) -> anyhow::Result<()> {
    let Some(mut author) = Author::find_by_id(&store.conn, args.id.as_str()).await? else {
        println!("Author {} not found.", args.id);
        return Ok(());
    };

    if let Some(email) = &args.email {
        author.set_email(email)?;
    }
    if let Some(username) = &args.username {
        author.set_username(username)?;
    }
    if let Some(avatar_url) = &args.avatar_url {
        author.set_avatar_url(avatar_url)?;
    }
    if let Some(password) = args.password {
        let hash = hash_in_background(password, &config.security).await?;
        author.set_password_hash(&hash)?;
    }

    if author.update(&store.conn).await? {
        println!("✓ Updated author {}", author.username());
        print_author(&author)?;
    } else {
        println!("Author {} was removed in the meantime.", args.id);
    }

    Ok(())
}
