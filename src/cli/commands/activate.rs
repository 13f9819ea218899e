use crate::db::Store;
use crate::models::Author;

pub async fn cmd_activate_author(store: &Store, token: &str) -> anyhow::Result<()> {
    let Some(mut author) = Author::find_by_activation_token(&store.conn, token).await? else {
        println!("No pending account for that activation token.");
        return Ok(());
    };

    author.activate();
    author.update(&store.conn).await?;

    println!("✓ Activated {} <{}>", author.username(), author.email());
    Ok(())
}
