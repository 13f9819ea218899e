use crate::db::Store;
use crate::models::Author;

pub async fn cmd_search_authors(store: &Store, email: &str) -> anyhow::Result<()> {
    let mut matches = Author::find_by_email(&store.conn, email).await?.peekable();

    if matches.peek().is_none() {
        println!("No authors with an email containing '{email}'");
        return Ok(());
    }

    for author in matches {
        println!("{}", serde_json::to_string(&author)?);
    }

    Ok(())
}
