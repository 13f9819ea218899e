use crate::db::Store;
use crate::models::Author;

use super::print_author;

pub async fn cmd_show_author(store: &Store, id: &str) -> anyhow::Result<()> {
    match Author::find_by_id(&store.conn, id).await? {
        Some(author) => print_author(&author)?,
        None => println!("Author {id} not found."),
    }

    Ok(())
}
