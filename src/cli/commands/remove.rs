use crate::db::Store;
use crate::models::Author;

pub async fn cmd_remove_author(store: &Store, id: &str, yes: bool) -> anyhow::Result<()> {
    let Some(author) = Author::find_by_id(&store.conn, id).await? else {
        println!("Author {id} not found.");
        return Ok(());
    };

    if !yes {
        println!(
            "Remove author '{}' <{}> (ID: {})?",
            author.username(),
            author.email(),
            author.id()
        );
        println!("Enter 'y' to confirm, anything else to cancel:");

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if author.delete(&store.conn).await? {
        println!("✓ Removed: {}", author.username());
    } else {
        println!("Failed to remove author.");
    }

    Ok(())
}
