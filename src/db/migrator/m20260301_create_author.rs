use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Author::AuthorId)
                            .binary_len(16)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Author::AuthorActivationToken).char_len(32).null())
                    .col(
                        ColumnDef::new(Author::AuthorAvatarUrl)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Author::AuthorEmail)
                            .string_len(128)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Author::AuthorHash).char_len(97).not_null())
                    .col(
                        ColumnDef::new(Author::AuthorUsername)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Activation looks authors up by token
        manager
            .create_index(
                Index::create()
                    .name("idx_author_activation_token")
                    .table(Author::Table)
                    .col(Author::AuthorActivationToken)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Author::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Author {
    Table,
    #[iden = "authorId"]
    AuthorId,
    #[iden = "authorActivationToken"]
    AuthorActivationToken,
    #[iden = "authorAvatarUrl"]
    AuthorAvatarUrl,
    #[iden = "authorEmail"]
    AuthorEmail,
    #[iden = "authorHash"]
    AuthorHash,
    #[iden = "authorUsername"]
    AuthorUsername,
}
