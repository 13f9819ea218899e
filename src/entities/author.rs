use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "author")]
pub struct Model {
    /// 16 raw bytes of the author id
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "authorId",
        column_type = "Binary(16)"
    )]
    pub author_id: Vec<u8>,

    /// 32-char lowercase hex, NULL once the account is activated
    #[sea_orm(
        column_name = "authorActivationToken",
        column_type = "Char(Some(32))",
        nullable
    )]
    pub author_activation_token: Option<String>,

    #[sea_orm(
        column_name = "authorAvatarUrl",
        column_type = "String(StringLen::N(255))"
    )]
    pub author_avatar_url: String,

    #[sea_orm(
        column_name = "authorEmail",
        column_type = "String(StringLen::N(128))",
        unique
    )]
    pub author_email: String,

    #[sea_orm(column_name = "authorHash", column_type = "Char(Some(97))")]
    pub author_hash: String,

    #[sea_orm(
        column_name = "authorUsername",
        column_type = "String(StringLen::N(32))",
        unique
    )]
    pub author_username: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
