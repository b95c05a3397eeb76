use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "generation_records")]
pub struct Model {
    /// UUID v4 text form, assigned by the repository on insert.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(column_type = "Text")]
    pub prompt: String,

    /// Ordered section deck serialized as a JSON array.
    #[sea_orm(column_type = "Text")]
    pub sections_json: String,

    pub source: String,

    /// Metadata timestamp, distinct column from `created_at` even though
    /// both are set from the same instant.
    pub generated_at: String,

    #[sea_orm(column_type = "Text")]
    pub prompt_processed: String,

    pub sections_generated: i32,

    pub created_at: String, // SQLite doesn't strictly enforce types, but typically strings for ISO8601

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
