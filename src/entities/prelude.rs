pub use super::generation_records::Entity as GenerationRecords;
