pub mod prelude;

pub mod generation_records;
