pub mod callout;
pub mod card;
pub mod cover;
pub mod row;
pub mod text;
