pub mod decode;
pub mod icons;
pub mod media;
pub mod store;
pub mod text;
