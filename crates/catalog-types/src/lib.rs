pub mod error;
pub mod image;
pub mod money;
pub mod product;

pub use error::{Error, Result};
pub use image::{DataUri, ImageFile, ImageSource, media_type_for_path};
pub use money::{round_money, to_cents};
pub use product::{Product, ProductId};
