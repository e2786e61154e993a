pub mod io;
pub mod rgba;
pub mod traits;

pub use self::rgba::{ImageRgba8, Rgba8, TRANSPARENT};
pub use self::traits::{ImageView, ImageViewMut, Rows};
