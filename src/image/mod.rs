pub mod color;
pub mod f64;
pub mod io;
pub mod traits;

pub use self::color::ColorImage;
pub use self::f64::ImageF64;
pub use self::traits::{ImageView, ImageViewMut};
