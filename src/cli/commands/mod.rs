mod categories;
mod config;
mod image;
mod meal;
mod meals;

pub use self::categories::categories;
pub use self::config::config;
pub use self::image::image;
pub use self::meal::meal;
pub use self::meals::meals;
