pub mod carousel;
pub mod config;
pub mod error;
pub mod events;
pub mod scan;
pub mod structure;

pub use carousel::{Carousel, CarouselHandle};
pub use config::CarouselOptions;
pub use error::Error;
pub use events::Command;
pub use structure::Host;
