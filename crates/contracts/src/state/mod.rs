pub mod autoplay;
pub mod carousel;
pub mod filter;
pub mod milestone_board;
pub mod modal;
pub mod nav_menu;
pub mod windowed;

pub use autoplay::{Autoplay, AUTOPLAY_INTERVAL_MS};
pub use carousel::{Carousel, CarouselError};
pub use filter::{CategoryFilter, Categorized};
pub use milestone_board::{MilestoneBoard, ViewMode};
pub use modal::ModalState;
pub use nav_menu::MobileMenu;
pub use windowed::{visible_for_width, WindowedCarousel};
