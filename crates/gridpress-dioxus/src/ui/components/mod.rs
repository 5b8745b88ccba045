pub mod article_body;
pub mod block;
pub mod block_frame;
pub mod divider;
pub mod driver_card;
pub mod error_screen;
pub mod gallery;
pub mod heading;
pub mod image;
pub mod insert_menu;
pub mod list;
pub mod paragraph;
pub mod quote;
pub mod race_result;
pub mod slider;
pub mod standings;
pub mod table;
pub mod team_card;

pub use article_body::ArticleBody;
pub use block::BlockView;
pub use block_frame::BlockFrame;
pub use error_screen::LibraryErrorScreen;
pub use insert_menu::InsertMenu;
