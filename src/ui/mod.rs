pub mod connect;
pub mod feed;
pub mod status_bar;
pub mod theme;

pub use connect::render_connect_view;
pub use feed::{render_feed_view, short_address, FeedViewState};
pub use status_bar::{render_status_bar, StatusBarState};
pub use theme::Theme;
