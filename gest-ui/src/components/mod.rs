//! RSX components for the gestation dashboard page.

mod dashboard_page;
mod error_display;
mod home_page;
mod metric_card;
mod nav_menu;
mod progress_bar;

pub use dashboard_page::DashboardPage;
pub use error_display::ErrorDisplay;
pub use home_page::HomePage;
pub use metric_card::MetricCard;
pub use nav_menu::NavMenu;
pub use progress_bar::ProgressBar;

/// Inline style for a page section; hidden unless active.
pub(crate) fn page_style(active: bool) -> &'static str {
    if active {
        "display: block; padding: 24px 16px;"
    } else {
        "display: none;"
    }
}

/// Class list for a page section.
pub(crate) fn page_class(active: bool) -> &'static str {
    if active {
        "page active-page"
    } else {
        "page"
    }
}
