// Toolvana page-facing adapters
// The page model, the landing page markup, and the widgets that write into it.

pub mod dom;
pub mod landing_page;
pub mod recent_tools_widget;
pub mod search_widget;
