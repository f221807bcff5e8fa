pub mod categories;
pub mod config;
pub mod list;
pub mod show;
pub mod sitemap;
pub mod top;
