pub mod errors;
pub mod db;
pub mod site_settings;
pub mod catalog;
pub mod order;

#[cfg(test)]
mod tests;
