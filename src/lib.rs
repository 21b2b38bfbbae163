pub mod app;
pub mod library;
pub mod player;
pub mod playlist;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;
