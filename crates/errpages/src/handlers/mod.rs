pub mod health;
pub mod pages;
pub mod static_files;
