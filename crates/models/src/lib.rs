pub mod errors;
pub mod db;
pub mod seed;
pub mod staff_account;
pub mod banner;
pub mod contact;
pub mod event;
pub mod portfolio_image;
pub mod service;

#[cfg(test)]
mod tests;
