pub mod errors;
pub mod db;
pub mod user;
pub mod group;
pub mod membership;

#[cfg(test)]
mod tests;
