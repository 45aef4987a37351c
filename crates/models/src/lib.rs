pub mod errors;
pub mod db;
pub mod beer;
pub mod beer_style;

#[cfg(test)]
mod tests;
