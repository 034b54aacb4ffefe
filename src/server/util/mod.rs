pub mod db;
pub mod parse;
