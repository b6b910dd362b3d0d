mod db_tests;
mod utils;
