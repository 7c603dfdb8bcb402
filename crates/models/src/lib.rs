pub mod db;
pub mod lab;
pub mod lab_result;

mod ulid_time;

#[cfg(test)]
mod tests;
