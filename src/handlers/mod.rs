pub mod dashboard;
pub mod health;
pub mod moods;

#[cfg(test)]
pub mod test_support;
