pub mod constants;
pub mod html;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
