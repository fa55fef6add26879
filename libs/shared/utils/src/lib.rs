pub mod case;
pub mod test_utils;
