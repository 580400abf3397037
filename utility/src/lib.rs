mod error;

pub use error::*;

pub fn is_default<T: Default + PartialEq>(t: &T) -> bool {
    *t == Default::default()
}

#[cfg(test)]
mod tests {
    use crate::is_default;

    #[test]
    fn test_is_default() {
        assert!(is_default(&String::new()));
        assert!(!is_default(&"myns".to_string()));
        assert!(is_default(&Vec::<u8>::new()));
    }
}
