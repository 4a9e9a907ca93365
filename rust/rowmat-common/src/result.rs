pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[macro_export]
macro_rules! verify_binding {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_binding(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn verify_binding(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        binding_mismatch(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn binding_mismatch(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::BindingMismatch {
        element: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    fn check_len(len: usize) -> crate::Result<()> {
        verify_arg!(len, len > 2);
        Ok(())
    }

    fn check_fields(readers: usize, fields: usize) -> crate::Result<()> {
        verify_binding!(readers, readers == fields);
        Ok(())
    }

    #[test]
    fn test_verify_arg_reports_condition() {
        assert!(check_len(3).is_ok());
        let err = check_len(1).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "len");
                assert_eq!(message, "len > 2");
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_verify_binding_reports_condition() {
        assert!(check_fields(2, 2).is_ok());
        let err = check_fields(2, 3).unwrap_err();
        assert!(err.is_binding_mismatch());
        assert!(err.to_string().contains("readers == fields"));
    }
}
