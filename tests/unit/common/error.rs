//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use gridcore::GridError;
    use gridcore::common::error::{Axis, invalid_dimensions, out_of_range};
    use ndarray::Array2;
    use std::error::Error;

    // Tests out-of-range message names the axis, index and accepted range
    // Verified by omitting the range from the message
    #[test]
    fn test_out_of_range_message() {
        let error = out_of_range(Axis::Row, &5, &"0..3");

        assert_eq!(error.to_string(), "row 5 out of range (valid: 0..3)");
        assert_eq!(error.axis(), Some(Axis::Row));
        assert!(error.is_out_of_range());
    }

    #[test]
    fn test_invalid_dimensions_message() {
        let error = invalid_dimensions(&-1, &4, &"dimensions must not be negative");

        let message = error.to_string();
        assert!(message.contains("-1x4"));
        assert!(message.contains("must not be negative"));
        assert_eq!(error.axis(), None);
        assert!(!error.is_out_of_range());
    }

    // Tests shape errors keep their ndarray source
    // Verified by returning None from source()
    #[test]
    fn test_shape_error_source_chain() {
        let Err(shape_error) = Array2::<i32>::from_shape_vec((2, 2), vec![1, 2, 3]) else {
            unreachable!("three values cannot fill a 2x2 matrix");
        };

        let error = GridError::from(shape_error);
        assert!(error.source().is_some());
        assert!(error.to_string().starts_with("Array shape mismatch"));
    }

    #[test]
    fn test_other_variants_have_no_source() {
        let error = out_of_range(Axis::Column, &9, &"0..=4");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Row.to_string(), "row");
        assert_eq!(Axis::Column.to_string(), "column");
    }
}
