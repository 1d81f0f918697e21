//! Tests for text layout and processing defaults

#[cfg(test)]
mod tests {
    use cellgrid::TextLayout;
    use cellgrid::io::configuration::{
        DEFAULT_BALANCE_WIDTHS, DEFAULT_INDENT, DEFAULT_LOG_FILTER, DEFAULT_SEPARATOR,
        INPUT_EXTENSION, MIN_FILES_FOR_PROGRESS, OUTPUT_SUFFIX,
    };

    // Tests text layout defaults come from the configuration constants
    // Verified by hardcoding a different separator in TextLayout::default
    #[test]
    fn test_text_layout_defaults() {
        let layout = TextLayout::default();

        assert_eq!(layout.separator, DEFAULT_SEPARATOR);
        assert_eq!(layout.balance_widths, DEFAULT_BALANCE_WIDTHS);
        assert_eq!(layout.indent, DEFAULT_INDENT);
        assert_eq!(DEFAULT_SEPARATOR, ", ");
    }

    // Tests output naming cannot collide with inputs
    // Verified by emptying the output suffix
    #[test]
    fn test_output_settings() {
        assert_eq!(OUTPUT_SUFFIX, "_cell");
        assert_eq!(INPUT_EXTENSION, "png");
        assert_eq!(MIN_FILES_FOR_PROGRESS, 2);
        assert_eq!(DEFAULT_LOG_FILTER, "warn");
    }
}
