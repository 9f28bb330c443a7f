pub const NEWLINE_CHAR: char = '\n';
pub const CARRIAGE_RETURN_CHAR: char = '\r';

pub const NEWLINE_STRING: &str = "\n";
pub const CARRIAGE_RETURN_STRING: &str = "\r";
pub const CARRIAGE_RETURN_LINEFEED_STRING: &str = "\r\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_agree_with_chars() {
        assert_eq!(NEWLINE_STRING, NEWLINE_CHAR.to_string());
        assert_eq!(CARRIAGE_RETURN_STRING, CARRIAGE_RETURN_CHAR.to_string());
        assert_eq!(CARRIAGE_RETURN_LINEFEED_STRING, [CARRIAGE_RETURN_STRING, NEWLINE_STRING].concat());
    }
}
