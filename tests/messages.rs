#[cfg(test)]
mod tests {
    use tudu::libs::messages::Message;

    #[test]
    fn items_left_counter_text() {
        assert_eq!(Message::ItemsLeft(0).to_string(), "0 items left");
        assert_eq!(Message::ItemsLeft(3).to_string(), "3 items left");
    }

    #[test]
    fn config_error_texts() {
        assert_eq!(Message::ConfigParseError.to_string(), "Failed to parse configuration");
        assert_eq!(Message::ConfigSaveError.to_string(), "Failed to save configuration");
    }
}
