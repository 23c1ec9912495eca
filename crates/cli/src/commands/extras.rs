//! Playlist and letter commands.

use crate::config::{CliConfig, ConfigError};

use super::emit;

const EXTRAS_NOTE: &str = "Attach the Amul dark chocolate & lava cake next to the bouquet. \
    Add the redeem cards into an envelope. \
    Don\u{2019}t forget the handwritten letter inside the pop-up card.";

/// Show the playlist embed URL and the gift notes.
pub fn playlist(config: &CliConfig) {
    emit(&render_playlist(&config.playlist_url));
}

/// Show the birthday letter.
///
/// # Errors
///
/// Returns `ConfigError` if the configured letter file cannot be read.
pub fn letter(config: &CliConfig) -> Result<(), ConfigError> {
    emit(&render_letter(&config.load_letter()?));
    Ok(())
}

fn render_playlist(url: &str) -> Vec<String> {
    vec![
        "A Playlist Just For You".to_owned(),
        "Songs you\u{2019}ll like. Songs that remind me of you. Play it while flipping the pages."
            .to_owned(),
        url.to_owned(),
        String::new(),
        "Little Extras".to_owned(),
        EXTRAS_NOTE.to_owned(),
    ]
}

fn render_letter(text: &str) -> Vec<String> {
    let mut lines = vec!["A Short Letter".to_owned(), String::new()];
    lines.extend(text.lines().map(str::to_owned));
    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_playlist() {
        let lines = render_playlist("https://example.com/playlist");
        assert_eq!(lines.get(2).unwrap(), "https://example.com/playlist");
        assert!(lines.iter().any(|l| l == "Little Extras"));
        assert!(lines.last().unwrap().starts_with("Attach the Amul dark chocolate"));
    }

    #[test]
    fn test_render_letter_keeps_blank_lines() {
        let lines = render_letter("Dear Sam,\n\nHappy birthday!");
        assert_eq!(
            lines,
            ["A Short Letter", "", "Dear Sam,", "", "Happy birthday!"]
        );
    }
}
