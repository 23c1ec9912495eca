//! Flipbook link commands.
//!
//! # Usage
//!
//! ```bash
//! bp-cli link show
//! bp-cli link set https://heyzine.com/flip-book/abc123.html
//! bp-cli link clear
//! ```

use birthday_pass_core::store::StorageBackend;
use birthday_pass_core::{FlipbookLinkController, PassError};

use super::emit;

/// Show the current flipbook link.
pub fn show<B: StorageBackend>(links: &FlipbookLinkController<B>) {
    emit(&render(links));
}

/// Save a new flipbook link.
///
/// # Errors
///
/// Returns [`PassError::EmptyLink`] if `url` is blank.
pub fn set<B: StorageBackend>(
    links: &mut FlipbookLinkController<B>,
    url: &str,
) -> Result<(), PassError> {
    links.set_link(url)?;
    tracing::info!("Flipbook link saved!");
    Ok(())
}

/// Reset the flipbook link to the configured default.
pub fn clear<B: StorageBackend>(links: &mut FlipbookLinkController<B>) {
    links.clear_link();
    emit(&render(links));
}

fn render<B: StorageBackend>(links: &FlipbookLinkController<B>) -> Vec<String> {
    let mut lines = vec!["Tiny Moments, Big Memories".to_owned()];
    if links.is_default() {
        lines.push("No flipbook link yet".to_owned());
        lines.push(
            "Upload your flipbook to Heyzine or any host and save the share URL with `bp-cli link set <url>`."
                .to_owned(),
        );
    }
    lines.push(format!("Open flipbook: {}", links.link()));
    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use birthday_pass_core::FlipbookLink;
    use birthday_pass_core::store::MemoryBackend;

    use super::*;

    fn controller() -> FlipbookLinkController<MemoryBackend> {
        FlipbookLinkController::load(
            FlipbookLink::parse("https://heyzine.com/").unwrap(),
            MemoryBackend::new(),
        )
    }

    #[test]
    fn test_render_default_shows_placeholder() {
        let lines = render(&controller());
        assert!(lines.iter().any(|l| l == "No flipbook link yet"));
        assert_eq!(lines.last().unwrap(), "Open flipbook: https://heyzine.com/");
    }

    #[test]
    fn test_render_custom_link() {
        let mut links = controller();
        set(&mut links, "https://example.com/book").unwrap();
        let lines = render(&links);
        assert!(!lines.iter().any(|l| l == "No flipbook link yet"));
        assert_eq!(lines.last().unwrap(), "Open flipbook: https://example.com/book");
    }

    #[test]
    fn test_set_blank_rejected() {
        let mut links = controller();
        assert_eq!(set(&mut links, "  "), Err(PassError::EmptyLink));
    }

    #[test]
    fn test_clear() {
        let mut links = controller();
        set(&mut links, "https://example.com/book").unwrap();
        clear(&mut links);
        assert!(links.is_default());
    }
}
