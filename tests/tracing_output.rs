mod common;

use common::SharedBuffer;
use tracing::Level;

/// Runs `f` under a plain-text `fmt` subscriber and returns what it wrote.
fn formatted_output(max_level: Level, f: impl FnOnce()) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    buffer.contents()
}

fn reversal_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.contains("was reversed as"))
        .collect()
}

#[test]
fn test_reversal_reaches_tracing_at_info() {
    let (service, _logger) = common::create_tracing_service(true);

    let output = formatted_output(Level::INFO, || {
        service.reverse("mountain").unwrap();
    });

    let lines = reversal_lines(&output);
    assert_eq!(lines.len(), 1, "output was: {output}");
    assert!(lines[0].contains("INFO"));
    assert!(lines[0].contains("word_reverser:"));
    assert!(lines[0].contains("The word \"mountain\" was reversed as \"niatnuom\""));
}

#[test]
fn test_reversal_not_logged_when_disabled() {
    let (service, logger) = common::create_tracing_service(false);

    let output = formatted_output(Level::TRACE, || {
        service.reverse("mountain").unwrap();
    });

    assert!(reversal_lines(&output).is_empty(), "output was: {output}");
    assert_eq!(logger.cached_words(), 1);
}

#[test]
fn test_reversal_filtered_below_info() {
    let (service, _logger) = common::create_tracing_service(true);

    let output = formatted_output(Level::WARN, || {
        service.reverse("mountain").unwrap();
    });

    assert!(reversal_lines(&output).is_empty(), "output was: {output}");
}
