use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_println_captures_with_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    assert_eq!(handler.get_output(), "hello\n");
}

#[test]
fn buffer_print_captures_without_newline() {
    let handler = BufferPrintHandler::new();
    handler.print("a");
    handler.print("b");
    assert_eq!(handler.get_output(), "ab");
}

#[test]
fn buffer_clear() {
    let handler = buffer_handler();
    handler.println("x");
    handler.clear();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn silent_discards() {
    let handler = silent_handler();
    handler.println("ignored");
    handler.print("ignored");
    assert_eq!(handler.get_output(), "");
}

#[test]
fn shared_handler_sees_writes_through_clones() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);
    other.print("shared");
    assert_eq!(handler.get_output(), "shared");
}
