//! End-to-end rendering of a wrapped error through the public surface.

use causetrace::{ErrorTrace, FilterSpec, StackFrame, TraceFormatter, render_to_field};

const NEW_LINE: &str = if cfg!(windows) { "\r\n" } else { "\n" };

fn frame(class: &str, method: &str, file: &str, line: u32) -> StackFrame {
    StackFrame::new(class, method).with_location(file, line)
}

fn wrapped_error() -> ErrorTrace {
    let shared = frame("com.acme.app.Main", "main", "Main.java", 8);
    ErrorTrace::new("com.acme.app.ServiceException")
        .message("outer")
        .frame(frame("com.acme.app.Service", "call", "Service.java", 21))
        .frame(shared.clone())
        .caused_by(
            ErrorTrace::new("java.io.IOException")
                .message("inner")
                .frame(frame("com.acme.app.Client", "connect", "Client.java", 77))
                .frame(frame("com.acme.app.Service", "call", "Service.java", 19))
                .frame(shared),
        )
}

#[test]
fn renders_two_stanzas_with_independent_elision() {
    let expected = format!(
        "com.acme.app.ServiceException: outer{NEW_LINE}\
         \tat com.acme.app.Service.call(Service.java:21){NEW_LINE}\
         \tat com.acme.app.Main.main(Main.java:8){NEW_LINE}\
         Caused by: java.io.IOException: inner{NEW_LINE}\
         \tat com.acme.app.Client.connect(Client.java:77){NEW_LINE}\
         \tat com.acme.app.Service.call(Service.java:19){NEW_LINE}\
         \t... 1 more"
    );

    assert_eq!(causetrace::render(&wrapped_error()), expected);
}

#[test]
fn keep_filter_applies_to_both_stanzas() {
    let formatter = TraceFormatter::new(vec![FilterSpec::Keep(vec!["com.acme.app".to_string()])]);
    let rendered = formatter.render(&wrapped_error());

    // The java.io frame set survives only where it matches the kept package;
    // both stanzas end up with com.acme.app frames exclusively.
    for line in rendered.lines() {
        if let Some(frame_text) = line.strip_prefix("\tat ") {
            assert!(
                frame_text.starts_with("com.acme.app."),
                "unexpected frame kept: {frame_text}"
            );
        }
    }
    assert!(rendered.contains("Caused by: java.io.IOException: inner"));
}

#[test]
fn field_rendering_is_optional() {
    assert_eq!(render_to_field(None), None);

    let text = render_to_field(Some(&wrapped_error())).expect("field text");
    assert!(text.starts_with("com.acme.app.ServiceException: outer"));
}
