// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_lesson_markdown(sections: usize) -> String {
    let mut content = String::from("# Lesson\n\nIntro paragraph with **bold**, *italic* and `code`.\n\n");
    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str("Some paragraph content with a [link](https://example.com).\nIt wraps onto a second line.\n\n");
        content.push_str("- First point\n- Second point\n1. Step one\n2. Step two\n\n");
        content.push_str("| Term | Meaning |\n|------|---------|\n| a | first |\n| b | second |\n\n");
        content.push_str("> A quoted remark.\n\n");
        if section % 3 == 0 {
            content.push_str("```rust\nfn example() {\n    let value = 42;\n}\n```\n\n");
        }
        if section % 5 == 0 {
            content.push_str("```mermaid\ngraph TD\n  A --> B\n```\n\n");
        }
    }
    content
}

/// A JSON payload cut off inside its quiz array.
#[allow(dead_code)]
pub fn generate_truncated_payload(sections: usize) -> String {
    let lesson = generate_lesson_markdown(sections)
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!(r#"{{"titulo": "Lesson", "lesson": "{lesson}", "quiz": [{{"q": "What is"#)
}

#[allow(dead_code)]
pub fn generate_fenced_payload(sections: usize) -> String {
    let lesson = generate_lesson_markdown(sections)
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("Here is your lesson:\n```json\n{{\"lesson\": \"{lesson}\", \"quiz\": []}}\n```\n")
}
