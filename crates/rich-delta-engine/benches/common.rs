use rich_delta_engine::Operation;
use serde_json::json;

/// A delta mixing paragraphs, headings, lists, quotes, code and embeds, repeated
/// `size` times.
pub fn generate_delta(size: usize) -> Vec<Operation> {
    let mut ops = Vec::new();
    for i in 0..size {
        ops.push(Operation::text(format!("Section {i}")));
        ops.push(Operation::text("\n").with_attr("header", json!(2)));
        ops.push(Operation::text("Paragraph with "));
        ops.push(Operation::text("bold").with_attr("bold", json!(true)));
        ops.push(Operation::text(" content.\nSecond line.\n\n"));
        for item in ["one", "two", "three"] {
            ops.push(Operation::text(item));
            ops.push(Operation::text("\n").with_attr("list", json!("bullet")));
        }
        ops.push(Operation::text("@user").with_attr("mention", json!({ "name": "user" })));
        ops.push(Operation::text(" said\n"));
        ops.push(Operation::text("let x = 1;"));
        ops.push(Operation::text("\n").with_attr("code-block", json!(true)));
        ops.push(Operation::embed(
            json!({ "embed-external": { "data": { "url": "https://example.com" } } }),
        ));
    }
    ops
}
