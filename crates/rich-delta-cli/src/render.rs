use rich_delta_engine::{Group, GroupItem};

/// One-line label for a group in the inspector list and the printed output.
pub fn group_title(index: usize, group: &Group) -> String {
    let line = group.line_kind().map_or("paragraph", |k| k.name());
    format!("#{index} {line} ({} blot{})", group.len(), plural(group.len()))
}

/// The blots of a group, one per line, followed by its mentions.
pub fn describe_group(group: &Group) -> Vec<String> {
    let mut lines: Vec<String> = group.items().iter().map(describe_item).collect();

    let mentions = group.mention_usernames();
    if !mentions.is_empty() {
        lines.push(format!("mentions: {}", mentions.join(", ")));
    }
    lines
}

fn describe_item(item: &GroupItem) -> String {
    let mut line = format!("{} {:?}", item.blot.kind(), item.blot.content());
    if let Some(data) = item.blot.embed_data() {
        line.push_str(&format!(" {data}"));
    }
    if !item.formats.is_empty() {
        let formats: Vec<String> = item
            .formats
            .iter()
            .map(|f| match f.target() {
                Some(target) => format!("{}({target})", f.kind()),
                None => f.kind().to_string(),
            })
            .collect();
        line.push_str(&format!(" [{}]", formats.join(", ")));
    }
    line
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
