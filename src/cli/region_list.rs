use crate::core::region::Region;

/// Lines printed by `connect-chat-config regions`.
///
/// `*` marks the configured region; `chat` flags regions where the
/// contact-center service offers chat.
pub fn region_lines(current: Option<Region>) -> Vec<String> {
    let mut lines = vec!["Supported regions:\n".to_string()];
    for region in Region::ALL {
        let mark = if Some(region) == current { "*" } else { " " };
        let chat = if region.supports_connect_chat() {
            "chat"
        } else {
            "    "
        };
        lines.push(format!(
            "  {} {:<15} {} {}",
            mark,
            region.as_str(),
            chat,
            region.display_name()
        ));
    }

    match current {
        Some(region) => lines.push(format!("\nCurrent: {region}")),
        None => lines.push("\nCurrent: (unset)".to_string()),
    }
    lines
}

pub fn list_regions(current: Option<Region>) {
    for line in region_lines(current) {
        println!("{line}");
    }
}
