use crate::core::config::keys::SettingKey;
use crate::core::config::sources::ResolvedSettings;

impl ResolvedSettings {
    pub fn print_all(&self) {
        for line in self.summary_lines() {
            println!("{line}");
        }
    }

    /// One line per key: `  name: value [source]`, or `(unset)`.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec!["Current configuration:".to_string()];
        for key in SettingKey::ALL {
            let line = match (self.settings.get(key), self.source(key)) {
                (Some(value), Some(source)) => {
                    format!("  {}: {} [{}]", key.cli_name(), value, source)
                }
                (Some(value), None) => format!("  {}: {}", key.cli_name(), value),
                (None, _) if key.is_required() => {
                    format!("  {}: (unset, required)", key.cli_name())
                }
                (None, _) => format!("  {}: (unset)", key.cli_name()),
            };
            lines.push(line);
        }
        lines
    }
}
