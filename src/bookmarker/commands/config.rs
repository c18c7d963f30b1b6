use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Settings;
use crate::settings::SettingsManager;
use crate::store::StorageBackend;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run<B: StorageBackend>(
    settings: &mut SettingsManager<B>,
    action: ConfigAction,
) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_settings(settings.settings())),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match settings.settings().get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => result.add_message(CmdMessage::error(unknown_key(&key))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut result = CmdResult::default();
            let Some(changed) = result.recover("Settings not saved", settings.set(&key, &value))?
            else {
                return Ok(result);
            };

            let current = settings.settings();
            let shown = current.get(&key).unwrap_or(value);
            if changed {
                result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            } else {
                result.add_message(CmdMessage::info(format!("{} is already {}", key, shown)));
            }
            Ok(result.with_settings(current))
        }
    }
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown setting: {} (known: {})",
        key,
        Settings::KEYS.join(", ")
    )
}
