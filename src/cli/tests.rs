use super::*;
use crate::core::config::SettingKey;
use tempfile::TempDir;

mod test_helpers {
    use super::*;

    pub(super) fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv)
            .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
    }
}

use test_helpers::parse_args;

#[test]
fn no_subcommand_defaults_to_none() {
    let args = parse_args(&["connect-chat-config"]);
    assert!(args.command.is_none());
    assert!(args.config.is_none());
    assert!(!args.no_keyring);
    assert_eq!(args.verbose, 0);
}

#[test]
fn global_flags_parse_after_subcommand() {
    let argv = [
        "connect-chat-config",
        "check",
        "--config",
        "/tmp/chat.toml",
        "--no-keyring",
        "-vv",
    ];
    let args = parse_args(&argv);
    assert_eq!(args.command, Some(Commands::Check));
    assert_eq!(args.config, Some(PathBuf::from("/tmp/chat.toml")));
    assert!(args.no_keyring);
    assert_eq!(args.verbose, 2);
}

#[test]
fn show_accepts_json_flag() {
    let args = parse_args(&["connect-chat-config", "show", "--json"]);
    assert_eq!(args.command, Some(Commands::Show { json: true }));
}

#[test]
fn set_joins_trailing_words() {
    let argv = ["connect-chat-config", "set", "agent-name", "Support", "Bot"];
    match parse_args(&argv).command {
        Some(Commands::Set {
            key,
            value,
            keyring,
        }) => {
            assert_eq!(key, "agent-name");
            assert_eq!(value, vec!["Support".to_string(), "Bot".to_string()]);
            assert!(!keyring);
        }
        other => panic!("expected set command for argv={argv:?}, got {other:?}"),
    }
}

#[test]
fn set_and_unset_accept_keyring_flag() {
    let args = parse_args(&[
        "connect-chat-config",
        "set",
        "--keyring",
        "instance-id",
        "abc-123",
    ]);
    assert_eq!(
        args.command,
        Some(Commands::Set {
            key: "instance-id".to_string(),
            value: vec!["abc-123".to_string()],
            keyring: true,
        })
    );

    let args = parse_args(&["connect-chat-config", "unset", "instance-id", "--keyring"]);
    assert_eq!(
        args.command,
        Some(Commands::Unset {
            key: "instance-id".to_string(),
            keyring: true,
        })
    );
}

#[test]
fn set_keyring_flag_after_value_is_a_flag() {
    let argv = [
        "connect-chat-config",
        "set",
        "instance-id",
        "abc-123",
        "--keyring",
    ];
    assert_eq!(
        parse_args(&argv).command,
        Some(Commands::Set {
            key: "instance-id".to_string(),
            value: vec!["abc-123".to_string()],
            keyring: true,
        })
    );
}

#[test]
fn set_values_after_separator_may_start_with_dash() {
    let argv = ["connect-chat-config", "set", "agent-name", "--", "-Bot-"];
    match parse_args(&argv).command {
        Some(Commands::Set { value, keyring, .. }) => {
            assert_eq!(value, vec!["-Bot-".to_string()]);
            assert!(!keyring);
        }
        other => panic!("expected set command for argv={argv:?}, got {other:?}"),
    }
}

#[test]
fn unset_requires_key() {
    assert!(Args::try_parse_from(["connect-chat-config", "unset"]).is_err());
}

#[test]
fn context_uses_explicit_config_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("chat.toml");
    let path_arg = path.to_string_lossy().to_string();

    let args = parse_args(&["connect-chat-config", "--config", &path_arg, "--no-keyring"]);
    let context = CliContext::from_args(&args).expect("context");
    assert_eq!(context.orchestrator.path(), path.as_path());
    assert!(!context.secrets.is_enabled());
}

#[test]
fn context_store_selects_target() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("chat.toml");
    let context = CliContext::new(path.clone(), false);

    assert_eq!(context.store(false).label(), "config file");
    assert_eq!(context.store(true).label(), "keyring");

    context
        .store(false)
        .store(SettingKey::Region, "us-west-2")
        .expect("store region");
    let saved = ChatSettings::load_from_path(&path).expect("load");
    assert_eq!(saved.region.as_deref(), Some("us-west-2"));
}
