use rulu_ide_lib::config::TOOL_ENV_VAR;
use rulu_ide_lib::BridgeConfig;
use std::path::PathBuf;

// Only test in this binary: it is the sole writer of the process environment
#[test]
fn test_from_env_reads_tool_override() {
    std::env::set_var(TOOL_ENV_VAR, "/usr/local/bin/rulu-nightly");
    assert_eq!(
        BridgeConfig::from_env().tool_program,
        PathBuf::from("/usr/local/bin/rulu-nightly")
    );

    std::env::set_var(TOOL_ENV_VAR, "");
    assert_eq!(BridgeConfig::from_env().tool_program, PathBuf::from("rulu"));

    std::env::remove_var(TOOL_ENV_VAR);
    assert_eq!(BridgeConfig::from_env().tool_program, PathBuf::from("rulu"));
}
