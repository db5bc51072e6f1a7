/// Application name
pub const APP_NAME: &str = "classguard";

/// Environment variable naming a whitelist file
pub const WHITELIST_ENV: &str = "CLASSGUARD_WHITELIST";

/// Environment variable naming the collision policy
pub const POLICY_ENV: &str = "CLASSGUARD_POLICY";

/// Whitelist file names looked up inside a stage-library root
pub const WHITELIST_FILE_NAMES: [&str; 4] = [
    "collision-whitelist.toml",
    "collision-whitelist.yaml",
    "collision-whitelist.yml",
    "collision-whitelist.json",
];
